use log::{debug, info};
use printpdf::{PdfDocument, PdfSaveOptions};

use crate::constants::mm_to_pt;
use crate::options::BookletOptions;
use crate::plan::ImpositionPlan;
use crate::sheet::{SlotGeometry, render_sheet_side};
use crate::source::{PageSource, PdfiumPageSource, init_pdfium};
use crate::types::*;

/// Impose a PDF (as raw bytes) into a 2-up booklet.
///
/// Rendering is CPU-bound, so the work runs on a blocking thread.
pub async fn impose(input: Vec<u8>, options: &BookletOptions) -> Result<Vec<u8>> {
    let options = options.clone();
    tokio::task::spawn_blocking(move || impose_bytes(&input, &options)).await?
}

/// Synchronous imposition entry point. Binds pdfium, opens the document, and
/// renders every sheet-side of the plan.
pub fn impose_bytes(input: &[u8], options: &BookletOptions) -> Result<Vec<u8>> {
    options.validate()?;

    let pdfium = init_pdfium().map_err(|e| BookletError::Pdf(e.to_string()))?;
    let source = PdfiumPageSource::open(&pdfium, input)?;
    impose_pages(&source, options)
}

/// Impose pages from any [`PageSource`] into a booklet PDF.
pub fn impose_pages(source: &dyn PageSource, options: &BookletOptions) -> Result<Vec<u8>> {
    options.validate()?;

    let plan = ImpositionPlan::new(source.page_count(), options.auto_pad);
    if plan.pages.blanks_added() > 0 {
        info!(
            "Padding {} pages to {} with {} blank fillers",
            plan.pages.original,
            plan.pages.padded,
            plan.pages.blanks_added()
        );
    }

    let (width_mm, height_mm) = options
        .paper_size
        .dimensions_with_orientation(options.orientation);
    let geometry = SlotGeometry::new(
        mm_to_pt(width_mm),
        mm_to_pt(height_mm),
        mm_to_pt(options.gap_mm),
    );
    let landscape_output = options.orientation == Orientation::Landscape;

    let mut doc = PdfDocument::new("Booklet");
    let mut pages = Vec::with_capacity(plan.sheets.len());

    for (index, sheet) in plan.sheets.iter().enumerate() {
        debug!(
            "Sheet side {}/{}: pages {} and {}",
            index + 1,
            plan.sheets.len(),
            sheet.left,
            sheet.right
        );
        pages.push(render_sheet_side(
            &mut doc,
            sheet,
            &geometry,
            landscape_output,
            source,
            options.dpi,
        )?);
    }

    doc.with_pages(pages);
    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    for warning in &warnings {
        debug!("PDF writer warning: {:?}", warning);
    }

    Ok(bytes)
}
