//! Page sources - rasterizing one logical page at a time
//!
//! A [`PageSource`] hands the sheet renderer a transient raster per slot.
//! Indices past the real page count yield a blank filler so the renderer can
//! always consume whole groups of four.

use crate::constants::{FILLER_SIZE_PX, POINTS_PER_INCH};
use crate::types::{BookletError, Result};
use image::{DynamicImage, Rgb, RgbImage};
use pdfium_render::prelude::*;

/// Supplies one rasterized page at a time. Rendered images are transient:
/// created per slot, consumed once, never cached.
pub trait PageSource {
    /// Number of real pages in the source document
    fn page_count(&self) -> usize;

    /// Rasterize the 1-based `page` at `dpi`. Indices beyond
    /// [`page_count`](Self::page_count) return the blank filler image.
    fn render_page(&self, page: usize, dpi: f32) -> Result<DynamicImage>;
}

/// The blank white raster used for filler pages. Square on purpose: a 1:1
/// aspect never triggers the landscape rotation rule.
pub fn blank_page() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(
        FILLER_SIZE_PX,
        FILLER_SIZE_PX,
        Rgb([255, 255, 255]),
    ))
}

/// Initialize Pdfium, trying the vendored library first, then falling back to system
pub fn init_pdfium() -> std::result::Result<Pdfium, PdfiumError> {
    // Try to load from vendor directory (relative to workspace root)
    let vendor_path = std::env::current_dir().ok().and_then(|mut p| {
        p.push("vendor/pdfium/lib");
        if p.exists() { Some(p) } else { None }
    });

    if let Some(vendor_path) = vendor_path {
        if let Ok(binding) =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&vendor_path))
        {
            return Ok(Pdfium::new(binding));
        }
    }

    Pdfium::bind_to_system_library().map(Pdfium::new)
}

/// Page source backed by a pdfium document
pub struct PdfiumPageSource<'a> {
    document: PdfDocument<'a>,
}

impl<'a> PdfiumPageSource<'a> {
    /// Open a document from raw bytes. Fails with
    /// [`BookletError::InvalidInput`] when the bytes are not a parseable PDF.
    pub fn open(pdfium: &'a Pdfium, bytes: &'a [u8]) -> Result<Self> {
        let document = pdfium
            .load_pdf_from_byte_slice(bytes, None)
            .map_err(|e| BookletError::InvalidInput(e.to_string()))?;
        Ok(Self { document })
    }
}

impl PageSource for PdfiumPageSource<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn render_page(&self, page: usize, dpi: f32) -> Result<DynamicImage> {
        if page > self.page_count() {
            return Ok(blank_page());
        }

        let index = u16::try_from(page - 1).map_err(|_| BookletError::PageRender {
            page,
            message: "page index exceeds pdfium limits".to_string(),
        })?;

        let pdf_page = self
            .document
            .pages()
            .get(index)
            .map_err(|e| BookletError::PageRender {
                page,
                message: e.to_string(),
            })?;

        // Pages are sized in points; dpi/72 converts that to target pixels.
        let config = PdfRenderConfig::new().scale_page_by_factor(dpi / POINTS_PER_INCH);
        let bitmap = pdf_page
            .render_with_config(&config)
            .map_err(|e| BookletError::PageRender {
                page,
                message: e.to_string(),
            })?;

        Ok(bitmap.as_image())
    }
}
