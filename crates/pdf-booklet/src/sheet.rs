//! Sheet rendering - placing two page images on one output sheet-side
//!
//! Each sheet-side carries a dashed separator at the fold line and two slots,
//! left and right. A slot image may be rotated upright (landscape output
//! only), is uniformly scaled to fit its half-sheet, and is centered on both
//! axes. Slot placement is a pure function of geometry, offset, and image
//! dimensions.

use crate::constants::{
    POINTS_PER_INCH, SEPARATOR_DASH_OFF, SEPARATOR_DASH_ON, SEPARATOR_LINE_WIDTH, pt_to_mm,
};
use crate::plan::SheetSide;
use crate::source::PageSource;
use crate::types::{BookletError, Result};
use ::image::DynamicImage;
use printpdf::*;
use std::io::Cursor;

/// Slot geometry for one conversion run, in points. Derived once from paper
/// size, orientation, and gap; immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGeometry {
    pub sheet_width: f32,
    pub sheet_height: f32,
    pub gap: f32,
}

impl SlotGeometry {
    pub fn new(sheet_width: f32, sheet_height: f32, gap: f32) -> Self {
        Self {
            sheet_width,
            sheet_height,
            gap,
        }
    }

    /// Width of one slot
    pub fn half_width(&self) -> f32 {
        (self.sheet_width - self.gap) / 2.0
    }

    /// X-offset of the right slot
    pub fn right_slot_x(&self) -> f32 {
        self.half_width() + self.gap
    }
}

/// Uniform scale factor that fits an image into one half-sheet slot.
/// Aspect-preserving; may exceed 1 for undersized sources (fillers included).
pub fn fit_scale(geometry: &SlotGeometry, width_px: u32, height_px: u32) -> f32 {
    let scale_w = geometry.half_width() / width_px as f32;
    let scale_h = geometry.sheet_height / height_px as f32;
    scale_w.min(scale_h)
}

/// Bottom-left corner of a scaled image centered within its slot, both axes.
pub fn slot_position(
    geometry: &SlotGeometry,
    slot_x: f32,
    scaled_width: f32,
    scaled_height: f32,
) -> (f32, f32) {
    (
        slot_x + (geometry.half_width() - scaled_width) / 2.0,
        (geometry.sheet_height - scaled_height) / 2.0,
    )
}

/// Rotation gate: a wider-than-tall source page is stood upright only when
/// the output sheet is landscape. Portrait output never rotates.
pub fn needs_rotation(width_px: u32, height_px: u32, landscape_output: bool) -> bool {
    landscape_output && width_px > height_px
}

/// Dashed grey fold/cut line at the horizontal midpoint, full sheet height
fn separator_ops(geometry: &SlotGeometry) -> Vec<Op> {
    let mid = geometry.sheet_width / 2.0;
    vec![
        Op::SaveGraphicsState,
        Op::SetLineDashPattern {
            dash: LineDashPattern::from_array(&[SEPARATOR_DASH_ON, SEPARATOR_DASH_OFF], 0),
        },
        Op::SetOutlineColor {
            col: Color::Rgb(Rgb {
                r: 0.5,
                g: 0.5,
                b: 0.5,
                icc_profile: None,
            }),
        },
        Op::SetOutlineThickness {
            pt: Pt(SEPARATOR_LINE_WIDTH),
        },
        Op::DrawLine {
            line: Line {
                points: vec![
                    LinePoint {
                        p: Point {
                            x: Pt(mid),
                            y: Pt(0.0),
                        },
                        bezier: false,
                    },
                    LinePoint {
                        p: Point {
                            x: Pt(mid),
                            y: Pt(geometry.sheet_height),
                        },
                        bezier: false,
                    },
                ],
                is_closed: false,
            },
        },
        Op::RestoreGraphicsState,
    ]
}

/// Register a raster with the document as an XObject, returning its id and
/// pixel dimensions
fn embed_image(doc: &mut PdfDocument, image: &DynamicImage) -> Result<(XObjectId, u32, u32)> {
    let (width_px, height_px) = (image.width(), image.height());

    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ::image::ImageFormat::Png)
        .map_err(|e| BookletError::Pdf(format!("PNG encode failed: {e}")))?;

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    let raw = RawImage::decode_from_bytes(&png, &mut warnings)
        .map_err(|e| BookletError::Pdf(format!("image embed failed: {e}")))?;

    Ok((doc.add_image(&raw), width_px, height_px))
}

/// Rotate (if gated in), scale-to-fit, center, and draw one slot image
fn draw_slot(
    doc: &mut PdfDocument,
    ops: &mut Vec<Op>,
    image: DynamicImage,
    geometry: &SlotGeometry,
    slot_x: f32,
    landscape_output: bool,
) -> Result<()> {
    let image = if needs_rotation(image.width(), image.height(), landscape_output) {
        image.rotate90()
    } else {
        image
    };

    let (xobject_id, width_px, height_px) = embed_image(doc, &image)?;

    let scale = fit_scale(geometry, width_px, height_px);
    let (x, y) = slot_position(
        geometry,
        slot_x,
        width_px as f32 * scale,
        height_px as f32 * scale,
    );

    // At dpi=72 printpdf renders 1 px = 1 pt, so the fit scale applies
    // directly as the XObject scale.
    ops.push(Op::UseXobject {
        id: xobject_id,
        transform: XObjectTransform {
            translate_x: Some(Pt(x)),
            translate_y: Some(Pt(y)),
            dpi: Some(POINTS_PER_INCH),
            scale_x: Some(scale),
            scale_y: Some(scale),
            rotate: None,
        },
    });

    Ok(())
}

/// Produce one finished output sheet-side for a plan entry: separator line,
/// then left slot, then right slot.
pub(crate) fn render_sheet_side(
    doc: &mut PdfDocument,
    sheet: &SheetSide,
    geometry: &SlotGeometry,
    landscape_output: bool,
    source: &dyn PageSource,
    dpi: f32,
) -> Result<PdfPage> {
    let mut ops = separator_ops(geometry);

    let left = source.render_page(sheet.left, dpi)?;
    draw_slot(doc, &mut ops, left, geometry, 0.0, landscape_output)?;

    let right = source.render_page(sheet.right, dpi)?;
    draw_slot(
        doc,
        &mut ops,
        right,
        geometry,
        geometry.right_slot_x(),
        landscape_output,
    )?;

    Ok(PdfPage::new(
        Mm(pt_to_mm(geometry.sheet_width)),
        Mm(pt_to_mm(geometry.sheet_height)),
        ops,
    ))
}
