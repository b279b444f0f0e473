//! Shared constants for booklet imposition

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Reference resolution for vector page sizes (points per inch)
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Defaults
// =============================================================================

/// Default rasterization resolution for source pages
pub const DEFAULT_DPI: f32 = 150.0;

// =============================================================================
// Separator Line
// =============================================================================

/// Dash length for the fold/cut separator line (points on)
pub const SEPARATOR_DASH_ON: i64 = 3;

/// Gap length for the fold/cut separator line (points off)
pub const SEPARATOR_DASH_OFF: i64 = 3;

/// Stroke width of the separator line (points)
pub const SEPARATOR_LINE_WIDTH: f32 = 1.0;

// =============================================================================
// Filler Pages
// =============================================================================

/// Edge length of the square blank filler raster (pixels).
/// A 1:1 aspect keeps filler pages clear of the rotation rule.
pub const FILLER_SIZE_PX: u32 = 100;
