use image::{DynamicImage, Rgb, RgbImage};
use pdf_booklet::*;

/// In-memory page source for exercising the renderer without a real
/// document. Pages past the count come back as blank fillers, matching
/// the [`PageSource`] contract.
struct FakeSource {
    pages: Vec<(u32, u32)>,
}

impl FakeSource {
    fn uniform(count: usize, width: u32, height: u32) -> Self {
        Self {
            pages: vec![(width, height); count],
        }
    }
}

impl PageSource for FakeSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn render_page(&self, page: usize, _dpi: f32) -> Result<DynamicImage> {
        match self.pages.get(page - 1) {
            Some(&(w, h)) => Ok(DynamicImage::ImageRgb8(RgbImage::from_pixel(
                w,
                h,
                Rgb([200, 200, 200]),
            ))),
            None => Ok(blank_page()),
        }
    }
}

/// Source whose pages always fail to render
struct BrokenSource {
    count: usize,
}

impl PageSource for BrokenSource {
    fn page_count(&self) -> usize {
        self.count
    }

    fn render_page(&self, page: usize, _dpi: f32) -> Result<DynamicImage> {
        Err(BookletError::PageRender {
            page,
            message: "simulated failure".to_string(),
        })
    }
}

fn output_page_count(bytes: &[u8]) -> usize {
    let doc = lopdf::Document::load_mem(bytes).unwrap();
    doc.get_pages().len()
}

#[test]
fn test_output_has_one_page_per_sheet_side() {
    for source_pages in [1, 2, 3, 4, 5, 6, 7, 8, 12, 13] {
        let source = FakeSource::uniform(source_pages, 400, 600);
        let options = BookletOptions::default();

        let bytes = impose_pages(&source, &options).unwrap();
        let expected = calculate_statistics(source_pages, true).sheet_sides;
        assert_eq!(
            output_page_count(&bytes),
            expected,
            "wrong page count for {} source pages",
            source_pages
        );
    }
}

#[test]
fn test_output_page_count_without_padding() {
    // A trailing partial group still produces two sheet-sides.
    let source = FakeSource::uniform(6, 400, 600);
    let options = BookletOptions {
        auto_pad: false,
        ..Default::default()
    };

    let bytes = impose_pages(&source, &options).unwrap();
    assert_eq!(output_page_count(&bytes), 4);
}

#[test]
fn test_options_do_not_change_page_count() {
    let source_pages = 5;
    for gap_mm in [0.0, 10.0] {
        for dpi in [72.0, 150.0] {
            for orientation in [Orientation::Portrait, Orientation::Landscape] {
                let source = FakeSource::uniform(source_pages, 500, 300);
                let options = BookletOptions {
                    dpi,
                    gap_mm,
                    orientation,
                    ..Default::default()
                };

                let bytes = impose_pages(&source, &options).unwrap();
                assert_eq!(output_page_count(&bytes), 4);
            }
        }
    }
}

#[test]
fn test_empty_input_yields_valid_empty_pdf() {
    let source = FakeSource::uniform(0, 400, 600);
    let options = BookletOptions::default();

    let bytes = impose_pages(&source, &options).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(output_page_count(&bytes), 0);
}

#[test]
fn test_wide_pages_impose_in_both_orientations() {
    // Wide pages are rotated in landscape output and left alone in
    // portrait; either way the run completes.
    let source = FakeSource::uniform(4, 800, 300);
    for orientation in [Orientation::Portrait, Orientation::Landscape] {
        let options = BookletOptions {
            orientation,
            ..Default::default()
        };
        let bytes = impose_pages(&source, &options).unwrap();
        assert_eq!(output_page_count(&bytes), 2);
    }
}

#[test]
fn test_render_failure_reports_page() {
    let source = BrokenSource { count: 4 };
    let options = BookletOptions::default();

    let err = impose_pages(&source, &options).unwrap_err();
    match err {
        BookletError::PageRender { page, .. } => assert_eq!(page, 2),
        other => panic!("expected PageRender, got {:?}", other),
    }
}

#[test]
fn test_invalid_dpi_rejected_before_rendering() {
    let source = BrokenSource { count: 4 };
    let options = BookletOptions {
        dpi: 0.0,
        ..Default::default()
    };

    // BrokenSource would fail any render attempt, so reaching Config
    // proves validation ran first.
    let err = impose_pages(&source, &options).unwrap_err();
    assert!(matches!(err, BookletError::Config(_)));
}

#[tokio::test]
async fn test_impose_rejects_garbage_bytes() {
    let options = BookletOptions::default();
    let result = impose(b"not a pdf".to_vec(), &options).await;
    assert!(matches!(
        result,
        Err(BookletError::InvalidInput(_)) | Err(BookletError::Pdf(_))
    ));
}
