use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfbooklet", about = "Convert a PDF into a 2-up foldable booklet", version)]
struct Cli {
    /// Input PDF file
    #[arg(short, long)]
    input: PathBuf,

    /// Output PDF file
    #[arg(short, long)]
    output: PathBuf,

    /// Rasterization resolution
    #[arg(long, default_value = "150")]
    dpi: f32,

    /// Gap between the two pages on a sheet, in mm
    #[arg(long, default_value = "10")]
    gap: f32,

    /// Output paper size
    #[arg(long, default_value = "a4", value_enum)]
    paper: PaperArg,

    /// Output orientation
    #[arg(long, default_value = "landscape", value_enum)]
    orientation: OrientationArg,

    /// Do not pad the page count to a multiple of four
    #[arg(long)]
    no_pad: bool,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for pdf_booklet::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for pdf_booklet::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = pdf_booklet::BookletOptions {
        dpi: cli.dpi,
        gap_mm: cli.gap,
        orientation: cli.orientation.into(),
        auto_pad: !cli.no_pad,
        paper_size: cli.paper.into(),
    };

    let input = pdf_booklet::load_input(&cli.input).await?;

    // Count pages up front so statistics print before any rendering.
    let source_pages = {
        let pdfium = pdf_booklet::init_pdfium()
            .map_err(|e| anyhow::anyhow!("failed to initialize pdfium: {e}"))?;
        let source = pdf_booklet::PdfiumPageSource::open(&pdfium, &input)?;
        use pdf_booklet::PageSource;
        source.page_count()
    };

    let stats = pdf_booklet::calculate_statistics(source_pages, options.auto_pad);
    println!("Booklet Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Padded pages: {}", stats.padded_pages);
    println!("  Blank pages added: {}", stats.blank_pages_added);
    println!("  Output sheet sides: {}", stats.sheet_sides);

    if cli.stats_only {
        return Ok(());
    }

    let booklet = pdf_booklet::impose(input, &options).await?;
    pdf_booklet::save_output(&cli.output, &booklet).await?;
    println!("Booklet → {}", cli.output.display());

    Ok(())
}
