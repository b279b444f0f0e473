pub mod plan;

mod constants;
mod impose;
mod io;
mod options;
mod sheet;
mod source;
mod stats;
mod types;

pub use impose::{impose, impose_bytes, impose_pages};
pub use io::{impose_file, load_input, save_output};
pub use options::*;
pub use plan::{ImpositionPlan, PageCount, SheetSide};
pub use sheet::{SlotGeometry, fit_scale, needs_rotation, slot_position};
pub use source::{PageSource, PdfiumPageSource, blank_page, init_pdfium};
pub use stats::{BookletStatistics, calculate_statistics};
pub use types::*;
