use crate::plan::PageCount;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Summary of what an imposition run will produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookletStatistics {
    /// Pages in the input document
    pub source_pages: usize,
    /// Logical pages after padding
    pub padded_pages: usize,
    /// Blank fillers appended by padding
    pub blank_pages_added: usize,
    /// Output PDF pages (each holds two source pages)
    pub sheet_sides: usize,
}

/// Compute statistics for an input of `source_pages` pages.
pub fn calculate_statistics(source_pages: usize, auto_pad: bool) -> BookletStatistics {
    let pages = PageCount::new(source_pages, auto_pad);
    BookletStatistics {
        source_pages: pages.original,
        padded_pages: pages.padded,
        blank_pages_added: pages.blanks_added(),
        sheet_sides: pages.padded.div_ceil(4) * 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::ImpositionPlan;

    #[test]
    fn test_statistics_for_padded_input() {
        let stats = calculate_statistics(6, true);
        assert_eq!(stats.source_pages, 6);
        assert_eq!(stats.padded_pages, 8);
        assert_eq!(stats.blank_pages_added, 2);
        assert_eq!(stats.sheet_sides, 4);
    }

    #[test]
    fn test_statistics_for_exact_multiple() {
        let stats = calculate_statistics(12, true);
        assert_eq!(stats.blank_pages_added, 0);
        assert_eq!(stats.sheet_sides, 6);
    }

    #[test]
    fn test_statistics_empty_input() {
        let stats = calculate_statistics(0, true);
        assert_eq!(stats.padded_pages, 0);
        assert_eq!(stats.sheet_sides, 0);
    }

    #[test]
    fn test_sheet_sides_match_plan_length() {
        for pages in 0..40 {
            for auto_pad in [false, true] {
                let plan = ImpositionPlan::new(pages, auto_pad);
                let stats = calculate_statistics(pages, auto_pad);
                assert_eq!(stats.sheet_sides, plan.sheets.len());
            }
        }
    }
}
