//! Booklet imposition planning
//!
//! Computes, ahead of any rendering, which two logical pages land on each
//! output sheet-side. Pages are taken in groups of four and interleaved in
//! signature order: the group `[a, a+1, a+2, a+3]` produces the sheet-sides
//! `(a+1, a+2)` then `(a+3, a)`, so the duplex-printed, folded stack reads
//! in sequence.

/// Original and padded logical page counts for one conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCount {
    /// Number of real pages in the source document
    pub original: usize,
    /// Logical page count after padding to a multiple of four
    pub padded: usize,
}

impl PageCount {
    pub fn new(original: usize, auto_pad: bool) -> Self {
        let padded = if auto_pad {
            original + (4 - original % 4) % 4
        } else {
            original
        };
        Self { original, padded }
    }

    /// Number of blank filler pages introduced by padding
    pub fn blanks_added(&self) -> usize {
        self.padded - self.original
    }
}

/// One output sheet-side: the 1-based logical pages in its left and right
/// slots. An index greater than the original page count denotes a blank
/// filler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSide {
    pub left: usize,
    pub right: usize,
}

/// The complete, immutable plan for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpositionPlan {
    pub pages: PageCount,
    pub sheets: Vec<SheetSide>,
}

impl ImpositionPlan {
    pub fn new(original: usize, auto_pad: bool) -> Self {
        let pages = PageCount::new(original, auto_pad);

        // The renderer always consumes whole groups of four, so a trailing
        // partial group (auto_pad off) still yields two sheet-sides whose
        // out-of-range slots are fillers.
        let groups = pages.padded.div_ceil(4);
        let mut sheets = Vec::with_capacity(groups * 2);
        for group in 0..groups {
            let a = group * 4 + 1;
            sheets.push(SheetSide {
                left: a + 1,
                right: a + 2,
            });
            sheets.push(SheetSide {
                left: a + 3,
                right: a,
            });
        }

        Self { pages, sheets }
    }

    /// Whether a 1-based logical page index refers to a blank filler
    pub fn is_filler(&self, page: usize) -> bool {
        page > self.pages.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_arithmetic() {
        for original in 0..=33 {
            let pages = PageCount::new(original, true);
            assert!(pages.padded >= original);
            assert_eq!(pages.padded % 4, 0);
            assert_eq!(pages.blanks_added(), (4 - original % 4) % 4);
        }
    }

    #[test]
    fn test_multiple_of_four_needs_no_padding() {
        for original in [0, 4, 8, 12, 100] {
            assert_eq!(PageCount::new(original, true).padded, original);
        }
    }

    #[test]
    fn test_no_pad_keeps_original_count() {
        let pages = PageCount::new(6, false);
        assert_eq!(pages.original, 6);
        assert_eq!(pages.padded, 6);
        assert_eq!(pages.blanks_added(), 0);
    }

    #[test]
    fn test_empty_plan() {
        let plan = ImpositionPlan::new(0, true);
        assert!(plan.sheets.is_empty());
        let plan = ImpositionPlan::new(0, false);
        assert!(plan.sheets.is_empty());
    }

    #[test]
    fn test_four_page_signature_order() {
        let plan = ImpositionPlan::new(4, true);
        assert_eq!(
            plan.sheets,
            vec![
                SheetSide { left: 2, right: 3 },
                SheetSide { left: 4, right: 1 },
            ]
        );
    }

    #[test]
    fn test_eight_page_signature_order() {
        let plan = ImpositionPlan::new(8, true);
        assert_eq!(
            plan.sheets,
            vec![
                SheetSide { left: 2, right: 3 },
                SheetSide { left: 4, right: 1 },
                SheetSide { left: 6, right: 7 },
                SheetSide { left: 8, right: 5 },
            ]
        );
    }

    #[test]
    fn test_plan_length_matches_padded_count() {
        for original in 0..=33 {
            let plan = ImpositionPlan::new(original, true);
            assert_eq!(plan.sheets.len() * 2, plan.pages.padded);
        }
    }

    #[test]
    fn test_six_pages_pads_to_eight_with_trailing_fillers() {
        let plan = ImpositionPlan::new(6, true);
        assert_eq!(plan.pages.padded, 8);

        let fillers: Vec<usize> = plan
            .sheets
            .iter()
            .flat_map(|s| [s.left, s.right])
            .filter(|&p| plan.is_filler(p))
            .collect();
        assert_eq!(fillers, vec![8, 7]);
    }

    #[test]
    fn test_partial_group_is_still_rendered_without_padding() {
        // With auto_pad off the padded count stays at 6, but the last group
        // of four still yields two sheet-sides referencing fillers 7 and 8.
        let plan = ImpositionPlan::new(6, false);
        assert_eq!(plan.pages.padded, 6);
        assert_eq!(plan.sheets.len(), 4);
        assert_eq!(plan.sheets[2], SheetSide { left: 6, right: 7 });
        assert_eq!(plan.sheets[3], SheetSide { left: 8, right: 5 });
        assert!(plan.is_filler(7));
        assert!(plan.is_filler(8));
        assert!(!plan.is_filler(6));
    }

    #[test]
    fn test_interleave_is_independent_of_page_count() {
        // Every group of four contributes the same fixed interleave.
        for original in [4, 8, 12, 16, 20] {
            let plan = ImpositionPlan::new(original, true);
            for (group, pair) in plan.sheets.chunks(2).enumerate() {
                let a = group * 4 + 1;
                assert_eq!(pair[0], SheetSide { left: a + 1, right: a + 2 });
                assert_eq!(pair[1], SheetSide { left: a + 3, right: a });
            }
        }
    }
}
