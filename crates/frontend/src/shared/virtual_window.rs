//! Windowing for long lists with a fixed row height
//!
//! Only the rows intersecting the viewport (plus `overscan` rows on each side)
//! are rendered; the list container keeps the full height so the scrollbar
//! stays correct.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualWindowParams {
    pub total_items: usize,
    pub row_height: f64,
    pub viewport_height: f64,
    pub scroll_top: f64,
    pub overscan: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualWindow {
    /// First rendered index
    pub start: usize,
    /// One past the last rendered index
    pub end: usize,
    /// Padding above the first rendered row
    pub offset_top: f64,
    pub total_height: f64,
}

impl VirtualWindow {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

pub fn compute_window(params: &VirtualWindowParams) -> VirtualWindow {
    if params.total_items == 0 || !(params.row_height > 0.0) {
        return VirtualWindow {
            start: 0,
            end: 0,
            offset_top: 0.0,
            total_height: 0.0,
        };
    }

    let total_height = params.total_items as f64 * params.row_height;
    let scroll_top = params.scroll_top.max(0.0);
    let viewport_height = params.viewport_height.max(0.0);

    let first_visible = ((scroll_top / params.row_height).floor() as usize).min(params.total_items);
    let last_visible = (((scroll_top + viewport_height) / params.row_height).ceil() as usize)
        .min(params.total_items);

    let start = first_visible.saturating_sub(params.overscan);
    let end = last_visible
        .saturating_add(params.overscan)
        .min(params.total_items);

    VirtualWindow {
        start,
        end,
        offset_top: start as f64 * params.row_height,
        total_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(total_items: usize, scroll_top: f64, overscan: usize) -> VirtualWindowParams {
        VirtualWindowParams {
            total_items,
            row_height: 40.0,
            viewport_height: 400.0,
            scroll_top,
            overscan,
        }
    }

    #[test]
    fn test_top_of_list() {
        let window = compute_window(&params(1000, 0.0, 3));
        assert_eq!(window.range(), 0..13);
        assert_eq!(window.offset_top, 0.0);
        assert_eq!(window.total_height, 40_000.0);
    }

    #[test]
    fn test_middle_of_list_with_partial_row() {
        let window = compute_window(&params(1000, 1_020.0, 2));
        // rows 25..36 intersect the viewport
        assert_eq!(window.range(), 23..38);
        assert_eq!(window.offset_top, 920.0);
        assert_eq!(window.len(), 15);
    }

    #[test]
    fn test_bottom_is_clamped() {
        let window = compute_window(&params(50, 1_800.0, 5));
        assert_eq!(window.end, 50);
        assert_eq!(window.start, 40);
    }

    #[test]
    fn test_scroll_past_end_and_negative_scroll() {
        let past = compute_window(&params(10, 10_000.0, 0));
        assert!(past.is_empty());
        assert_eq!(past.start, 10);

        let negative = compute_window(&params(10, -50.0, 0));
        assert_eq!(negative.range(), 0..10);
    }

    #[test]
    fn test_huge_overscan_covers_whole_list() {
        let window = compute_window(&VirtualWindowParams {
            total_items: 10,
            row_height: 10.0,
            viewport_height: 50.0,
            scroll_top: 0.0,
            overscan: usize::MAX,
        });
        assert_eq!(window.range(), 0..10);
        assert_eq!(window.len(), 10);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(compute_window(&params(0, 0.0, 3)).is_empty());

        let mut zero_height = params(100, 0.0, 3);
        zero_height.row_height = 0.0;
        let window = compute_window(&zero_height);
        assert!(window.is_empty());
        assert_eq!(window.total_height, 0.0);
    }
}
