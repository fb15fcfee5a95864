//! Horizontally scrolling item rows.
//!
//! Only the items that fit at the current offset are turned into views, so
//! the cost of a draw does not depend on the list length.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselMetrics {
    pub item_width: u16,
    pub gap: u16,
}

impl CarouselMetrics {
    /// Whole items that fit in `width` columns. At least one.
    pub fn capacity(&self, width: u16) -> usize {
        let stride = (self.item_width + self.gap).max(1) as usize;
        ((width as usize + self.gap as usize) / stride).max(1)
    }
}

/// Scroll position of one carousel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    offset: usize,
}

impl CarouselState {
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move by `delta` items, keeping the first visible item inside the list.
    pub fn scroll_by(&mut self, delta: isize, len: usize) {
        let max = len.saturating_sub(1);
        self.offset = self.offset.saturating_add_signed(delta).min(max);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn visible_range(&self, len: usize, metrics: CarouselMetrics, width: u16) -> Range<usize> {
        let start = self.offset.min(len);
        let end = start.saturating_add(metrics.capacity(width)).min(len);
        start..end
    }

    /// Build views for the visible items only.
    pub fn materialize<T, V>(
        &self,
        items: &[T],
        metrics: CarouselMetrics,
        width: u16,
        build: impl FnMut(&T) -> V,
    ) -> Vec<V> {
        items[self.visible_range(items.len(), metrics, width)]
            .iter()
            .map(build)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: CarouselMetrics = CarouselMetrics {
        item_width: 10,
        gap: 2,
    };

    #[test]
    fn capacity_counts_trailing_item_without_gap() {
        assert_eq!(METRICS.capacity(34), 3);
        assert_eq!(METRICS.capacity(33), 2);
        assert_eq!(METRICS.capacity(0), 1);
    }

    #[test]
    fn only_visible_items_are_built() {
        let items: Vec<u32> = (0..100).collect();
        let mut state = CarouselState::default();
        state.scroll_by(10, items.len());

        let mut built = 0;
        let views = state.materialize(&items, METRICS, 34, |item| {
            built += 1;
            *item
        });

        assert_eq!(views, vec![10, 11, 12]);
        assert_eq!(built, 3);
    }

    #[test]
    fn scroll_is_clamped_to_list() {
        let mut state = CarouselState::default();
        state.scroll_by(-3, 5);
        assert_eq!(state.offset(), 0);
        state.scroll_by(50, 5);
        assert_eq!(state.offset(), 4);
        state.scroll_by(1, 0);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn restarting_at_an_offset_yields_the_same_window() {
        let items = ["a", "b", "c", "d"];
        let mut state = CarouselState::default();
        state.scroll_by(2, items.len());
        let first = state.materialize(&items, METRICS, 24, |s| s.to_string());
        let second = state.materialize(&items, METRICS, 24, |s| s.to_string());
        assert_eq!(first, vec!["c", "d"]);
        assert_eq!(first, second);
    }
}
