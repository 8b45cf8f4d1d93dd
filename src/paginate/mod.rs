//! Pagination math for listing pages.
//!
//! Pure functions over page counts, plus [`Pagination`] which bundles the
//! inputs and derives everything a paginator needs to render:
//!
//! ```text
//! « 3 4 [5] 6 7 »        full strip  (window of page buttons)
//! ‹ prev   5/10   next › mini strip  (prev/next only)
//! Showing 37 to 45 of 90 summary
//! ```
//!
//! None of this clamps the current page. Callers are expected to navigate
//! only within `1..=total_pages`; out-of-range pages still produce a
//! well-defined (if empty) result.

mod link;

pub use link::page_link;

use std::ops::RangeInclusive;

use serde::Serialize;

// ============================================================================
// Pure calculations
// ============================================================================

/// Contiguous range of page buttons to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub start_page: usize,
    pub end_page: usize,
}

impl PageWindow {
    /// Page numbers in the window. Empty when `end_page < start_page`.
    pub fn pages(&self) -> RangeInclusive<usize> {
        self.start_page..=self.end_page
    }

    pub const fn is_empty(&self) -> bool {
        self.end_page < self.start_page
    }
}

/// 1-based, inclusive item indices shown on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleRange {
    pub first_index: usize,
    pub last_index: usize,
}

/// Window of page buttons centered on `current_page`.
///
/// `start = max(1, current - max_buttons / 2)`,
/// `end = min(total_pages, start + max_buttons - 1)`.
/// With zero pages the window is `1..=0` and nothing should be rendered.
pub fn compute_window(current_page: usize, total_pages: usize, max_buttons: usize) -> PageWindow {
    let start_page = current_page.saturating_sub(max_buttons / 2).max(1);
    let end_page = total_pages.min(start_page.saturating_add(max_buttons).saturating_sub(1));
    PageWindow {
        start_page,
        end_page,
    }
}

/// Number of pages needed for `total_items`.
///
/// # Panics
///
/// Panics if `items_per_page` is zero. Configuration validation rejects
/// a zero page size, so this is a programming error.
pub const fn compute_total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page)
}

/// Item indices for the "Showing X to Y of Z" summary.
///
/// The last index is clamped to `total_items`, the current page is not:
/// past the last page `first_index` exceeds `total_items`.
pub fn compute_visible_range(
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
) -> VisibleRange {
    let offset = current_page.saturating_sub(1).saturating_mul(items_per_page);
    VisibleRange {
        first_index: offset.saturating_add(1),
        last_index: offset.saturating_add(items_per_page).min(total_items),
    }
}

// ============================================================================
// Pagination state
// ============================================================================

/// Page buttons shown when nothing else is configured.
pub const DEFAULT_MAX_BUTTONS: usize = 5;

/// Inputs of a paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
    pub max_page_buttons: usize,
}

/// Page numbers and prev/next targets of a rendered strip.
///
/// `prev` / `next` are `None` when the control is disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageStrip {
    pub pages: Vec<usize>,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl Pagination {
    pub const fn new(
        current_page: usize,
        items_per_page: usize,
        total_items: usize,
        max_page_buttons: usize,
    ) -> Self {
        Self {
            current_page,
            items_per_page,
            total_items,
            max_page_buttons,
        }
    }

    pub const fn total_pages(&self) -> usize {
        compute_total_pages(self.total_items, self.items_per_page)
    }

    pub fn window(&self) -> PageWindow {
        compute_window(self.current_page, self.total_pages(), self.max_page_buttons)
    }

    pub fn visible_range(&self) -> VisibleRange {
        compute_visible_range(self.current_page, self.items_per_page, self.total_items)
    }

    /// `"Showing X to Y of Z"`.
    pub fn summary(&self) -> String {
        let range = self.visible_range();
        format!(
            "Showing {} to {} of {}",
            range.first_index, range.last_index, self.total_items
        )
    }

    /// Whether there is anything to paginate.
    pub const fn is_empty(&self) -> bool {
        self.total_pages() == 0
    }

    /// Full strip: window of page buttons.
    ///
    /// Prev is enabled when the window does not start at page 1, next when
    /// it does not reach the last page. Both move exactly one page.
    pub fn full_strip(&self) -> PageStrip {
        let window = self.window();
        PageStrip {
            pages: window.pages().collect(),
            prev: (window.start_page > 1).then(|| self.current_page.saturating_sub(1)),
            next: (window.end_page < self.total_pages())
                .then_some(self.current_page.saturating_add(1)),
        }
    }

    /// Mini strip: prev/next around the current page only.
    pub fn mini_strip(&self) -> PageStrip {
        PageStrip {
            pages: vec![self.current_page],
            prev: (self.current_page > 1).then(|| self.current_page - 1),
            next: (self.current_page < self.total_pages()).then_some(self.current_page + 1),
        }
    }
}
