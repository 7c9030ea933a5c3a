//! Client-side pagination over an already-loaded collection.
//!
//! Pages are 1-indexed. `paginate` never clamps: callers keep the current
//! page in range through the navigation controls.

use serde::Serialize;

/// Maximum number of numbered page buttons shown at once.
pub const MAX_PAGE_BUTTONS: usize = 3;

/// Slice of `items` shown on `page`.
///
/// Out-of-range pages (including page 0) and a zero page size yield an empty
/// slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(len / page_size)`; zero items (or a zero page size) means zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Numbered pages to display around `current`.
///
/// The window starts at `current - 2`, pulled back so it never runs past
/// the last page and never starts below page 1.
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    let len = total.min(MAX_PAGE_BUTTONS);
    let last_start = (total + 1).saturating_sub(MAX_PAGE_BUTTONS);
    let start = current.saturating_sub(2).min(last_start).max(1);

    (start..start + len).filter(|page| *page <= total).collect()
}

/// Arrow button (first / previous / next / last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavButton {
    /// Page the button navigates to.
    pub target: usize,
    pub enabled: bool,
}

/// Numbered page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub page: usize,
    pub active: bool,
}

/// Full navigation bar state for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub current: usize,
    pub total: usize,
    pub first: NavButton,
    pub previous: NavButton,
    pub pages: Vec<PageButton>,
    pub next: NavButton,
    pub last: NavButton,
}

impl PageControls {
    pub fn new(current: usize, total: usize) -> Self {
        let at_start = current <= 1;
        let at_end = current >= total;

        Self {
            current,
            total,
            first: NavButton {
                target: 1,
                enabled: !at_start,
            },
            previous: NavButton {
                target: current.saturating_sub(1).max(1),
                enabled: !at_start,
            },
            pages: page_window(current, total)
                .into_iter()
                .map(|page| PageButton {
                    page,
                    active: page == current,
                })
                .collect(),
            next: NavButton {
                target: (current + 1).min(total.max(1)),
                enabled: !at_end,
            },
            last: NavButton {
                target: total.max(1),
                enabled: !at_end,
            },
        }
    }
}
