// src/core/pager/mod.rs

//! Fixed-size pages over a result list, plus the page-number strip shown
//! under the results.
//!
//! Page numbers are 1-based. The pager never clamps: an out-of-range page
//! yields an empty slice, and clamping is the navigator's job.

use serde::Serialize;

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// `ceil(total / page_size)`, never less than 1.
    pub total_pages: usize,
    /// Length of the full result list.
    pub total_items: usize,
    pub number: usize,
}

impl<T> Page<'_, T> {
    /// True when the underlying result list is empty. Render this as "no
    /// results", not as an empty first page.
    #[must_use]
    pub const fn no_results(&self) -> bool {
        self.total_items == 0
    }
}

/// Number of pages needed for `total` items, never less than 1.
#[must_use]
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Slices page `number` out of `results`.
///
/// Page 0, pages past the end and a zero `page_size` all produce an empty
/// `items` slice.
#[must_use]
pub fn page<T>(results: &[T], page_size: usize, number: usize) -> Page<'_, T> {
    let total_pages = total_pages(results.len(), page_size);
    let items = number
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
        .filter(|start| *start < results.len() && page_size > 0)
        .map_or(&results[..0], |start| {
            let end = start.saturating_add(page_size).min(results.len());
            &results[start..end]
        });

    Page { items, total_pages, total_items: results.len(), number }
}

/// An entry in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageLink {
    Page(usize),
    /// Skipped pages between two links.
    Gap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub links: Vec<PageLink>,
    pub current: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Builds the page-number strip for `current` of `total` pages.
///
/// Shows up to `max_visible` consecutive pages centered on `current`, shifted
/// to stay inside `1..=total`. The first and last page are always linked, with
/// a gap marker when pages are skipped next to them. A single page needs no
/// strip, so `total <= 1` gives an empty window.
#[must_use]
pub fn page_window(current: usize, total: usize, max_visible: usize) -> PageWindow {
    if total <= 1 || max_visible == 0 {
        return PageWindow { links: Vec::new(), current, has_previous: false, has_next: false };
    }
    let current = current.clamp(1, total);

    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total);
    if end + 1 - start < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }

    let mut links = Vec::with_capacity(max_visible + 4);
    if start > 1 {
        links.push(PageLink::Page(1));
        if start > 2 {
            links.push(PageLink::Gap);
        }
    }
    links.extend((start..=end).map(PageLink::Page));
    if end < total {
        if end + 1 < total {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page(total));
    }

    PageWindow { links, current, has_previous: current > 1, has_next: current < total }
}
