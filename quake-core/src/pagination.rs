//! Page windowing and the compact page strip used for navigation.

use std::fmt;

use crate::error::{QuakeError, Result};

/// Records shown per page in the results view.
pub const RESULTS_PER_PAGE: usize = 13;

/// Pages shown on each side of the current page in the strip.
pub const DEFAULT_DELTA: usize = 1;

/// One slot of the navigation strip.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PageItem {
    Page(usize),
    /// Placeholder for collapsed pages; never selectable.
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{n}"),
            PageItem::Ellipsis => write!(f, "..."),
        }
    }
}

/// Number of pages needed for `total_items`. Zero when there is nothing to show.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// `[start, end)` indices of a one-based page, clipped to `total_items`.
pub fn page_range(total_items: usize, page: usize, page_size: usize) -> (usize, usize) {
    if page == 0 || page_size == 0 {
        return (0, 0);
    }
    let start = (page - 1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    (start, end)
}

/// The items visible on a one-based page.
///
/// Pages past the end (and page zero) are empty; callers clamp first.
pub fn window_of<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let (start, end) = page_range(items.len(), page, page_size);
    &items[start..end]
}

/// Compact page strip with ellipsis collapsing.
///
/// Page 1 and the last page are always present, plus `delta` pages either
/// side of `current`. Gaps become a single [`PageItem::Ellipsis`].
pub fn page_strip(current: usize, total: usize, delta: usize) -> Vec<PageItem> {
    let mut pages = vec![PageItem::Page(1)];
    if total <= 1 {
        return pages;
    }

    let lo = current.saturating_sub(delta).max(2);
    let hi = current.saturating_add(delta).min(total - 1);

    if lo > 2 {
        pages.push(PageItem::Ellipsis);
    }
    pages.extend((lo..=hi).map(PageItem::Page));
    if hi < total - 1 {
        pages.push(PageItem::Ellipsis);
    }
    pages.push(PageItem::Page(total));
    pages
}

/// Navigation state for one result set.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PageWindow {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl PageWindow {
    pub fn new(page_size: usize, total_items: usize) -> Result<PageWindow> {
        if page_size == 0 {
            return Err(QuakeError::InvalidPageSize);
        }
        Ok(PageWindow {
            current_page: 1,
            page_size,
            total_items,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Jump to `page` as given. Only pass pages taken from the strip.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn previous(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn next(&mut self) {
        self.current_page = (self.current_page + 1).min(self.total_pages().max(1));
    }

    /// New record set: back to the first page.
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    /// Switch page size, staying on page 1.
    pub fn resize(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(QuakeError::InvalidPageSize);
        }
        self.page_size = page_size;
        self.current_page = 1;
        Ok(())
    }

    pub fn is_first(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last(&self) -> bool {
        self.current_page >= self.total_pages()
    }

    /// `[start, end)` of the current page within the full list.
    pub fn item_range(&self) -> (usize, usize) {
        page_range(self.total_items, self.current_page, self.page_size)
    }

    pub fn strip(&self, delta: usize) -> Vec<PageItem> {
        page_strip(self.current_page, self.total_pages(), delta)
    }

    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        window_of(items, self.current_page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 13), 0);
        assert_eq!(total_pages(1, 13), 1);
        assert_eq!(total_pages(13, 13), 1);
        assert_eq!(total_pages(14, 13), 2);
        assert_eq!(total_pages(27, 13), 3);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_window_of_bounds() {
        let items: Vec<usize> = (0..30).collect();
        for page_size in 1..=31 {
            let pages = total_pages(items.len(), page_size);
            let mut rebuilt = Vec::new();
            for page in 1..=pages {
                let window = window_of(&items, page, page_size);
                assert!(window.len() <= page_size);
                assert!(!window.is_empty());
                rebuilt.extend_from_slice(window);
            }
            assert_eq!(rebuilt, items);
            assert!(window_of(&items, pages + 1, page_size).is_empty());
        }
    }

    #[test]
    fn test_window_of_degenerate_inputs() {
        let items = [1, 2, 3];
        assert!(window_of(&items, 0, 2).is_empty());
        assert!(window_of(&items, 1, 0).is_empty());
        assert!(window_of(&items, usize::MAX, 2).is_empty());
        let empty: [u8; 0] = [];
        assert!(window_of(&empty, 1, 13).is_empty());
    }

    #[test]
    fn test_page_strip_single_page() {
        assert_eq!(page_strip(1, 1, 1), vec![Page(1)]);
        assert_eq!(page_strip(1, 0, 1), vec![Page(1)]);
    }

    #[test]
    fn test_page_strip_collapses_both_sides() {
        assert_eq!(
            page_strip(5, 20, 1),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_page_strip_edges() {
        assert_eq!(page_strip(1, 2, 1), vec![Page(1), Page(2)]);
        assert_eq!(page_strip(1, 3, 1), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_strip(1, 10, 1), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(page_strip(3, 10, 1), vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]);
        assert_eq!(page_strip(10, 10, 1), vec![Page(1), Ellipsis, Page(9), Page(10)]);
        assert_eq!(
            page_strip(5, 20, 2),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(20)]
        );
        assert_eq!(page_strip(2, 5, 0), vec![Page(1), Page(2), Ellipsis, Page(5)]);
    }

    #[test]
    fn test_page_strip_display() {
        let rendered: Vec<String> = page_strip(5, 20, 1).iter().map(|p| p.to_string()).collect();
        assert_eq!(rendered, ["1", "...", "4", "5", "6", "...", "20"]);
    }

    #[test]
    fn test_page_window_navigation() {
        let mut window = PageWindow::new(13, 27).unwrap();
        assert_eq!(window.total_pages(), 3);
        assert!(window.is_first());
        window.previous();
        assert_eq!(window.current_page(), 1);
        window.next();
        window.next();
        assert_eq!(window.current_page(), 3);
        assert!(window.is_last());
        window.next();
        assert_eq!(window.current_page(), 3);
        assert_eq!(window.item_range(), (26, 27));
        window.go_to_page(2);
        assert_eq!(window.item_range(), (13, 26));
        window.reset(5);
        assert_eq!(window.current_page(), 1);
        assert_eq!(window.total_pages(), 1);
    }

    #[test]
    fn test_page_window_rejects_zero_page_size() {
        assert!(matches!(PageWindow::new(0, 10), Err(QuakeError::InvalidPageSize)));
        let mut window = PageWindow::new(5, 10).unwrap();
        window.next();
        assert!(window.resize(0).is_err());
        window.resize(3).unwrap();
        assert_eq!(window.current_page(), 1);
        assert_eq!(window.total_pages(), 4);
    }
}
