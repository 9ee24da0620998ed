use serde::{Deserialize, Serialize};

/// Rows per page in the student table.
pub const PAGE_SIZE: usize = 10;

/// Pagination metadata for a client-side page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    /// `page` is clamped into `1..=total_pages` (at least 1).
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let total_pages = total_pages(total, limit);
        let page = page.clamp(1, total_pages.max(1));
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index range of the rows on the current page.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self
            .page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(self.total);
        let end = start.saturating_add(self.limit).min(self.total);
        start..end
    }

    /// Controls are only shown when there is more than one page.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    /// Page buttons for the current position. See [`page_items`].
    pub fn items(&self) -> Vec<PageItem> {
        page_items(self.page, self.total_pages)
    }
}

/// Number of pages needed for `total` rows, 0 when there are none.
pub fn total_pages(total: usize, limit: usize) -> usize {
    if limit == 0 {
        return 1;
    }
    total.div_ceil(limit)
}

/// One slot in the page-number bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page-number buttons for `current` out of `total` pages.
///
/// The first and last page are always present, as is `current ± 1`. A page
/// exactly two away from `current` collapses into an ellipsis, so there is
/// never more than one ellipsis on either side.
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    let mut items = Vec::new();
    for i in 1..=total {
        let near = i + 1 >= current && i <= current + 1;
        if i == 1 || i == total || near {
            items.push(PageItem::Page(i));
        } else if i + 2 == current || i == current + 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    items
}
