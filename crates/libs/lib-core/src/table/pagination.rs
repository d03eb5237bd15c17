//! # Pagination State
//!
//! Current page for one table. Requests outside `[1, max_page]` are clamped,
//! and stepping past either end is a no-op, so the footer arrows can be
//! clicked freely even when they are drawn faded.

/// Number of pages needed for `len` items. An empty collection still has one page.
pub fn max_page(len: usize, page_size: usize) -> usize {
    if len == 0 || page_size == 0 {
        1
    } else {
        len.div_ceil(page_size)
    }
}

/// Page number and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub current_page: usize,
    pub page_size: usize,
}

/// Pagination for one table.
///
/// `max_page` is derived from the collection length last passed to
/// [`Pagination::sync`]; the current page never leaves `[1, max_page]`.
#[derive(Debug, Clone)]
pub struct Pagination {
    spec: PageSpec,
    max_page: usize,
}

impl Pagination {
    /// A page size of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            spec: PageSpec {
                current_page: 1,
                page_size: page_size.max(1),
            },
            max_page: 1,
        }
    }

    pub fn spec(&self) -> PageSpec {
        self.spec
    }

    pub fn page(&self) -> usize {
        self.spec.current_page
    }

    pub fn page_size(&self) -> usize {
        self.spec.page_size
    }

    pub fn max_page(&self) -> usize {
        self.max_page
    }

    /// Recompute `max_page` for a collection of `len` items and clamp the page.
    pub fn sync(&mut self, len: usize) {
        self.max_page = max_page(len, self.spec.page_size);
        self.set_page(self.spec.current_page);
    }

    /// Jump to page `n`, clamped into range. Returns the resulting page.
    pub fn set_page(&mut self, n: usize) -> usize {
        self.spec.current_page = n.clamp(1, self.max_page);
        self.spec.current_page
    }

    /// Step forward. Returns false (and changes nothing) on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.spec.current_page += 1;
        true
    }

    /// Step back. Returns false (and changes nothing) on the first page.
    pub fn prev_page(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.spec.current_page -= 1;
        true
    }

    pub fn can_prev(&self) -> bool {
        self.spec.current_page > 1
    }

    pub fn can_next(&self) -> bool {
        self.spec.current_page < self.max_page
    }

    pub fn reset(&mut self) {
        self.spec.current_page = 1;
    }

    /// Items on the current page, clamped to the slice bounds.
    pub fn visible_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let size = self.spec.page_size;
        let start = (self.spec.current_page - 1).saturating_mul(size).min(items.len());
        let end = self.spec.current_page.saturating_mul(size).min(items.len());
        &items[start..end]
    }

    /// Footer text.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.spec.current_page, self.max_page)
    }
}
