//! Pagination cursor

/// Page size used when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Zero-based page index plus page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationCursor {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size: page_size.max(1),
        }
    }

    /// 1-based page number sent to the remote endpoint
    pub fn remote_page(&self) -> u32 {
        u32::try_from(self.page_index + 1).unwrap_or(u32::MAX)
    }

    /// Number of pages needed for `total` rows (never less than one)
    pub fn page_count(&self, total: u64) -> usize {
        let size = self.page_size.max(1) as u64;
        let pages = total.div_ceil(size);
        usize::try_from(pages).unwrap_or(usize::MAX).max(1)
    }

    pub fn with_page_index(self, page_index: usize) -> Self {
        Self { page_index, ..self }
    }
}
