use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// One display page over an already filtered, ordered result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based.
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}

/// Slices `items` into page `number` (1-based). Page 0, or a page past the
/// end, yields no items. A `page_size` of 0 falls back to [`DEFAULT_PAGE_SIZE`].
pub fn paginate<T: Clone>(items: &[T], number: usize, page_size: usize) -> Page<T> {
    let page_size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };
    let total_pages = items.len().div_ceil(page_size);
    let slice = match number {
        0 => &items[..0],
        n => {
            let start = (n - 1).saturating_mul(page_size).min(items.len());
            let end = start.saturating_add(page_size).min(items.len());
            &items[start..end]
        }
    };

    Page {
        items: slice.to_vec(),
        number,
        total_pages,
        total_items: items.len(),
    }
}
