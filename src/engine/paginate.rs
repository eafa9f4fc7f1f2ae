use crate::engine::error::EngineError;

/// A slice of a sequence plus the number of pages the sequence spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

/// Cut page `page_index` (zero-based) out of `items`.
///
/// An index past the last page yields an empty page; the index is never
/// clamped here. See [`clamp_page_index`] for callers that want that.
pub fn paginate<T: Clone>(
    items: &[T],
    page_index: usize,
    page_size: usize,
) -> Result<Page<T>, EngineError> {
    if page_size == 0 {
        return Err(EngineError::InvalidPageSize);
    }

    let total_pages = items.len().div_ceil(page_size);
    let start = page_index.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    Ok(Page {
        items: items[start..end].to_vec(),
        total_pages,
    })
}

/// Pull `page_index` back onto the last page when it has run past it.
///
/// Returns 0 when there are no pages at all.
pub fn clamp_page_index(page_index: usize, total_pages: usize) -> usize {
    page_index.min(total_pages.saturating_sub(1))
}
