//! Page slicing

/// Slice `[(page - 1) * page_size, page * page_size)` of `items`
///
/// Pages are 1-based. Page 0, a page past the end, or a zero page size
/// yield an empty slice.
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

/// Number of pages needed for `total` items
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total / page_size + usize::from(total % page_size != 0)
    }
}
