// src/scrape/paginate.rs

/// Fixed-size 1-based window over an ordered sequence.
///
/// Pages past the end yield an empty vec rather than an error. Pure; the
/// caller validates `page >= 1` at the boundary.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    assert!(page >= 1, "page numbers are 1-based");

    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(items.len());
    items[start..end].to_vec()
}
