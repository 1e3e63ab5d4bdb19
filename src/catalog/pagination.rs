//! Pagination calculator: fixed-size pages over a filtered collection.

use serde::Serialize;

/// Events shown per listing page.
pub const PAGE_SIZE: usize = 8;

/// One page of a filtered collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items on the requested page, in collection order.
    pub visible: Vec<T>,
    /// `max(1, ceil(len / page_size))`.
    pub total_pages: usize,
}

/// Returns the number of pages needed for `len` items.
///
/// Never zero: an empty collection still has one (empty) page. A
/// `page_size` of zero is treated as one.
#[must_use]
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Slices `items` into the 1-based page `page_number`.
///
/// Callers are expected to pass `1 <= page_number <= total_pages`; any other
/// value yields an empty `visible` rather than failing. The calculator does
/// not clamp.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page_number: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let visible = match page_number.checked_sub(1) {
        Some(index) => items
            .iter()
            .skip(index.saturating_mul(page_size))
            .take(page_size)
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    Page {
        visible,
        total_pages: total_pages(items.len(), page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_items_make_three_pages() {
        let items: Vec<u32> = (0..20).collect();
        let first = paginate(&items, 1, PAGE_SIZE);
        let last = paginate(&items, 3, PAGE_SIZE);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.visible.len(), 8);
        assert_eq!(last.visible, vec![16, 17, 18, 19]);
    }

    #[test]
    fn empty_collection_has_one_empty_page() {
        let page = paginate::<u32>(&[], 1, PAGE_SIZE);
        assert_eq!(page.total_pages, 1);
        assert!(page.visible.is_empty());
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..5).collect();
        assert!(paginate(&items, 0, PAGE_SIZE).visible.is_empty());
        assert!(paginate(&items, 2, PAGE_SIZE).visible.is_empty());
        assert!(paginate(&items, usize::MAX, PAGE_SIZE).visible.is_empty());
    }

    #[test]
    fn total_pages_formula_holds() {
        for len in 0usize..50 {
            let expected = if len == 0 { 1 } else { len.div_ceil(PAGE_SIZE) };
            assert_eq!(total_pages(len, PAGE_SIZE), expected, "len = {len}");
        }
    }

    #[test]
    fn pages_cover_collection_exactly_once() {
        for len in [0usize, 1, 7, 8, 9, 16, 23] {
            let items: Vec<usize> = (0..len).collect();
            let pages = total_pages(len, PAGE_SIZE);
            let joined: Vec<usize> = (1..=pages)
                .flat_map(|p| paginate(&items, p, PAGE_SIZE).visible)
                .collect();
            assert_eq!(joined, items, "len = {len}");
        }
    }
}
