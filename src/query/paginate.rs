//! Pagination
//!
//! 1-based pages over an already filtered list.

/// Programs shown per page
pub const PAGE_SIZE: usize = 6;

/// One page of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// 1-based page number actually shown
    pub number: usize,
    /// Total number of pages (0 for an empty list)
    pub total_pages: usize,
    /// Total number of items across all pages
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Pager controls are only shown when there is more than one page
    pub fn show_pager(&self) -> bool {
        self.total_pages > 1
    }
}

/// Number of pages needed for `total` items
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Clamp a requested page into `[1, max(1, page_count)]`
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(total, page_size).max(1))
}

/// Slice `[(page-1)*size, page*size)` out of `items`.
///
/// Out-of-range pages yield an empty slice; callers clamp first.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Clamp `page` and cut the page out of `items`
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let number = clamp_page(page, items.len(), page_size);
    Page {
        items: page_slice(items, number, page_size).to_vec(),
        number,
        total_pages: page_count(items.len(), page_size),
        total_items: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, PAGE_SIZE), 0);
        assert_eq!(page_count(1, PAGE_SIZE), 1);
        assert_eq!(page_count(6, PAGE_SIZE), 1);
        assert_eq!(page_count(7, PAGE_SIZE), 2);
        assert_eq!(page_count(13, PAGE_SIZE), 3);
    }

    #[test]
    fn test_pages_reconstruct_collection() {
        for n in 0..40usize {
            let items: Vec<usize> = (0..n).collect();
            let pages = page_count(n, PAGE_SIZE);

            let mut rebuilt = Vec::new();
            for page in 1..=pages {
                let slice = page_slice(&items, page, PAGE_SIZE);
                assert!(!slice.is_empty());
                assert!(slice.len() <= PAGE_SIZE);
                rebuilt.extend_from_slice(slice);
            }

            assert_eq!(rebuilt, items, "n = {}", n);
        }
    }

    #[test]
    fn test_out_of_range_slice_is_empty() {
        let items: Vec<u32> = (0..7).collect();
        assert!(page_slice(&items, 3, PAGE_SIZE).is_empty());
        assert!(page_slice(&items, 0, PAGE_SIZE).is_empty());
        assert_eq!(page_slice(&items, 2, PAGE_SIZE), &[6]);
    }

    #[test]
    fn test_paginate_clamps() {
        let items: Vec<u32> = (0..8).collect();

        let page = paginate(&items, 5, PAGE_SIZE);
        assert_eq!(page.number, 2);
        assert_eq!(page.items, vec![6, 7]);
        assert!(page.has_previous());
        assert!(!page.has_next());
        assert!(page.show_pager());

        let page = paginate(&items, 0, PAGE_SIZE);
        assert_eq!(page.number, 1);
        assert_eq!(page.items.len(), 6);

        let empty: Vec<u32> = Vec::new();
        let page = paginate(&empty, 3, PAGE_SIZE);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert!(!page.show_pager());
    }
}
