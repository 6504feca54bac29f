//! Result Pagination
//!
//! Pure page arithmetic over result rows. Pages are 1-based; the page
//! size comes from configuration and is 15 by default.

use opd_queries::spec::Row;

/// A single rendered page of results
#[derive(Debug, PartialEq)]
pub struct Page<'a> {
    /// 1-based page number, clamped into range
    pub number: usize,
    /// Total number of pages
    pub total_pages: usize,
    /// The rows on this page
    pub rows: &'a [Row],
}

/// Number of pages needed to show `total` rows
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// The slice of rows on a 1-based page; out-of-range pages are empty
pub fn page_rows(rows: &[Row], page: usize, page_size: usize) -> &[Row] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = (page - 1) * page_size;
    if start >= rows.len() {
        return &[];
    }

    let end = (start + page_size).min(rows.len());
    &rows[start..end]
}

/// Build a page view, clamping an out-of-range page number into range
pub fn paginate(rows: &[Row], page: usize, page_size: usize) -> Page<'_> {
    let total_pages = page_count(rows.len(), page_size);
    let number = page.clamp(1, total_pages.max(1));

    Page {
        number,
        total_pages,
        rows: page_rows(rows, number, page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| {
                let mut row = Row::new();
                row.insert("userid".into(), format!("OP-{i}").into());
                row
            })
            .collect()
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(0, 15), 0);
        assert_eq!(page_count(1, 15), 1);
        assert_eq!(page_count(15, 15), 1);
        assert_eq!(page_count(16, 15), 2);
        assert_eq!(page_count(45, 15), 3);
    }

    #[test]
    fn test_page_rows_slices_by_page() {
        let all = rows(40);

        assert_eq!(page_rows(&all, 1, 15).len(), 15);
        assert_eq!(page_rows(&all, 2, 15).len(), 15);
        assert_eq!(page_rows(&all, 3, 15).len(), 10);
        assert!(page_rows(&all, 4, 15).is_empty());

        assert_eq!(page_rows(&all, 2, 15)[0]["userid"], "OP-15");
    }

    #[test]
    fn test_pages_partition_the_result_set() {
        for total in [0, 1, 14, 15, 16, 44, 45, 46] {
            let all = rows(total);
            let pages = page_count(all.len(), 15);

            let mut rebuilt: Vec<Row> = Vec::new();
            for page in 1..=pages {
                rebuilt.extend_from_slice(page_rows(&all, page, 15));
            }
            assert_eq!(rebuilt, all, "partition failed for {total} rows");
        }
    }

    #[test]
    fn test_paginate_clamps_page_number() {
        let all = rows(20);

        let page = paginate(&all, 99, 15);
        assert_eq!(page.number, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.rows.len(), 5);

        let page = paginate(&all, 0, 15);
        assert_eq!(page.number, 1);
        assert_eq!(page.rows.len(), 15);
    }

    #[test]
    fn test_paginate_empty_rows() {
        let page = paginate(&[], 1, 15);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.rows.is_empty());
    }
}
