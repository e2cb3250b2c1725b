//! Page arithmetic.

use std::ops::Range;

/// Number of pages needed for `len` rows. Zero rows means zero pages.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Row range shown on 1-based `page`, clamped to `len`.
///
/// Page 0 and pages past the end produce an empty range.
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let size = page_size.max(1);
    let start = (page - 1).saturating_mul(size).min(len);
    let end = page.saturating_mul(size).min(len);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 25), 0);
        assert_eq!(page_count(1, 25), 1);
        assert_eq!(page_count(25, 25), 1);
        assert_eq!(page_count(26, 25), 2);
        assert_eq!(page_count(60, 25), 3);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(1, 25, 30), 0..25);
        assert_eq!(page_range(2, 25, 30), 25..30);
        assert_eq!(page_range(3, 25, 30), 30..30);
        assert_eq!(page_range(0, 25, 30), 0..0);
        assert_eq!(page_range(1, 25, 0), 0..0);
    }
}
