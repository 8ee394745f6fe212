// =============================================================================
// PAGINATION MODULE
// =============================================================================
// Slices a result set into 1-based pages and reports page-count metadata.
//
// LEARNING NOTE:
// Query strings are untyped text. We parse `page` and `limit` leniently here
// instead of letting the extractor reject the request: junk falls back to
// the defaults and negative numbers are clamped to 1.
// =============================================================================

use crate::models::PaginationMeta;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A validated page request. Both numbers are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Build from raw `page` / `limit` query values.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            parse_positive(page, DEFAULT_PAGE),
            parse_positive(limit, DEFAULT_PAGE_SIZE),
        )
    }

    pub fn start_index(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn end_index(&self) -> usize {
        self.start_index().saturating_add(self.page_size)
    }
}

/// Absent, non-numeric or zero input gives `default`; negatives clamp to 1.
fn parse_positive(raw: Option<&str>, default: usize) -> usize {
    match raw.and_then(leading_integer) {
        None => default,
        Some((_, 0)) => default,
        Some((true, _)) => 1,
        Some((false, n)) => n,
    }
}

/// Read an optionally signed run of leading digits, ignoring whatever
/// follows: "2.5" is 2, "5abc" is 5. Returns `(negative, magnitude)`, with
/// the magnitude saturating at `usize::MAX`.
fn leading_integer(raw: &str) -> Option<(bool, usize)> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let run = digits.bytes().take_while(u8::is_ascii_digit).count();
    if run == 0 {
        return None;
    }

    let magnitude = digits[..run].bytes().fold(0usize, |acc, digit| {
        acc.saturating_mul(10).saturating_add(usize::from(digit - b'0'))
    });
    Some((negative, magnitude))
}

/// Take one page out of `items` and describe where it sits.
///
/// A page past the end is empty rather than an error.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> (Vec<T>, PaginationMeta) {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(request.page_size);

    let start = request.start_index().min(total_items);
    let end = request.end_index().min(total_items);
    let page_items = items[start..end].to_vec();

    let meta = PaginationMeta {
        current_page: request.page,
        total_pages,
        total_items,
        items_per_page: request.page_size,
        has_next_page: request.page < total_pages,
        has_prev_page: request.page > 1,
    };

    (page_items, meta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_page_of_25() {
        let items: Vec<u32> = (0..25).collect();
        let (page, meta) = paginate(&items, PageRequest::new(2, 10));

        assert_eq!(page, (10..20).collect::<Vec<u32>>());
        assert_eq!(meta.total_pages, 3);
        assert_eq!(meta.total_items, 25);
        assert_eq!(meta.items_per_page, 10);
        assert!(meta.has_next_page);
        assert!(meta.has_prev_page);
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (0..25).collect();
        let (page, meta) = paginate(&items, PageRequest::new(3, 10));

        assert_eq!(page, (20..25).collect::<Vec<u32>>());
        assert!(!meta.has_next_page);
        assert!(meta.has_prev_page);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let items: Vec<u32> = (0..5).collect();
        let (page, meta) = paginate(&items, PageRequest::new(4, 10));

        assert!(page.is_empty());
        assert_eq!(meta.current_page, 4);
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_next_page);
    }

    #[test]
    fn test_no_items_means_no_pages() {
        let items: Vec<u32> = Vec::new();
        let (page, meta) = paginate(&items, PageRequest::default());

        assert!(page.is_empty());
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next_page);
        assert!(!meta.has_prev_page);
    }

    #[test]
    fn test_parse_falls_back_and_clamps() {
        assert_eq!(PageRequest::parse(None, None), PageRequest::new(1, 10));
        assert_eq!(PageRequest::parse(Some("abc"), Some("")), PageRequest::new(1, 10));
        assert_eq!(PageRequest::parse(Some("0"), Some("0")), PageRequest::new(1, 10));
        assert_eq!(PageRequest::parse(Some("-3"), Some("-5")), PageRequest::new(1, 1));
        assert_eq!(PageRequest::parse(Some(" 3 "), Some("25")), PageRequest::new(3, 25));
        assert_eq!(PageRequest::parse(Some("2.5"), Some("5abc")), PageRequest::new(2, 5));
        assert_eq!(PageRequest::parse(Some("+4"), Some("-0")), PageRequest::new(4, 10));
        assert_eq!(PageRequest::parse(Some("-2.9"), Some(".5")), PageRequest::new(1, 10));
        assert_eq!(
            PageRequest::parse(None, Some("99999999999999999999999999")),
            PageRequest::new(1, usize::MAX)
        );
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let items: Vec<u32> = (0..5).collect();
        let (page, _) = paginate(&items, PageRequest::new(usize::MAX, usize::MAX));
        assert!(page.is_empty());
    }
}
