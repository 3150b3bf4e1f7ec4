//! Fixed-size pagination over ordered question lists.

/// Number of questions per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-based `page` of `items`.
///
/// Page `P` covers positions `[(P-1)*10, (P-1)*10 + 10)`. Pages past the end,
/// and pages below 1, are empty; callers treat an empty page as "no results".
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }

    let Some(start) = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    else {
        return Vec::new();
    };

    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: i32) -> Vec<i32> {
        (1..=n).collect()
    }

    #[test]
    fn test_first_page() {
        assert_eq!(paginate(items(19), 1), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_partial_last_page() {
        assert_eq!(paginate(items(19), 2), (11..=19).collect::<Vec<_>>());
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        assert!(paginate(items(19), 3).is_empty());
        assert!(paginate(items(19), 100).is_empty());
    }

    #[test]
    fn test_page_below_one_is_empty() {
        assert!(paginate(items(19), 0).is_empty());
        assert!(paginate(items(19), -1).is_empty());
        assert!(paginate(items(19), i64::MIN).is_empty());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        assert!(paginate(items(19), i64::MAX).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(paginate(Vec::<i32>::new(), 1).is_empty());
    }
}
