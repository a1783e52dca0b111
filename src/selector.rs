//! Random pick from a ranked list

use rand::Rng;

/// Pick a uniformly random entry among the first `top` of `articles`.
///
/// Returns `None` when there is nothing to pick from.
pub fn select<'a, R: Rng>(articles: &'a [String], top: usize, rng: &mut R) -> Option<&'a str> {
    let bound = articles.len().min(top);
    if bound == 0 {
        return None;
    }
    Some(articles[rng.random_range(0..bound)].as_str())
}

/// Parse `top` the way a JavaScript client would expect `parseInt` to.
///
/// Leading whitespace and a sign are accepted and parsing stops at the first
/// non-digit. Only positive results count, so `"0"`, `"-3"` and `"abc"` all mean
/// no bias. Values too large for `usize` saturate.
pub fn parse_top(raw: &str) -> Option<usize> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() || negative {
        return None;
    }

    let value = digits.parse::<usize>().unwrap_or(usize::MAX);
    (value > 0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn articles(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("A{}", i)).collect()
    }

    #[test]
    fn test_select_stays_within_bound() {
        let list = articles(100);
        let mut rng = StdRng::seed_from_u64(7);
        for top in [1, 2, 10, 50, 100, 1000] {
            for _ in 0..200 {
                let picked = select(&list, top, &mut rng).unwrap();
                let index = list.iter().position(|a| a == picked).unwrap();
                assert!(index < top.min(list.len()), "index {} top {}", index, top);
            }
        }
    }

    #[test]
    fn test_select_top_one_is_first() {
        let list = articles(5);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select(&list, 1, &mut rng), Some("A0"));
    }

    #[test]
    fn test_select_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select(&[], 10, &mut rng), None);
        assert_eq!(select(&articles(3), 0, &mut rng), None);
    }

    #[test]
    fn test_parse_top() {
        assert_eq!(parse_top("50"), Some(50));
        assert_eq!(parse_top("  12"), Some(12));
        assert_eq!(parse_top("+7"), Some(7));
        assert_eq!(parse_top("25abc"), Some(25));
        assert_eq!(parse_top("007"), Some(7));
    }

    #[test]
    fn test_parse_top_means_no_bias() {
        assert_eq!(parse_top("0"), None);
        assert_eq!(parse_top("-5"), None);
        assert_eq!(parse_top(""), None);
        assert_eq!(parse_top("abc"), None);
        assert_eq!(parse_top("1.5e3"), Some(1));
    }

    #[test]
    fn test_parse_top_saturates() {
        assert_eq!(parse_top("99999999999999999999999999"), Some(usize::MAX));
    }
}
