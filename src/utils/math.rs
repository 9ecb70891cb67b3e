/// `-p * log2(p)` for `p = part / total`, with `0 * log2(0)` taken as zero.
#[inline]
pub fn entropy_term(part: usize, total: usize) -> f64 {
    if part == 0 || total == 0 {
        return 0.0;
    }
    let p = part as f64 / total as f64;
    -p * p.log2()
}

/// Base-2 entropy of a two-class distribution.
///
/// Short-circuits to zero when either class is absent instead of evaluating
/// `0 * log2(0)`.
pub fn binary_entropy(a: usize, b: usize) -> f64 {
    if a == 0 || b == 0 {
        return 0.0;
    }
    let total = a + b;
    entropy_term(a, total) + entropy_term(b, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_distributions_have_zero_entropy() {
        assert_eq!(binary_entropy(0, 0), 0.0);
        assert_eq!(binary_entropy(7, 0), 0.0);
        assert_eq!(binary_entropy(0, 3), 0.0);
    }

    #[test]
    fn even_split_is_one_bit() {
        assert!((binary_entropy(4, 4) - 1.0).abs() < 1e-12);
        assert!((binary_entropy(1, 1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn skewed_split_matches_closed_form() {
        // H(1/4, 3/4) = 2 - 3/4 * log2(3)
        let expected = 2.0 - 0.75 * 3f64.log2();
        assert!((binary_entropy(1, 3) - expected).abs() < 1e-12);
        assert!((binary_entropy(3, 1) - expected).abs() < 1e-12);
    }

    #[test]
    fn entropy_term_handles_empty_parts() {
        assert_eq!(entropy_term(0, 10), 0.0);
        assert_eq!(entropy_term(3, 0), 0.0);
        assert!((entropy_term(1, 2) - 0.5).abs() < 1e-12);
    }
}
