pub const BOUNDING_SPACES_COUNT: usize = 2;
pub const MIN_DASHES_COUNT: usize = 2;
pub const MIN_TERM_WIDTH: usize = 60;
/// Trailing characters of a masked code left readable.
pub const VISIBLE_CODE_CHARS: usize = 4;

pub const fn count_digits(n: u64) -> usize {
    if n >= 10000000000000000000 {
        return 20;
    }
    let mut count = 1;
    let mut ceil = 10;
    while n >= ceil {
        ceil *= 10;
        count += 1;
    }
    count
}

/// Replaces all but the last `visible` characters with `*`.
pub fn mask(s: &str, visible: usize) -> String {
    let len = s.chars().count();
    let hidden = len.saturating_sub(visible);
    std::iter::repeat_n('*', hidden)
        .chain(s.chars().skip(hidden))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(9, 1)]
    #[case(10, 2)]
    #[case(1234, 4)]
    #[case(u64::MAX, 20)]
    fn test_count_digits(#[case] n: u64, #[case] want: usize) {
        assert_eq!(count_digits(n), want)
    }

    #[rstest]
    #[case("", 4, "")]
    #[case("AB", 4, "AB")]
    #[case("ABCDEFGH", 4, "****EFGH")]
    #[case("ABCDEFGH", 0, "********")]
    fn test_mask(#[case] s: &str, #[case] visible: usize, #[case] want: &str) {
        assert_eq!(mask(s, visible), want)
    }
}
