/// Number of base-10 digits in `num`.
///
/// Zero has one digit. Negative values (a packed integer that wrapped past
/// `i64::MAX`) count as zero digits, which routes them through the
/// single-chunk path of the quadratic mixer.
pub fn digit_count(num: i64) -> u32 {
    if num == 0 {
        return 1;
    }

    let mut rest = num;
    let mut digits = 0;
    while rest > 0 {
        rest /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0, 1)]
    #[case::one(1, 1)]
    #[case::nine(9, 1)]
    #[case::ten(10, 2)]
    #[case::largest_three(999, 3)]
    #[case::smallest_four(1000, 4)]
    #[case::i64_max(i64::MAX, 19)]
    #[case::negative(-42, 0)]
    #[case::i64_min(i64::MIN, 0)]
    fn test_digit_count(#[case] num: i64, #[case] expected: u32) {
        assert_eq!(digit_count(num), expected);
    }
}
