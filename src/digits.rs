/// Splits `value` into exactly `N` decimal digits, most significant first, padding
/// with leading zeros. Digits above position `N` are dropped, so callers must
/// range-check `value` first.
#[inline]
pub fn padded_digits<const N: usize>(value: u64) -> [u32; N] {
    let mut digits = [0; N];
    let mut num = value;
    for digit in digits.iter_mut().rev() {
        *digit = (num % 10) as u32;
        num /= 10;
    }
    digits
}

/// Number of decimal digits needed to write `value` (0 is written with one digit)
#[inline]
pub fn digit_count(value: u64) -> usize {
    let mut count = 1;
    let mut num = value / 10;
    while num > 0 {
        count += 1;
        num /= 10;
    }
    count
}

/// Sum of each digit multiplied by the weight at the same position
#[inline]
pub fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits
        .iter()
        .zip(weights.iter())
        .map(|(digit, weight)| digit * weight)
        .sum()
}
