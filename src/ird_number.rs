use crate::digits::{digit_count, padded_digits, weighted_sum};
use crate::error::ArgumentError;
use crate::stats::{record_validation, IdentifierKind};
use serde::{Deserialize, Serialize};

const LOWER_LIMIT: i64 = 10_000_000;
const UPPER_LIMIT: i64 = 150_000_000;

const PRIMARY_WEIGHTS: &[u32; 8] = &[3, 2, 7, 6, 5, 4, 3, 2];
const SECONDARY_WEIGHTS: &[u32; 8] = &[7, 4, 3, 2, 5, 2, 7, 6];

/// A New Zealand Inland Revenue Department (IRD) number.
///
/// Any integer can be wrapped; out of range values are reported by [`IrdNumber::is_valid`]
/// rather than rejected on construction.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct IrdNumber(i64);

impl IrdNumber {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Same as `IrdNumber::new(value).is_valid()`
    pub fn is_valid_number(value: i64) -> bool {
        Self::new(value).is_valid()
    }

    /// Checks the range and the check digit of the number.
    ///
    /// The 9 digit (zero padded) number is split in 8 base digits and a check digit. The
    /// check digit is computed with the primary weights, and when that gives 10 the
    /// secondary weights are used instead.
    pub fn is_valid(&self) -> bool {
        let is_valid = self.has_valid_check_digit();
        record_validation(IdentifierKind::IrdNumber, is_valid);
        is_valid
    }

    fn has_valid_check_digit(&self) -> bool {
        if !(LOWER_LIMIT..=UPPER_LIMIT).contains(&self.0) {
            return false;
        }

        let digits = padded_digits::<9>(self.0 as u64);
        let (base, check_digit) = (&digits[..8], digits[8]);

        let primary = compute_check_digit(base, PRIMARY_WEIGHTS);
        if primary <= 9 {
            return primary == check_digit;
        }

        let secondary = compute_check_digit(base, SECONDARY_WEIGHTS);
        secondary <= 9 && secondary == check_digit
    }

    /// Renders the number as `XX-XXX-XXX` (8 digits) or `XXX-XXX-XXX` (9 digits).
    ///
    /// This doesn't depend on [`IrdNumber::is_valid`], but any other digit count is an error.
    pub fn to_formatted(&self) -> Result<String, ArgumentError> {
        let value = u64::try_from(self.0).map_err(|_| ArgumentError::InvalidLength(self.0))?;
        let digits = value.to_string();
        match digit_count(value) {
            8 | 9 => {
                let len = digits.len();
                Ok(format!(
                    "{}-{}-{}",
                    &digits[..len - 6],
                    &digits[len - 6..len - 3],
                    &digits[len - 3..]
                ))
            }
            _ => Err(ArgumentError::InvalidLength(self.0)),
        }
    }
}

impl From<i64> for IrdNumber {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

/// Weighted mod 11 check digit. A result of 10 can't be written as a single digit.
fn compute_check_digit(base: &[u32], weights: &[u32; 8]) -> u32 {
    match weighted_sum(base, weights) % 11 {
        0 => 0,
        remainder => 11 - remainder,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_ird_numbers() {
        let valid_ids = vec![
            49091850,
            35901981,
            // 9 digits
            136410132,
        ];
        for id in valid_ids {
            assert!(IrdNumber::new(id).is_valid(), "{id} should be valid");
            assert!(IrdNumber::is_valid_number(id), "{id} should be valid");
        }
    }

    #[test]
    fn test_invalid_ird_numbers() {
        let invalid_ids = vec![
            // wrong check digit
            136410133,
            // 7 digits
            9125568,
            0,
            -49091850,
            // just outside of the range
            9_999_999,
            150_000_001,
            i64::MIN,
            i64::MAX,
        ];
        for id in invalid_ids {
            assert!(!IrdNumber::new(id).is_valid(), "{id} should be invalid");
            assert!(!IrdNumber::is_valid_number(id), "{id} should be invalid");
        }
    }

    #[test]
    fn test_secondary_weights_are_used_when_primary_gives_ten() {
        // bases with a primary remainder of 1 must be checked against the secondary weights
        let mut checked = 0;
        for base in 1_000_000..1_100_000u64 {
            let digits = padded_digits::<8>(base);
            let primary = compute_check_digit(&digits, PRIMARY_WEIGHTS);
            if primary != 10 {
                continue;
            }
            let secondary = compute_check_digit(&digits, SECONDARY_WEIGHTS);
            for check_digit in 0..10 {
                let value = (base * 10 + check_digit) as i64;
                let expected = secondary <= 9 && secondary as u64 == check_digit;
                assert_eq!(IrdNumber::new(value).is_valid(), expected, "{value}");
            }
            checked += 1;
        }
        assert!(checked > 0);
    }

    #[test]
    fn test_format_ird_numbers() {
        let test_cases = vec![
            (49091850, "49-091-850"),
            (136410132, "136-410-132"),
            // formatting doesn't check validity
            (136410133, "136-410-133"),
            (10_000_000, "10-000-000"),
            (999_999_999, "999-999-999"),
        ];
        for (value, expected) in test_cases {
            assert_eq!(IrdNumber::new(value).to_formatted(), Ok(expected.to_string()));
        }
    }

    #[test]
    fn test_format_invalid_length() {
        let invalid_lengths = vec![9125568, 0, 1_000_000_000, -49091850];
        for value in invalid_lengths {
            assert_eq!(
                IrdNumber::new(value).to_formatted(),
                Err(ArgumentError::InvalidLength(value))
            );
        }
    }

    #[test]
    fn test_serde_transparent() {
        use serde_test::{assert_tokens, Token};
        assert_tokens(&IrdNumber::new(49091850), &[Token::I64(49091850)]);
    }
}
