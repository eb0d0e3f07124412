use crate::secondary_validation::{get_next_digit, Validator};
use crate::IrdNumber;

pub struct IrdNumberChecksum;

const SEPARATORS: &[char] = &[' ', '-', '.'];

impl Validator for IrdNumberChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        // IRD numbers are written as 8 or 9 digits, usually grouped as XX(X)-XXX-XXX
        if !regex_match
            .chars()
            .all(|c| c.is_ascii_digit() || SEPARATORS.contains(&c))
        {
            return false;
        }

        let mut chars = regex_match.chars();
        let mut value: i64 = 0;
        let mut digit_count = 0;
        while let Some(digit) = get_next_digit(&mut chars) {
            digit_count += 1;
            if digit_count > 9 {
                return false;
            }
            value = value * 10 + digit as i64;
        }

        (8..=9).contains(&digit_count) && IrdNumber::new(value).is_valid()
    }
}
