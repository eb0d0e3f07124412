mod ird_number_checksum;
mod nz_bank_account_checksum;

pub use crate::secondary_validation::ird_number_checksum::IrdNumberChecksum;
pub use crate::secondary_validation::nz_bank_account_checksum::NzBankAccountChecksum;
use serde::{Deserialize, Serialize};
use std::str::Chars;

/// Checks a candidate identifier found in free text
pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

/// Selects a [`Validator`] from configuration, e.g. `{"type": "IrdNumberChecksum"}`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum SecondaryValidator {
    IrdNumberChecksum,
    NzBankAccountChecksum,
}

impl Validator for SecondaryValidator {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        match self {
            SecondaryValidator::IrdNumberChecksum => IrdNumberChecksum.is_valid_match(regex_match),
            SecondaryValidator::NzBankAccountChecksum => {
                NzBankAccountChecksum.is_valid_match(regex_match)
            }
        }
    }
}

fn get_next_digit(chars: &mut Chars<'_>) -> Option<u32> {
    for char in chars.by_ref() {
        if let Some(digit) = char.to_digit(10) {
            return Some(digit);
        }
    }
    None
}

#[cfg(test)]
mod test {
    use crate::secondary_validation::*;

    #[test]
    fn test_deserialize_secondary_validator() {
        let validator: SecondaryValidator =
            serde_json::from_str(r#"{"type": "IrdNumberChecksum"}"#).unwrap();
        assert_eq!(validator, SecondaryValidator::IrdNumberChecksum);

        let validator: SecondaryValidator =
            serde_json::from_str(r#"{"type": "NzBankAccountChecksum"}"#).unwrap();
        assert_eq!(validator, SecondaryValidator::NzBankAccountChecksum);

        assert!(serde_json::from_str::<SecondaryValidator>(r#"{"type": "Luhn"}"#).is_err());
    }

    #[test]
    fn test_secondary_validator_dispatch() {
        assert!(SecondaryValidator::IrdNumberChecksum.is_valid_match("49-091-850"));
        assert!(!SecondaryValidator::IrdNumberChecksum.is_valid_match("26-2600-0320871-32"));
        assert!(SecondaryValidator::NzBankAccountChecksum.is_valid_match("26-2600-0320871-32"));
        assert!(!SecondaryValidator::NzBankAccountChecksum.is_valid_match("49-091-850"));
    }

    #[test]
    fn test_get_next_digit_skips_separators() {
        let mut chars = "1-2 .3".chars();
        assert_eq!(get_next_digit(&mut chars), Some(1));
        assert_eq!(get_next_digit(&mut chars), Some(2));
        assert_eq!(get_next_digit(&mut chars), Some(3));
        assert_eq!(get_next_digit(&mut chars), None);
    }
}
