//! New Zealand bank account numbers.
//!
//! An account number is made of a 2 digit bank code, a 4 digit branch, an account base
//! and a suffix, written as `BB-BBBB-AAAAAAA-SS` (or with a 3 digit suffix). Validation
//! follows the IRD "Resident Withholding Tax (RWT) and Non-Resident Withholding Tax (NRWT)"
//! certificate filing specification: the bank must be known, the branch must be allocated
//! to that bank and the bank specific check digit algorithm must pass.
//!
//! Validation only shows that a number is plausible, not that the account exists.

mod branch_table;
mod checksum;

pub use branch_table::{branch_ranges, is_known_bank, is_valid_branch, known_banks};
pub use checksum::{Algorithm, ChecksumScheme};

use crate::digits::{digit_count, padded_digits};
use crate::error::FormatError;
use crate::stats::{record_parse_failure, record_validation, IdentifierKind, ParseFailure};
use checksum::ACCOUNT_DIGITS;
use lazy_static::lazy_static;
use regex::Regex;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

const MAX_BANK: u32 = 99;
const MAX_BRANCH: u32 = 9_999;
const MAX_ACCOUNT_BASE: u32 = 99_999_999;
const MAX_SUFFIX: u32 = 9_999;

const MIN_SUFFIX_WIDTH: usize = 2;
const MAX_SUFFIX_WIDTH: usize = 3;

lazy_static! {
    // The account base group is 7 digits here, even though direct construction allows 8.
    static ref ACCOUNT_NUMBER_REGEX: Regex =
        Regex::new(r"^([0-9]{2})[ .\-]([0-9]{4})[ .\-]([0-9]{7})[ .\-]([0-9]{2,3})$").unwrap();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct BankAccount {
    bank: u32,
    branch: u32,
    account_base: u32,
    suffix: u32,
    // number of suffix digits to display: 2, or 3 for a 3 digit suffix or a parsed `SSS` group
    suffix_width: usize,
}

impl BankAccount {
    /// Creates an account from its parts. Nothing is validated until [`BankAccount::is_valid`].
    pub fn new(bank: u32, branch: u32, account_base: u32, suffix: u32) -> Self {
        Self {
            bank,
            branch,
            account_base,
            suffix,
            suffix_width: digit_count(suffix.into()).clamp(MIN_SUFFIX_WIDTH, MAX_SUFFIX_WIDTH),
        }
    }

    pub fn bank(&self) -> u32 {
        self.bank
    }

    pub fn branch(&self) -> u32 {
        self.branch
    }

    pub fn account_base(&self) -> u32 {
        self.account_base
    }

    pub fn suffix(&self) -> u32 {
        self.suffix
    }

    /// Parses `XX-XXXX-XXXXXXX-XX(X)`, where each separator is a space, a hyphen or a dot.
    ///
    /// `None` stands for a missing account number and fails like an empty one. A well
    /// formed account number is returned even if it isn't valid.
    pub fn parse<'a>(account_number: impl Into<Option<&'a str>>) -> Result<Self, FormatError> {
        let result = Self::parse_fields(account_number.into());
        if let Err(err) = &result {
            record_parse_failure(match err {
                FormatError::Empty => ParseFailure::Empty,
                FormatError::Malformed => ParseFailure::Malformed,
            });
        }
        result
    }

    /// Same as [`BankAccount::parse`], discarding the error
    pub fn try_parse<'a>(account_number: impl Into<Option<&'a str>>) -> Option<Self> {
        Self::parse(account_number).ok()
    }

    fn parse_fields(account_number: Option<&str>) -> Result<Self, FormatError> {
        let account_number = match account_number {
            Some(account_number) if !account_number.is_empty() => account_number,
            _ => return Err(FormatError::Empty),
        };

        let captures = ACCOUNT_NUMBER_REGEX
            .captures(account_number)
            .ok_or(FormatError::Malformed)?;
        let field = |index: usize| -> Result<u32, FormatError> {
            captures[index]
                .parse()
                .map_err(|_| FormatError::Malformed)
        };

        Ok(Self {
            bank: field(1)?,
            branch: field(2)?,
            account_base: field(3)?,
            suffix: field(4)?,
            suffix_width: captures[4].len(),
        })
    }

    /// Same as `BankAccount::new(bank, branch, account_base, suffix).is_valid()`
    pub fn is_valid_parts(bank: u32, branch: u32, account_base: u32, suffix: u32) -> bool {
        Self::new(bank, branch, account_base, suffix).is_valid()
    }

    pub fn is_valid(&self) -> bool {
        let is_valid = self.passes_checks();
        record_validation(IdentifierKind::BankAccount, is_valid);
        is_valid
    }

    fn passes_checks(&self) -> bool {
        if self.is_all_zeros() {
            return false;
        }

        if self.bank > MAX_BANK
            || self.branch > MAX_BRANCH
            || self.account_base > MAX_ACCOUNT_BASE
            || self.suffix > MAX_SUFFIX
        {
            return false;
        }

        if !is_known_bank(self.bank) || !is_valid_branch(self.bank, self.branch) {
            return false;
        }

        Algorithm::for_account(self.bank, self.account_base)
            .scheme()
            .is_valid(&self.digits())
    }

    fn is_all_zeros(&self) -> bool {
        self.bank == 0 && self.branch == 0 && self.account_base == 0 && self.suffix == 0
    }

    /// The 18 digits `BBbbbbAAAAAAAASSSS`. Parts must already be within their widths.
    fn digits(&self) -> [u32; ACCOUNT_DIGITS] {
        let mut digits = [0; ACCOUNT_DIGITS];
        digits[..2].copy_from_slice(&padded_digits::<2>(self.bank.into()));
        digits[2..6].copy_from_slice(&padded_digits::<4>(self.branch.into()));
        digits[6..14].copy_from_slice(&padded_digits::<8>(self.account_base.into()));
        digits[14..].copy_from_slice(&padded_digits::<4>(self.suffix.into()));
        digits
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:04}-{:07}-{:0width$}",
            self.bank,
            self.branch,
            self.account_base,
            self.suffix,
            width = self.suffix_width
        )
    }
}

impl FromStr for BankAccount {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
