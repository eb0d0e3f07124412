//! Validation and formatting of New Zealand IRD numbers and bank account numbers, as
//! described by the Inland Revenue Department's RWT and NRWT certificate filing
//! specification.
//!
//! ```
//! use nz_ird::{BankAccount, BankAccountExt, IrdNumber};
//!
//! assert!(IrdNumber::new(49091850).is_valid());
//! assert_eq!(IrdNumber::new(49091850).to_formatted().unwrap(), "49-091-850");
//!
//! let account = BankAccount::parse("01-0902-0068389-00").unwrap();
//! assert!(account.is_valid());
//! assert!("26-2600-0320871-32".is_valid_bank_account());
//! ```

// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod bank_account;
mod digits;
mod error;
mod extensions;
mod ird_number;
mod secondary_validation;
mod stats;

// This is the public API of the library
pub use bank_account::{
    branch_ranges, is_known_bank, is_valid_branch, known_banks, Algorithm, BankAccount,
    ChecksumScheme,
};
pub use error::{ArgumentError, FormatError};
pub use extensions::{BankAccountExt, IrdNumberExt};
pub use ird_number::IrdNumber;
pub use secondary_validation::{
    IrdNumberChecksum, NzBankAccountChecksum, SecondaryValidator, Validator,
};
pub use stats::{IdentifierKind, ParseFailure, PARSE_FAILURES, VALIDATIONS};
