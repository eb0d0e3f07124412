//! Shorthands for validating raw values without building an [`IrdNumber`] or
//! [`BankAccount`] first.

use crate::{BankAccount, IrdNumber};

pub trait IrdNumberExt {
    /// Whether the value is a valid IRD number, see [`IrdNumber::is_valid`]
    fn is_valid_ird_number(&self) -> bool;
}

impl IrdNumberExt for i64 {
    fn is_valid_ird_number(&self) -> bool {
        IrdNumber::new(*self).is_valid()
    }
}

pub trait BankAccountExt {
    /// Parses the account number and validates it. Unlike [`BankAccount::parse`] this never
    /// fails: an account number that can't be parsed is simply not valid.
    fn is_valid_bank_account(&self) -> bool;
}

impl BankAccountExt for str {
    fn is_valid_bank_account(&self) -> bool {
        BankAccount::try_parse(self).is_some_and(|account| account.is_valid())
    }
}
