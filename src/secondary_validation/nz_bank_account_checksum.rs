use crate::secondary_validation::Validator;
use crate::BankAccount;

pub struct NzBankAccountChecksum;

impl Validator for NzBankAccountChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        BankAccount::try_parse(regex_match).is_some_and(|account| account.is_valid())
    }
}
