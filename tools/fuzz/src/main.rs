use afl::fuzz;
use nz_ird::{BankAccount, BankAccountExt, IrdNumber, IrdNumberChecksum, Validator};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let mut ird_bytes = [0u8; 8];
    for (i, byte) in bytes.iter().take(8).enumerate() {
        ird_bytes[i] = *byte;
    }
    fuzz_ird_number(i64::from_be_bytes(ird_bytes));

    let input = std::str::from_utf8(bytes).ok()?;
    fuzz_bank_account(input);
    fuzz_ird_number_text(input);

    Some(())
}

fn fuzz_ird_number(value: i64) {
    #[cfg(feature = "manual_test")]
    println!("IRD number: {:?}", value);

    let ird_number = IrdNumber::new(value);
    let is_valid = ird_number.is_valid();
    let formatted = ird_number.to_formatted();

    if is_valid {
        // every valid IRD number has 8 or 9 digits, so it can always be formatted
        let formatted = formatted.unwrap();
        assert!(IrdNumberChecksum.is_valid_match(&formatted));
    }
}

fn fuzz_ird_number_text(input: &str) {
    // only checks for panics
    IrdNumberChecksum.is_valid_match(input);
}

fn fuzz_bank_account(input: &str) {
    #[cfg(feature = "manual_test")]
    println!("Account number: {:?}", input);

    let is_valid = input.is_valid_bank_account();

    if let Some(account) = BankAccount::try_parse(input) {
        assert_eq!(account.is_valid(), is_valid);

        // the canonical format always parses back to the same account
        let formatted = account.to_string();
        #[cfg(feature = "manual_test")]
        println!("Formatted: {:?}", formatted);
        assert_eq!(BankAccount::parse(formatted.as_str()), Ok(account));
    } else {
        assert!(!is_valid);
    }
}
