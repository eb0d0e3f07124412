use metrics::counter;
use strum::IntoStaticStr;

pub const VALIDATIONS: &str = "nz_ird.validations";
pub const PARSE_FAILURES: &str = "nz_ird.parse_failures";

/// The identifier a validation was run for, used as the `kind` label
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum IdentifierKind {
    IrdNumber,
    BankAccount,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ParseFailure {
    Empty,
    Malformed,
}

// Counters are resolved on every call instead of being cached in a static, so they are
// registered against whichever recorder is active (including local recorders in tests).
pub fn record_validation(kind: IdentifierKind, is_valid: bool) {
    let kind: &'static str = kind.into();
    let result = if is_valid { "valid" } else { "invalid" };
    counter!(VALIDATIONS, "kind" => kind, "result" => result).increment(1);
}

pub fn record_parse_failure(reason: ParseFailure) {
    let reason: &'static str = reason.into();
    counter!(PARSE_FAILURES, "reason" => reason).increment(1);
}
