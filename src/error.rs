use crate::account::AccountType;
use crate::profile::Profile;
use thiserror::Error;

/// Recoverable outcomes surfaced by the teller boundary. The ledger itself
/// reports plain booleans; the facade maps them onto this taxonomy.
#[derive(Debug, Error, PartialEq)]
pub enum TellerError {
    #[error("{0} {1} is not in the database")]
    NotFound(Profile, AccountType),

    #[error("{0} same account type is already open")]
    DuplicateOpen(Profile),

    #[error("account is already closed")]
    AlreadyClosed,

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("amount cannot be zero or negative")]
    InvalidAmount,

    #[error("date of birth invalid")]
    InvalidDate,

    #[error("minimum of $2500 required to open a money market account")]
    MinimumDeposit,

    #[error("malformed request: {0}")]
    MalformedRequest(String),
}
