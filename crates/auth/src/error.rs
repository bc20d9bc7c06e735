use thiserror::Error;

/// Failure modes of a login attempt, plus the hashing failures that can
/// surface while seeding credentials or rotating a password.
///
/// Every variant is terminal for the attempt; whether to retry is the
/// caller's decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("user not found")]
    UserNotFound,

    #[error("account is deactivated")]
    AccountDeactivated,

    #[error("account is blocked")]
    AccountBlocked,

    #[error("invalid password")]
    InvalidPassword,

    /// The credential references a profile that does not exist. This is a
    /// data-integrity fault, not a user mistake.
    #[error("profile not found")]
    ProfileNotFound,

    #[error("password hashing failed: {0}")]
    Hashing(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;
