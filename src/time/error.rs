use thiserror::Error;

/// An error raised while reading a duration string such as `30s`.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("'{0}' is not a duration, expected <number><unit> like 30s or 500ms")]
    Syntax(String),
    #[error("Unit '{0}' not supported")]
    UnitNotSupported(String),
    #[error("Duration value '{0}' is too large")]
    Overflow(String),
}
