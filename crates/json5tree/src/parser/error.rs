use thiserror::Error;

/// Parse failure codes.
///
/// The taxonomy is deliberately small: a malformed object member name is
/// [`InvalidName`], and everything else — malformed literals, malformed
/// numbers, unexpected trailing characters, or exceeding the configured
/// nesting depth — is [`InvalidValue`]. Success is the `Ok` arm of the
/// `Result` returned by [`parse`](crate::parse).
///
/// The first error anywhere in the descent aborts the whole parse; there is
/// no recovery or partial-result salvage.
///
/// [`InvalidName`]: Error::InvalidName
/// [`InvalidValue`]: Error::InvalidValue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An object member name was malformed.
    #[error("invalid object member name")]
    InvalidName,
    /// A value literal was malformed, or an unexpected character followed a
    /// member.
    #[error("invalid value")]
    InvalidValue,
}
