//! Error kinds surfaced to service callers.

use thiserror::Error;

/// Public message for every internal fault.
pub(crate) const OPTIMISE_FAILED: &str = "Failed to optimize route";

/// Category of a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request is missing a field or carries a malformed one.
    Validation,
    /// The list exists but has no places.
    EmptyList,
    /// The list does not exist.
    NotFound,
    /// Anything else went wrong while planning.
    Optimise,
}

impl ErrorKind {
    /// Wire code, e.g. `VALIDATION_ERROR`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::EmptyList => "EMPTY_LIST",
            Self::NotFound => "NOT_FOUND",
            Self::Optimise => "OPTIMIZE_ERROR",
        }
    }

    /// HTTP status a transport should use for this kind.
    #[must_use]
    pub const fn status(self) -> u16 {
        match self {
            Self::Validation | Self::EmptyList => 400,
            Self::NotFound => 404,
            Self::Optimise => 500,
        }
    }

    /// Parse a wire code produced by [`Self::code`].
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        [
            Self::Validation,
            Self::EmptyList,
            Self::NotFound,
            Self::Optimise,
        ]
        .into_iter()
        .find(|kind| kind.code() == code)
    }
}

/// A failed request: a kind plus a message safe to show the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ServiceError {
    kind: ErrorKind,
    message: String,
}

impl ServiceError {
    /// Construct an error of `kind`.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub(crate) fn empty_list() -> Self {
        Self::new(ErrorKind::EmptyList, "No places in this list")
    }

    pub(crate) fn not_found() -> Self {
        Self::new(ErrorKind::NotFound, "List not found")
    }

    /// Log `detail` and return the opaque internal error.
    pub(crate) fn internal(detail: &dyn std::fmt::Display) -> Self {
        log::error!("error optimizing route: {detail}");
        Self::new(ErrorKind::Optimise, OPTIMISE_FAILED)
    }

    /// The error kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The caller-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Shorthand for `self.kind().code()`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Shorthand for `self.kind().status()`.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.kind.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ErrorKind::Validation, "VALIDATION_ERROR", 400)]
    #[case(ErrorKind::EmptyList, "EMPTY_LIST", 400)]
    #[case(ErrorKind::NotFound, "NOT_FOUND", 404)]
    #[case(ErrorKind::Optimise, "OPTIMIZE_ERROR", 500)]
    fn kinds_map_to_codes_and_statuses(
        #[case] kind: ErrorKind,
        #[case] code: &str,
        #[case] status: u16,
    ) {
        assert_eq!(kind.code(), code);
        assert_eq!(kind.status(), status);
        assert_eq!(ErrorKind::from_code(code), Some(kind));
    }

    #[rstest]
    fn unknown_codes_do_not_parse() {
        assert_eq!(ErrorKind::from_code("TEAPOT"), None);
    }

    #[rstest]
    fn internal_errors_hide_their_detail() {
        let err = ServiceError::internal(&"database password rejected");
        assert_eq!(err.kind(), ErrorKind::Optimise);
        assert_eq!(err.to_string(), "Failed to optimize route");
    }
}
