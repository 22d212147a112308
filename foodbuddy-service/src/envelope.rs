//! The `{ data, error }` response envelope.

use serde::{Deserialize, Serialize};

use crate::{ErrorKind, ServiceError};

/// Error body inside an [`Envelope`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable description.
    pub message: String,
    /// Machine-readable code such as `NOT_FOUND`.
    pub code: String,
}

impl From<&ServiceError> for ApiError {
    fn from(err: &ServiceError) -> Self {
        Self {
            message: err.message().to_owned(),
            code: err.code().to_owned(),
        }
    }
}

/// Exactly one of `data` and `error` is set; the other serialises as `null`.
///
/// # Examples
/// ```
/// use foodbuddy_service::Envelope;
///
/// let ok = Envelope::success(3);
/// assert_eq!(ok.status(), 200);
/// assert_eq!(serde_json::to_string(&ok)?, r#"{"data":3,"error":null}"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Payload on success.
    pub data: Option<T>,
    /// Error on failure.
    pub error: Option<ApiError>,
}

impl<T> Envelope<T> {
    /// Wrap a successful payload.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// Wrap a failure.
    #[must_use]
    pub fn failure(err: &ServiceError) -> Self {
        Self {
            data: None,
            error: Some(ApiError::from(err)),
        }
    }

    /// Whether the envelope carries an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// HTTP status matching the envelope: 200 on success, otherwise the
    /// status of the error code (500 for codes this crate does not know).
    #[must_use]
    pub fn status(&self) -> u16 {
        self.error.as_ref().map_or(200, |error| {
            ErrorKind::from_code(&error.code).map_or(500, ErrorKind::status)
        })
    }
}

impl<T> From<Result<T, ServiceError>> for Envelope<T> {
    fn from(result: Result<T, ServiceError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::failure(&err),
        }
    }
}
