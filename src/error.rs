// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Submit(SubmitError),
}

/// Specific error types for beta-signup submission failures.
/// Used to provide user-friendly, localized error messages.
///
/// The submission endpoint is opaque (the response body cannot be read), so
/// every variant describes the transport, never the server's answer.
#[derive(Debug, Clone)]
pub enum SubmitError {
    /// The request timed out before the endpoint answered.
    Timeout,

    /// The endpoint could not be reached (DNS, refused connection, offline).
    Connection,

    /// The request could not be built (malformed payload or URL).
    InvalidRequest(String),

    /// Generic transport failure with raw message.
    Other(String),
}

impl SubmitError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SubmitError::Timeout => "error-submit-timeout",
            SubmitError::Connection => "error-submit-connection",
            SubmitError::InvalidRequest(_) => "error-submit-invalid-request",
            SubmitError::Other(_) => "error-submit-general",
        }
    }

    /// Categorizes a transport error reported by the HTTP client.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return SubmitError::Timeout;
        }
        if err.is_connect() {
            return SubmitError::Connection;
        }
        if err.is_builder() || err.is_request() {
            return SubmitError::InvalidRequest(err.to_string());
        }
        SubmitError::Other(err.to_string())
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Timeout => write!(f, "Submission timed out"),
            SubmitError::Connection => write!(f, "Could not reach the signup endpoint"),
            SubmitError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            SubmitError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Submit(e) => write!(f, "Submit Error: {}", e),
        }
    }
}

impl From<SubmitError> for Error {
    fn from(err: SubmitError) -> Self {
        Error::Submit(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn submit_error_converts_to_error() {
        let err: Error = SubmitError::Timeout.into();
        assert!(matches!(err, Error::Submit(SubmitError::Timeout)));
    }

    #[test]
    fn submit_error_i18n_keys() {
        assert_eq!(SubmitError::Timeout.i18n_key(), "error-submit-timeout");
        assert_eq!(SubmitError::Connection.i18n_key(), "error-submit-connection");
        assert_eq!(
            SubmitError::Other("x".into()).i18n_key(),
            "error-submit-general"
        );
    }

    #[test]
    fn submit_error_display() {
        let err = SubmitError::Connection;
        assert!(format!("{}", err).contains("endpoint"));
    }
}
