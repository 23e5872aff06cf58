use std::fmt;

use bytes::Bytes;
use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// The error type for rgwadmin operations.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A parameter is missing, empty or rejected by a validator.
    ///
    /// Always raised before any network I/O.
    ParameterInvalid,

    /// Credentials are missing or malformed
    CredentialInvalid,

    /// Request cannot be built or signed (invalid header, uri, etc.)
    RequestInvalid,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// The transport failed before any HTTP response was obtained.
    Transport,

    /// The service answered with an HTTP status >= 400.
    Api,

    /// A successful response could not be decoded.
    ResponseInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the validation failure if this error was raised while
    /// compiling a link chain.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Returns the transport failure carried by this error.
    pub fn transport_error(&self) -> Option<&TransportError> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Returns the decoded service error carried by this error.
    pub fn api_error(&self) -> Option<&ApiError> {
        self.source.as_ref()?.downcast_ref()
    }
}

// Convenience constructors
impl Error {
    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a response invalid error
    pub fn response_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResponseInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// Wrap a validation failure.
    pub fn parameter_invalid(err: ValidationError) -> Self {
        Self::new(ErrorKind::ParameterInvalid, err.to_string()).with_source(err)
    }

    /// Wrap a transport failure.
    pub fn transport(err: TransportError) -> Self {
        Self::new(ErrorKind::Transport, err.to_string()).with_source(err)
    }

    /// Wrap a decoded service error.
    pub fn api(err: ApiError) -> Self {
        Self::new(ErrorKind::Api, err.to_string()).with_source(err)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ParameterInvalid => write!(f, "invalid parameter"),
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Transport => write!(f, "transport failure"),
            ErrorKind::Api => write!(f, "api error"),
            ErrorKind::ResponseInvalid => write!(f, "invalid response"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

/// Why a parameter was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    /// The parameter is required but no value was bound.
    Missing,
    /// The bound value is empty while emptiness is disallowed.
    Empty,
    /// The bound value failed a validator.
    Rejected {
        /// Name of the failing validator.
        validator: String,
        /// What the validator expected instead.
        expected: String,
    },
}

/// A parameter failed validation while compiling a link chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending parameter.
    pub parameter: String,
    /// Offending value, `None` when no value was bound.
    pub value: Option<String>,
    /// Failure reason.
    pub reason: ValidationReason,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            ValidationReason::Missing => {
                write!(f, "parameter \"{}\" is required", self.parameter)
            }
            ValidationReason::Empty => {
                write!(f, "parameter \"{}\" must not be empty", self.parameter)
            }
            ValidationReason::Rejected {
                validator,
                expected,
            } => write!(
                f,
                "parameter \"{}\" failed {} validation: expected {}, got {:?}",
                self.parameter,
                validator,
                expected,
                self.value.as_deref().unwrap_or_default()
            ),
        }
    }
}

/// Coarse classification of a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorCode {
    /// Connection could not be established (refused, dns, tls).
    Connect,
    /// The transport gave up waiting.
    Timeout,
    /// Redirect policy violated.
    Redirect,
    /// The request could not be sent.
    Request,
    /// The response body could not be read.
    Body,
    /// Anything else reported by the transport.
    Other,
}

impl fmt::Display for TransportErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportErrorCode::Connect => write!(f, "connect"),
            TransportErrorCode::Timeout => write!(f, "timeout"),
            TransportErrorCode::Redirect => write!(f, "redirect"),
            TransportErrorCode::Request => write!(f, "request"),
            TransportErrorCode::Body => write!(f, "body"),
            TransportErrorCode::Other => write!(f, "other"),
        }
    }
}

/// A failure that happened before any HTTP response was obtained.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("transport failed ({code}): {message}")]
pub struct TransportError {
    /// Transport supplied code.
    pub code: TransportErrorCode,
    /// Transport supplied message.
    pub message: String,
}

impl TransportError {
    /// Create a new transport error.
    pub fn new(code: TransportErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Error returned by the service for an HTTP status >= 400.
///
/// The gateway answers with a body like:
///
/// ```json
/// {"Code":"NoSuchUser","RequestId":"tx000...","HostId":"a1b2-default"}
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("api returned {status}: {code}")]
pub struct ApiError {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Service error code, e.g. `NoSuchUser`.
    pub code: String,
    /// Request id assigned by the gateway.
    pub request_id: Option<String>,
    /// Host id of the gateway that served the request.
    pub host_id: Option<String>,
    /// Optional human readable message.
    pub message: Option<String>,
}

impl ApiError {
    /// Decode an api error from a response.
    ///
    /// Bodies that are not the service error document fall back to the
    /// canonical reason of the status code and keep the raw body as message.
    pub fn from_response(resp: &http::Response<Bytes>) -> Self {
        let status = resp.status();
        let fallback = || status.canonical_reason().unwrap_or("Unknown").to_string();

        let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(resp.body()) else {
            let raw = String::from_utf8_lossy(resp.body()).trim().to_string();
            return Self {
                status,
                code: fallback(),
                request_id: None,
                host_id: None,
                message: (!raw.is_empty()).then_some(raw),
            };
        };

        let field = |name: &str| map.get(name).and_then(Value::as_str).map(str::to_string);

        Self {
            status,
            code: field("Code").unwrap_or_else(fallback),
            request_id: field("RequestId"),
            host_id: field("HostId"),
            message: field("Message"),
        }
    }
}

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::response_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_service_body() {
        let resp = http::Response::builder()
            .status(404)
            .body(Bytes::from_static(
                br#"{"Code":"NoSuchUser","RequestId":"tx0001","HostId":"zg-default"}"#,
            ))
            .unwrap();

        let err = ApiError::from_response(&resp);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, "NoSuchUser");
        assert_eq!(err.request_id.as_deref(), Some("tx0001"));
        assert_eq!(err.host_id.as_deref(), Some("zg-default"));
        assert_eq!(err.message, None);
    }

    #[test]
    fn test_api_error_from_unexpected_body() {
        let resp = http::Response::builder()
            .status(503)
            .body(Bytes::from_static(b"<html>busy</html>"))
            .unwrap();

        let err = ApiError::from_response(&resp);
        assert_eq!(err.code, "Service Unavailable");
        assert_eq!(err.message.as_deref(), Some("<html>busy</html>"));

        let resp = http::Response::builder()
            .status(403)
            .body(Bytes::new())
            .unwrap();
        let err = ApiError::from_response(&resp);
        assert_eq!(err.code, "Forbidden");
        assert_eq!(err.message, None);
    }

    #[test]
    fn test_typed_details_round_trip_through_error() {
        let err = Error::api(ApiError {
            status: StatusCode::CONFLICT,
            code: "BucketAlreadyExists".to_string(),
            request_id: None,
            host_id: None,
            message: None,
        });
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.api_error().unwrap().code, "BucketAlreadyExists");
        assert!(err.transport_error().is_none());
        assert!(err.validation_error().is_none());

        let err = Error::transport(TransportError::new(
            TransportErrorCode::Connect,
            "connection refused",
        ));
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(
            err.transport_error().unwrap().code,
            TransportErrorCode::Connect
        );
        assert!(err.api_error().is_none());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError {
            parameter: "start".to_string(),
            value: Some("2024-01-01".to_string()),
            reason: ValidationReason::Rejected {
                validator: "datetime".to_string(),
                expected: "string formatted as YYYY-MM-DD HH:MM:SS".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "parameter \"start\" failed datetime validation: expected string formatted as YYYY-MM-DD HH:MM:SS, got \"2024-01-01\""
        );

        let err = ValidationError {
            parameter: "uid".to_string(),
            value: None,
            reason: ValidationReason::Missing,
        };
        assert_eq!(err.to_string(), "parameter \"uid\" is required");
    }
}
