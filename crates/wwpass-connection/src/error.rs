//! Errors that can occur when using this SDK

use reqwest::StatusCode;
use thiserror::Error;
use wwpass_crypto::CryptoError;

/// Errors from performing network requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The SPFE answered with a non-success HTTP status.
    #[error("Received error response from the SPFE: [{status}] {content}")]
    Response {
        /// HTTP status code of the response.
        status: StatusCode,
        /// Raw response body content.
        content: String,
    },

    /// Could not reach the SPFE (DNS failure, timeout, TLS error, connection refused, etc.)
    #[error("not connected: {0}")]
    NotConnected(String),

    /// Catch-all for other errors
    #[error("other error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return ApiError::Response {
                status,
                content: String::new(),
            };
        }

        // Connection errors, timeouts and errors sending the request all mean the SPFE could not
        // be talked to.
        if e.is_connect() || e.is_timeout() || e.is_request() {
            return ApiError::NotConnected(e.to_string());
        }

        ApiError::Other(e.to_string())
    }
}

impl From<reqwest_middleware::Error> for ApiError {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => ApiError::Other(e.to_string()),
        }
    }
}

/// The SPFE reply could not be understood, or the SPFE reported a failure.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The SPFE processed the request and refused it.
    #[error("SPFE returned error: {0}")]
    Spfe(String),
    /// The reply is not a well formed SPFE document.
    #[error("Malformed SPFE reply: {0}")]
    Malformed(String),
    /// The `ttl` element is not an integer.
    #[error("unable to convert ttl to int")]
    InvalidTtl,
    /// Tickets are always prefixed with the Service Provider name and a colon.
    #[error("SPFE returned ticket without a colon")]
    TicketWithoutColon,
    #[allow(missing_docs)]
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
}

/// Missing required field.
#[derive(Debug, Error)]
#[error("The reply received was missing a required field: {0}")]
pub struct MissingFieldError(pub &'static str);

/// Errors loading the Service Provider certificate and key.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    InvalidKey(#[from] CryptoError),
    #[error("Invalid certificate: {0}")]
    InvalidCertificate(String),
    #[error("Unable to set up TLS: {0}")]
    Tls(String),
}

/// Error returned by the SPFE operations.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum WWPassError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

impl From<MissingFieldError> for WWPassError {
    fn from(e: MissingFieldError) -> Self {
        WWPassError::Protocol(e.into())
    }
}

/// This macro is used to require that a value is present or return an error otherwise.
/// It is equivalent to using `val.ok_or(Error::MissingFields)?`, but easier to use and
/// with a more descriptive error message.
/// Note that this macro will return early from the function if the value is not present.
#[macro_export]
macro_rules! require {
    ($val:expr) => {
        match $val {
            Some(val) => val,
            None => return Err($crate::MissingFieldError(stringify!($val)).into()),
        }
    };
}
