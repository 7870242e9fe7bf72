use thiserror::Error;

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Error while encrypting the message")]
    Encrypt,
    #[error("Error while decrypting the message, the key or the data is wrong")]
    Decrypt,
    #[error("Invalid private key: {0}")]
    InvalidKey(String),
    #[error("Invalid key length, expected {expected} bytes but got {got}")]
    InvalidKeyLength { expected: usize, got: usize },
    #[error("Encoding error: {0}")]
    Encoding(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<base64::DecodeError> for CryptoError {
    fn from(e: base64::DecodeError) -> Self {
        CryptoError::Encoding(e.to_string())
    }
}

impl From<std::string::FromUtf8Error> for CryptoError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        CryptoError::Encoding(e.to_string())
    }
}

/// Alias for `Result<T, CryptoError>`.
pub type Result<T, E = CryptoError> = std::result::Result<T, E>;
