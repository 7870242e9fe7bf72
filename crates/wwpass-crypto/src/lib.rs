#![doc = include_str!("../README.md")]

mod aes_gcm;
mod error;
pub use error::{CryptoError, Result};
mod keys;
pub use keys::validate_private_key_pem;
mod message;
pub use message::{MESSAGE_KEY_SIZE, MessageKey, SealedMessage, seal_message};
