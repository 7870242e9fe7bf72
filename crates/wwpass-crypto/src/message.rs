//! Messages attached to tickets.
//!
//! A Service Provider can ask the SPFE to show a message to the user while the ticket is being
//! authenticated. The message is sealed with a fresh AES-128-GCM key, and only the sealed form
//! is sent to the SPFE. The key is handed back to the caller so it can be passed on to whoever
//! needs to open the message.

use base64::{Engine, engine::general_purpose::STANDARD};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    CryptoError, Result,
    aes_gcm::{KEY_SIZE, NONCE_SIZE, TAG_SIZE, decrypt_aes128_gcm, encrypt_aes128_gcm},
};

/// Size of a [MessageKey] in bytes.
pub const MESSAGE_KEY_SIZE: usize = KEY_SIZE;

/// Every message uses its own random key, so the nonce is a fixed value shared with the SPFE.
const MESSAGE_NONCE: [u8; NONCE_SIZE] = [
    0x7c, 0x0b, 0xb4, 0xd6, 0x0d, 0x8b, 0xc2, 0xc9, 0x0d, 0x90, 0xd9, 0x57, 0xbd, 0x2d, 0x21, 0xfd,
];

/// Symmetric key used to seal a single ticket message.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct MessageKey([u8; MESSAGE_KEY_SIZE]);

impl MessageKey {
    /// Generate a new random key using the OS random number generator.
    pub fn generate() -> Self {
        Self::generate_internal(rand::thread_rng())
    }

    fn generate_internal(mut rng: impl RngCore) -> Self {
        let mut key = [0u8; MESSAGE_KEY_SIZE];
        rng.fill_bytes(&mut key);
        Self(key)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; MESSAGE_KEY_SIZE] {
        &self.0
    }

    /// Standard base64 encoding of the key.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }

    /// Parse a key from its standard base64 encoding.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let bytes = STANDARD.decode(encoded.trim())?;
        Self::try_from(bytes.as_slice())
    }
}

impl TryFrom<&[u8]> for MessageKey {
    type Error = CryptoError;

    fn try_from(value: &[u8]) -> Result<Self> {
        let key: [u8; MESSAGE_KEY_SIZE] =
            value
                .try_into()
                .map_err(|_| CryptoError::InvalidKeyLength {
                    expected: MESSAGE_KEY_SIZE,
                    got: value.len(),
                })?;
        Ok(Self(key))
    }
}

impl std::fmt::Debug for MessageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageKey").finish_non_exhaustive()
    }
}

/// A message sealed with a [MessageKey], in the JSON shape understood by the SPFE.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SealedMessage {
    /// Base64 encoded ciphertext, without the tag.
    pub ciphertext: String,
    /// Base64 encoded authentication tag.
    pub tag: String,
    /// Base64 encoded nonce.
    pub nonce: String,
}

impl SealedMessage {
    /// Decrypt the message with the key that was returned when it was sealed.
    pub fn open(&self, key: &MessageKey) -> Result<String> {
        let ciphertext = STANDARD.decode(&self.ciphertext)?;
        let tag: [u8; TAG_SIZE] = STANDARD
            .decode(&self.tag)?
            .try_into()
            .map_err(|_| CryptoError::Encoding("Invalid tag length".to_owned()))?;
        let nonce: [u8; NONCE_SIZE] = STANDARD
            .decode(&self.nonce)?
            .try_into()
            .map_err(|_| CryptoError::Encoding("Invalid nonce length".to_owned()))?;

        let plaintext = decrypt_aes128_gcm(key.as_bytes(), &nonce, &ciphertext, &tag)?;
        Ok(String::from_utf8(plaintext)?)
    }

    /// Serialize to the compact JSON form sent as the `message` parameter.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the JSON form produced by [SealedMessage::to_json].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Seal `message` with a freshly generated key.
pub fn seal_message(message: &str) -> Result<(MessageKey, SealedMessage)> {
    let key = MessageKey::generate();
    let sealed = seal_message_with_key(&key, message)?;
    Ok((key, sealed))
}

fn seal_message_with_key(key: &MessageKey, message: &str) -> Result<SealedMessage> {
    let encrypted = encrypt_aes128_gcm(key.as_bytes(), &MESSAGE_NONCE, message.as_bytes())?;

    Ok(SealedMessage {
        ciphertext: STANDARD.encode(encrypted.encrypted_bytes()),
        tag: STANDARD.encode(encrypted.tag()),
        nonce: STANDARD.encode(MESSAGE_NONCE),
    })
}
