use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// Identifier of a Service Provider data container, as returned by
/// [create_pfid][crate::containers::SpContainersClient::create_pfid]. It is binary data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pfid(Vec<u8>);

impl Pfid {
    #[allow(missing_docs)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Standard base64 encoding, convenient for storing the identifier as text.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// Parse the output of [Pfid::to_base64].
    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        Ok(Self(STANDARD.decode(encoded.trim())?))
    }
}

impl From<Vec<u8>> for Pfid {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl AsRef<[u8]> for Pfid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
