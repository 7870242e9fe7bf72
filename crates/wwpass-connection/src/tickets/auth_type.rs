use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Credentials the user must present, on top of the PassKey, for a ticket to be authenticated.
///
/// Sent to the SPFE as the `auth_type` parameter: one letter per extra credential, in the order
/// `p`, `s`, `c`. [AuthType::PASSKEY] is the empty string and is never sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthType {
    /// `p`: the PassKey access code.
    pub access_code: bool,
    /// `s`: a session key bound to the ticket.
    pub session_key: bool,
    /// `c`: a client key.
    pub client_key: bool,
}

impl AuthType {
    /// PassKey only.
    pub const PASSKEY: Self = Self {
        access_code: false,
        session_key: false,
        client_key: false,
    };

    /// PassKey and its access code.
    pub const PASSKEY_AND_ACCESS_CODE: Self = Self {
        access_code: true,
        session_key: false,
        client_key: false,
    };

    /// True when no credential beyond the PassKey is required.
    pub fn is_passkey_only(&self) -> bool {
        *self == Self::PASSKEY
    }
}

/// An `auth_type` string contained an unsupported letter.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown auth type flag: '{0}'")]
pub struct UnknownAuthTypeError(pub char);

impl FromStr for AuthType {
    type Err = UnknownAuthTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut auth_type = AuthType::PASSKEY;
        for flag in s.chars() {
            match flag {
                'p' => auth_type.access_code = true,
                's' => auth_type.session_key = true,
                'c' => auth_type.client_key = true,
                other => return Err(UnknownAuthTypeError(other)),
            }
        }
        Ok(auth_type)
    }
}

impl TryFrom<String> for AuthType {
    type Error = UnknownAuthTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AuthType> for String {
    fn from(value: AuthType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (enabled, flag) in [
            (self.access_code, "p"),
            (self.session_key, "s"),
            (self.client_key, "c"),
        ] {
            if enabled {
                f.write_str(flag)?;
            }
        }
        Ok(())
    }
}
