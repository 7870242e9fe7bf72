use std::fmt;

use serde::{Deserialize, Serialize};
use wwpass_crypto::MessageKey;

use crate::{ProtocolError, tickets::AuthType};

/// A ticket issued by the SPFE, formatted as `<service provider name>:<opaque part>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticket(String);

impl Ticket {
    #[allow(missing_docs)]
    pub fn new(ticket: impl Into<String>) -> Self {
        Self(ticket.into())
    }

    #[allow(missing_docs)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the Service Provider the ticket was issued to: everything before the first colon.
    pub fn sp_name(&self) -> Result<&str, ProtocolError> {
        self.0
            .split_once(':')
            .map(|(name, _)| name)
            .ok_or(ProtocolError::TicketWithoutColon)
    }
}

impl From<String> for Ticket {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Ticket {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for Ticket {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Provider-specific User ID. Stable for a user within one Service Provider, and different
/// across Service Providers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Puid(String);

impl Puid {
    #[allow(missing_docs)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Puid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Puid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Options for issuing a new ticket.
#[derive(Debug, Clone, Default)]
pub struct TicketRequest {
    /// Credentials the user will have to present.
    pub auth_type: AuthType,
    /// Lifetime of the ticket in seconds. `None` or `0` uses the SPFE default.
    pub ttl: Option<u32>,
    /// Message shown to the user while authenticating. It is sealed before leaving the process.
    pub message: Option<String>,
    /// URI for the quick authentication flow, passed through to the SPFE.
    pub qas_uri: Option<String>,
}

/// A ticket returned by the SPFE.
#[derive(Debug, Clone)]
pub struct TicketReply {
    #[allow(missing_docs)]
    pub ticket: Ticket,
    /// Lifetime of the ticket in seconds.
    pub ttl: Option<u32>,
    /// The ticket this one replaced, when it was re-issued.
    pub original_ticket: Option<Ticket>,
    /// Key that opens the sealed message, when the ticket was requested with a message.
    pub message_key: Option<MessageKey>,
}
