//! Completing a web login.
//!
//! After the user authenticates, the WWPass client redirects the browser back to the Service
//! Provider with the ticket in the query string. [ticket_from_query] pulls it out, and
//! [LoginClient::authenticate] turns it into the user's identity.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{AuthType, Puid, Ticket, WWPassConnection, WWPassError};

/// A user whose ticket was accepted by the SPFE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    #[allow(missing_docs)]
    pub puid: Puid,
    /// Re-issued ticket, valid for further SPFE calls on behalf of the user until `ttl` expires.
    pub ticket: Ticket,
    /// Lifetime of `ticket` in seconds, when the SPFE reports it.
    pub ttl: Option<u32>,
}

/// Extract the `ticket` parameter from the query string of the login callback.
///
/// A leading `?` is accepted. Returns `None` when the parameter is absent or empty.
pub fn ticket_from_query(query: &str) -> Option<Ticket> {
    let query = query.strip_prefix('?').unwrap_or(query);

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "ticket")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .map(Ticket::from)
}

#[allow(missing_docs)]
pub struct LoginClient<'a> {
    pub(crate) connection: &'a WWPassConnection,
}

impl LoginClient<'_> {
    /// Exchange the one-time ticket from the login callback for a fresh ticket, and resolve the
    /// user's PUID with it.
    #[instrument(skip_all, fields(%auth_type))]
    pub async fn authenticate(
        &self,
        ticket: &Ticket,
        auth_type: AuthType,
    ) -> Result<AuthenticatedUser, WWPassError> {
        let tickets = self.connection.tickets();

        let reply = tickets.put_ticket(ticket, auth_type, None).await?;
        let puid = tickets.get_puid(&reply.ticket, auth_type).await?;

        debug!(ttl = ?reply.ttl, "User authenticated");

        Ok(AuthenticatedUser {
            puid,
            ticket: reply.ticket,
            ttl: reply.ttl,
        })
    }
}

impl<'a> WWPassConnection {
    /// Access to the login flow.
    pub fn login(&'a self) -> LoginClient<'a> {
        LoginClient { connection: self }
    }
}
