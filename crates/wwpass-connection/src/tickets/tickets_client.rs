use tracing::debug;
use wwpass_crypto::seal_message;

use crate::{
    WWPassConnection, WWPassError,
    api::{Reply, SpfeRequest},
    tickets::{AuthType, Puid, Ticket, TicketReply, TicketRequest},
};

/// Issues tickets and resolves them to users.
pub struct TicketsClient<'a> {
    pub(crate) connection: &'a WWPassConnection,
}

impl TicketsClient<'_> {
    /// Issue a new ticket for the user to authenticate.
    ///
    /// When a message is given it is sealed with a fresh key, and the key is returned in
    /// [TicketReply::message_key].
    pub async fn get_ticket(&self, request: &TicketRequest) -> Result<TicketReply, WWPassError> {
        let mut spfe_request = SpfeRequest::get("get")
            .optional_param("auth_type", Some(request.auth_type.to_string()))
            .optional_param("ttl", ttl_param(request.ttl));

        let mut message_key = None;
        if let Some(message) = request.message.as_deref().filter(|m| !m.is_empty()) {
            let (key, sealed) = seal_message(message)?;
            spfe_request = spfe_request.param("message", sealed.to_json()?);
            message_key = Some(key);
        }

        let spfe_request = spfe_request.optional_param("qasUri", request.qas_uri.as_deref());

        let mut reply = into_ticket_reply(self.connection.send(spfe_request).await?)?;
        reply.message_key = message_key;
        Ok(reply)
    }

    /// Re-issue an authenticated ticket, typically to extend its lifetime or to get a ticket
    /// that can be used more than once.
    pub async fn put_ticket(
        &self,
        ticket: &Ticket,
        auth_type: AuthType,
        ttl: Option<u32>,
    ) -> Result<TicketReply, WWPassError> {
        let request = SpfeRequest::get("put")
            .param("ticket", ticket.as_str())
            .optional_param("auth_type", Some(auth_type.to_string()))
            .optional_param("ttl", ttl_param(ttl));

        into_ticket_reply(self.connection.send(request).await?)
    }

    /// Resolve an authenticated ticket to the user's PUID.
    pub async fn get_puid(&self, ticket: &Ticket, auth_type: AuthType) -> Result<Puid, WWPassError> {
        let request = SpfeRequest::get("puid")
            .param("ticket", ticket.as_str())
            .optional_param("auth_type", Some(auth_type.to_string()));

        Ok(Puid::from(self.connection.send(request).await?.into_string()?))
    }

    /// Name of the Service Provider, as registered with WWPass.
    ///
    /// The SPFE has no dedicated command for it, the name is taken from a freshly issued ticket.
    pub async fn get_name(&self) -> Result<String, WWPassError> {
        let reply = self.get_ticket(&TicketRequest::default()).await?;
        let name = reply.ticket.sp_name()?.to_owned();
        debug!(%name, "Resolved Service Provider name");
        Ok(name)
    }
}

fn ttl_param(ttl: Option<u32>) -> Option<String> {
    ttl.filter(|ttl| *ttl != 0).map(|ttl| ttl.to_string())
}

fn into_ticket_reply(reply: Reply) -> Result<TicketReply, WWPassError> {
    let ttl = reply.ttl;
    let original_ticket = reply.original_ticket.clone().map(Ticket::from);

    Ok(TicketReply {
        ticket: Ticket::from(reply.into_string()?),
        ttl,
        original_ticket,
        message_key: None,
    })
}

impl<'a> WWPassConnection {
    /// Access to ticket functionality.
    pub fn tickets(&'a self) -> TicketsClient<'a> {
        TicketsClient { connection: self }
    }
}
