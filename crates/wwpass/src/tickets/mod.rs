use clap::{Args, Subcommand};
use serde::Serialize;
use wwpass_connection::{AuthType, Ticket, TicketReply, TicketRequest, WWPassConnection};

use crate::render::{CommandOutput, CommandResult};

#[derive(Subcommand, Clone)]
pub enum TicketCommands {
    #[command(long_about = "Issue a new ticket for a user to authenticate.")]
    Get(GetTicketArgs),
    #[command(long_about = "Re-issue an authenticated ticket.")]
    Put(PutTicketArgs),
}

#[derive(Args, Clone)]
pub struct GetTicketArgs {
    #[arg(
        long,
        help = "Credentials the user has to present: any of `p` (access code), `s` (session key), `c` (client key)."
    )]
    pub auth_type: Option<AuthType>,

    #[arg(long, help = "Lifetime of the ticket in seconds.")]
    pub ttl: Option<u32>,

    #[arg(long, help = "Message shown to the user while authenticating.")]
    pub message: Option<String>,

    #[arg(long, help = "URI for the quick authentication flow.")]
    pub qas_uri: Option<String>,
}

#[derive(Args, Clone)]
pub struct PutTicketArgs {
    pub ticket: String,

    #[arg(long, help = "Credentials the user presented.")]
    pub auth_type: Option<AuthType>,

    #[arg(long, help = "Lifetime of the new ticket in seconds.")]
    pub ttl: Option<u32>,
}

#[derive(Args, Clone)]
pub struct PuidArgs {
    pub ticket: String,

    #[arg(long, help = "Credentials the user presented.")]
    pub auth_type: Option<AuthType>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TicketOutput {
    ticket: Ticket,
    ttl: Option<u32>,
    original_ticket: Option<Ticket>,
    /// Base64 key that opens the sealed message.
    message_key: Option<String>,
}

impl From<TicketReply> for TicketOutput {
    fn from(reply: TicketReply) -> Self {
        Self {
            ticket: reply.ticket,
            ttl: reply.ttl,
            original_ticket: reply.original_ticket,
            message_key: reply.message_key.map(|key| key.to_base64()),
        }
    }
}

impl TicketCommands {
    pub async fn run(self, connection: &WWPassConnection) -> CommandResult {
        let reply = match self {
            TicketCommands::Get(args) => {
                let request = TicketRequest {
                    auth_type: args.auth_type.unwrap_or_default(),
                    ttl: args.ttl,
                    message: args.message,
                    qas_uri: args.qas_uri,
                };
                connection.tickets().get_ticket(&request).await?
            }
            TicketCommands::Put(args) => {
                connection
                    .tickets()
                    .put_ticket(
                        &Ticket::new(args.ticket),
                        args.auth_type.unwrap_or_default(),
                        args.ttl,
                    )
                    .await?
            }
        };

        Ok(CommandOutput::object(TicketOutput::from(reply)))
    }
}

impl PuidArgs {
    pub async fn run(self, connection: &WWPassConnection) -> CommandResult {
        let puid = connection
            .tickets()
            .get_puid(&Ticket::new(self.ticket), self.auth_type.unwrap_or_default())
            .await?;
        Ok(puid.to_string().into())
    }
}

pub async fn service_provider_name(connection: &WWPassConnection) -> CommandResult {
    Ok(connection.tickets().get_name().await?.into())
}
