#![doc = include_str!("../README.md")]

mod api;
pub use api::Reply;
pub mod client;
pub use client::{
    ClientCredentials, Configuration, ConnectionSettings, WWPASS_CA_PEM, WWPassConnection,
};
pub mod containers;
pub use containers::Pfid;
mod error;
pub use error::{ApiError, CredentialsError, MissingFieldError, ProtocolError, WWPassError};
pub mod login;
pub mod tickets;
pub use tickets::{AuthType, Puid, Ticket, TicketReply, TicketRequest};

pub use wwpass_crypto::{MessageKey, SealedMessage};
