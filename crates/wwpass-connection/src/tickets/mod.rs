//! Tickets and user identification.
//!
//! A ticket is issued to the Service Provider by the SPFE, handed to the user's PassKey for
//! authentication, and then exchanged for the user's PUID.

mod auth_type;
mod ticket;
mod tickets_client;

pub use auth_type::{AuthType, UnknownAuthTypeError};
pub use ticket::{Puid, Ticket, TicketReply, TicketRequest};
pub use tickets_client::TicketsClient;
