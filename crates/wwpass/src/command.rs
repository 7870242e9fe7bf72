use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use wwpass_connection::client::{DEFAULT_SPFE_ADDRESS, DEFAULT_TIMEOUT_SECS};

use crate::{
    containers::{DataCommands, SpCommands},
    message::MessageCommands,
    render::Output,
    tickets::{PuidArgs, TicketCommands},
};

pub const CERT_FILE_ENV: &str = "WWPASS_CERT_FILE";
pub const KEY_FILE_ENV: &str = "WWPASS_KEY_FILE";
pub const SPFE_ADDRESS_ENV: &str = "WWPASS_SPFE_ADDRESS";
pub const TIMEOUT_ENV: &str = "WWPASS_TIMEOUT";

#[derive(Parser, Clone)]
#[command(name = "wwpass", version, about = "WWPass Service Provider CLI", long_about = None)]
pub struct Cli {
    // Optional as a workaround for https://github.com/clap-rs/clap/issues/3572
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short = 'o', long, global = true, value_enum, default_value_t = Output::JSON)]
    pub output: Output,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Args, Clone, Debug)]
pub struct ConnectionArgs {
    #[arg(
        long,
        global = true,
        env = CERT_FILE_ENV,
        help = "PEM file with the Service Provider certificate."
    )]
    pub cert: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        env = KEY_FILE_ENV,
        help = "PEM file with the Service Provider private key."
    )]
    pub key: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        env = SPFE_ADDRESS_ENV,
        default_value = DEFAULT_SPFE_ADDRESS,
        help = "Host and optional port of the SPFE."
    )]
    pub spfe: String,

    #[arg(
        long,
        global = true,
        env = TIMEOUT_ENV,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "Request timeout in seconds."
    )]
    pub timeout: u64,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    // Ticket commands
    #[command(long_about = "Issue and re-issue tickets.")]
    Ticket {
        #[command(subcommand)]
        command: TicketCommands,
    },

    #[command(long_about = "Resolve an authenticated ticket to the user's PUID.")]
    Puid(PuidArgs),

    #[command(long_about = "Print the Service Provider name registered with WWPass.")]
    Name,

    // Container commands
    #[command(long_about = "Work with the data containers bound to a user.")]
    Data {
        #[command(subcommand)]
        command: DataCommands,
    },

    #[command(long_about = "Work with the Service Provider's own data containers.")]
    Sp {
        #[command(subcommand)]
        command: SpCommands,
    },

    #[command(long_about = "Work with messages sealed for the authentication prompt.")]
    Message {
        #[command(subcommand)]
        command: MessageCommands,
    },

    #[command(long_about = "Generate shell completions.")]
    Completion {
        #[arg(long, help = "The shell to generate completions for.")]
        shell: Option<clap_complete::Shell>,
    },
}
