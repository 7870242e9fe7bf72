use clap::Subcommand;
use color_eyre::eyre::WrapErr;
use wwpass_crypto::{MessageKey, SealedMessage};

use crate::{connection::read_input, render::CommandResult};

#[derive(Subcommand, Clone)]
pub enum MessageCommands {
    #[command(long_about = "Open a sealed message with the key returned by `ticket get --message`.")]
    Open {
        #[arg(long, help = "Base64 message key.")]
        message_key: String,
        #[arg(help = "Sealed message JSON. Read from stdin when omitted.")]
        sealed: Option<String>,
    },
}

impl MessageCommands {
    pub fn run(self) -> CommandResult {
        match self {
            MessageCommands::Open {
                message_key,
                sealed,
            } => {
                let key = MessageKey::from_base64(message_key.trim())
                    .wrap_err("Invalid message key")?;
                let sealed = String::from_utf8(read_input(sealed)?)?;
                let sealed = SealedMessage::from_json(sealed.trim())
                    .wrap_err("Invalid sealed message")?;
                Ok(sealed.open(&key)?.into())
            }
        }
    }
}
