use std::io::IsTerminal;

use clap::{Args, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use wwpass_connection::{Pfid, Ticket, WWPassConnection};

use crate::{connection::read_input, render::CommandResult};

#[derive(Subcommand, Clone)]
pub enum DataCommands {
    #[command(long_about = "Print the content of a user container.")]
    Read {
        ticket: String,
        #[command(flatten)]
        container: ContainerArg,
        #[arg(long, value_name = "SECONDS", help = "Also lock the container.")]
        lock: Option<u32>,
    },
    #[command(long_about = "Replace the content of a user container.")]
    Write {
        ticket: String,
        #[arg(help = "New content. Read from stdin when omitted.")]
        data: Option<String>,
        #[command(flatten)]
        container: ContainerArg,
        #[arg(long, help = "Release the lock taken by `data read --lock`.")]
        unlock: bool,
    },
    #[command(long_about = "Take an advisory lock.")]
    Lock {
        ticket: String,
        #[arg(long, value_name = "SECONDS")]
        lock_timeout: u32,
        #[arg(long)]
        lockid: Option<String>,
    },
    #[command(long_about = "Release an advisory lock.")]
    Unlock {
        ticket: String,
        #[arg(long)]
        lockid: Option<String>,
    },
}

#[derive(Args, Clone)]
pub struct ContainerArg {
    #[arg(long, help = "Name of the container. The default container when omitted.")]
    pub container: Option<String>,
}

impl DataCommands {
    pub async fn run(self, connection: &WWPassConnection) -> CommandResult {
        let containers = connection.containers();

        match self {
            DataCommands::Read {
                ticket,
                container,
                lock,
            } => {
                let ticket = Ticket::new(ticket);
                let container = container.container.as_deref();
                let data = match lock {
                    Some(timeout) => {
                        containers
                            .read_data_and_lock(&ticket, container, timeout)
                            .await?
                    }
                    None => containers.read_data(&ticket, container).await?,
                };
                Ok(data.into())
            }
            DataCommands::Write {
                ticket,
                data,
                container,
                unlock,
            } => {
                let ticket = Ticket::new(ticket);
                let data = read_input(data)?;
                let container = container.container.as_deref();
                if unlock {
                    containers
                        .write_data_and_unlock(&ticket, data, container)
                        .await?;
                } else {
                    containers.write_data(&ticket, data, container).await?;
                }
                Ok(().into())
            }
            DataCommands::Lock {
                ticket,
                lock_timeout,
                lockid,
            } => {
                containers
                    .lock(&Ticket::new(ticket), lock_timeout, lockid.as_deref())
                    .await?;
                Ok(().into())
            }
            DataCommands::Unlock { ticket, lockid } => {
                containers
                    .unlock(&Ticket::new(ticket), lockid.as_deref())
                    .await?;
                Ok(().into())
            }
        }
    }
}

#[derive(Subcommand, Clone)]
pub enum SpCommands {
    #[command(long_about = "Create a Service Provider container and print its PFID (base64).")]
    Create {
        #[arg(help = "Initial content. Read from stdin when omitted and stdin is not a terminal.")]
        data: Option<String>,
    },
    #[command(long_about = "Remove a Service Provider container.")]
    Remove { pfid: String },
    #[command(long_about = "Print the content of a Service Provider container.")]
    Read {
        pfid: String,
        #[arg(long, value_name = "SECONDS", help = "Also lock the container.")]
        lock: Option<u32>,
    },
    #[command(long_about = "Replace the content of a Service Provider container.")]
    Write {
        pfid: String,
        #[arg(help = "New content. Read from stdin when omitted.")]
        data: Option<String>,
        #[arg(long, help = "Release the lock taken by `sp read --lock`.")]
        unlock: bool,
    },
    #[command(long_about = "Take a Service Provider lock.")]
    Lock {
        lockid: String,
        #[arg(long, value_name = "SECONDS")]
        lock_timeout: u32,
    },
    #[command(long_about = "Release a Service Provider lock.")]
    Unlock { lockid: String },
}

fn parse_pfid(pfid: &str) -> Result<Pfid> {
    Pfid::from_base64(pfid).wrap_err("PFID must be base64 encoded")
}

impl SpCommands {
    pub async fn run(self, connection: &WWPassConnection) -> CommandResult {
        let sp = connection.sp_containers();

        match self {
            SpCommands::Create { data } => {
                let data = match data {
                    None if std::io::stdin().is_terminal() => None,
                    data => Some(read_input(data)?),
                };
                let pfid = sp.create_pfid(data.as_deref()).await?;
                Ok(pfid.to_base64().into())
            }
            SpCommands::Remove { pfid } => {
                sp.remove_pfid(&parse_pfid(&pfid)?).await?;
                Ok(().into())
            }
            SpCommands::Read { pfid, lock } => {
                let pfid = parse_pfid(&pfid)?;
                let data = match lock {
                    Some(timeout) => sp.read_data_sp_and_lock(&pfid, timeout).await?,
                    None => sp.read_data_sp(&pfid).await?,
                };
                Ok(data.into())
            }
            SpCommands::Write { pfid, data, unlock } => {
                let pfid = parse_pfid(&pfid)?;
                let data = read_input(data)?;
                if unlock {
                    sp.write_data_sp_and_unlock(&pfid, data).await?;
                } else {
                    sp.write_data_sp(&pfid, data).await?;
                }
                Ok(().into())
            }
            SpCommands::Lock {
                lockid,
                lock_timeout,
            } => {
                sp.lock_sp(lockid, lock_timeout).await?;
                Ok(().into())
            }
            SpCommands::Unlock { lockid } => {
                sp.unlock_sp(lockid).await?;
                Ok(().into())
            }
        }
    }
}
