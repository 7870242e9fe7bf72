use std::process::Command;

/// Create a new wwpass CLI command, isolated from the credentials of the environment
pub fn wwpass() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_wwpass"));
    command
        .env_remove("WWPASS_CERT_FILE")
        .env_remove("WWPASS_KEY_FILE")
        .env_remove("WWPASS_SPFE_ADDRESS")
        .env_remove("WWPASS_TIMEOUT");
    command
}
