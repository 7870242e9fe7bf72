use std::io::Write;

use clap::ValueEnum;

use crate::command::Cli;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::upper_case_acronyms)]
pub(crate) enum Output {
    JSON,
    YAML,
    None,
}

pub enum CommandOutput {
    Plain(String),
    /// Raw payload, written to stdout without any decoration.
    Bytes(Vec<u8>),
    Object(Box<dyn erased_serde::Serialize>),
}
pub type CommandResult = color_eyre::eyre::Result<CommandOutput>;

impl From<&str> for CommandOutput {
    fn from(text: &str) -> Self {
        CommandOutput::Plain(text.to_owned())
    }
}
impl From<String> for CommandOutput {
    fn from(text: String) -> Self {
        CommandOutput::Plain(text)
    }
}
impl From<Vec<u8>> for CommandOutput {
    fn from(data: Vec<u8>) -> Self {
        CommandOutput::Bytes(data)
    }
}
impl From<()> for CommandOutput {
    fn from(_: ()) -> Self {
        CommandOutput::Plain(String::new())
    }
}

impl CommandOutput {
    pub fn object(value: impl serde::Serialize + 'static) -> Self {
        CommandOutput::Object(Box::new(value))
    }
}

pub struct RenderConfig {
    pub output: Output,
}

impl RenderConfig {
    pub fn new(cli: &Cli) -> Self {
        Self { output: cli.output }
    }

    pub fn render_result(&self, result: CommandResult) -> color_eyre::eyre::Result<()> {
        // Errors are passed through to the caller, and rendered by color-eyre
        let output = result?;

        if self.output == Output::None {
            return Ok(());
        }

        let mut stdout = std::io::stdout().lock();
        self.write_output(output, &mut stdout)?;
        stdout.flush()?;
        Ok(())
    }

    fn write_output(
        &self,
        output: CommandOutput,
        writer: &mut impl Write,
    ) -> color_eyre::eyre::Result<()> {
        match output {
            // Empty results (writes, locks) print nothing
            CommandOutput::Plain(text) if text.is_empty() => {}
            CommandOutput::Plain(text) => writeln!(writer, "{}", text)?,
            CommandOutput::Bytes(data) => writer.write_all(&data)?,

            // For objects, we serialize them based on the output format
            CommandOutput::Object(obj) => match self.output {
                Output::JSON => {
                    let mut json = serde_json::to_string_pretty(&*obj)?;
                    // Yaml serialization adds a newline at the end, so we do the same here for
                    // consistency
                    json.push('\n');
                    writer.write_all(json.as_bytes())?;
                }
                Output::YAML => {
                    let yaml = serde_yaml::to_string(&*obj)?;
                    writer.write_all(yaml.as_bytes())?;
                }
                Output::None => {}
            },
        }
        Ok(())
    }
}
