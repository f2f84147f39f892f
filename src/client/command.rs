use super::backend::ClientError;

/// One line of input to the terminal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Translate(String),
    From(String),
    To(String),
    Languages,
    Clear,
    Copy,
    Speak,
    Help,
    Quit,
}

impl FormCommand {
    /// Lines starting with `:` are commands; anything else is text to
    /// translate.
    pub fn parse(line: &str) -> Result<Self, ClientError> {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Ok(FormCommand::Translate(line.to_string()));
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        match (name, arg) {
            ("from", Some(code)) => Ok(FormCommand::From(code.to_string())),
            ("to", Some(code)) => Ok(FormCommand::To(code.to_string())),
            ("langs", None) => Ok(FormCommand::Languages),
            ("clear", None) => Ok(FormCommand::Clear),
            ("copy", None) => Ok(FormCommand::Copy),
            ("speak", None) => Ok(FormCommand::Speak),
            ("help", None) => Ok(FormCommand::Help),
            ("quit", None) | ("q", None) => Ok(FormCommand::Quit),
            _ => Err(ClientError::UnknownCommand(command.to_string())),
        }
    }
}

pub const HELP: &str = "\
Type text and press enter to translate it.
  :from <code>   source language (auto to detect)
  :to <code>     target language
  :langs         list languages
  :clear         clear text and result
  :copy          copy the result to the clipboard
  :speak         read the result aloud
  :quit          exit";
