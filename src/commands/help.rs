//! Show usage instructions.

use super::{write_fields, Command, CommandResult};
use crate::error::CommandOutcome;
use crate::services::Model;
use std::fmt;

pub const SHOWING_HELP_MESSAGE: &str = "Opened help window.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
}

impl Command for HelpCommand {
    fn execute(&self, _model: &mut dyn Model) -> CommandOutcome<CommandResult> {
        Ok(CommandResult::help(SHOWING_HELP_MESSAGE))
    }
}

impl fmt::Display for HelpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fields::<Self>(f, &[])
    }
}
