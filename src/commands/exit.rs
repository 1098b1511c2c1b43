//! Terminate the application.

use super::{write_fields, Command, CommandResult};
use crate::error::CommandOutcome;
use crate::services::Model;
use std::fmt;

pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &str = "Exiting Address Book as requested ...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
}

impl Command for ExitCommand {
    fn execute(&self, _model: &mut dyn Model) -> CommandOutcome<CommandResult> {
        Ok(CommandResult::exit(MESSAGE_EXIT_ACKNOWLEDGEMENT))
    }
}

impl fmt::Display for ExitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fields::<Self>(f, &[])
    }
}
