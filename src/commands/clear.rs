//! Clear the address book.

use super::{write_fields, Command, CommandResult};
use crate::error::CommandOutcome;
use crate::models::AddressBook;
use crate::services::Model;
use std::fmt;

pub const MESSAGE_SUCCESS: &str = "Address book has been cleared!";

/// Removes every person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
}

impl Command for ClearCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome<CommandResult> {
        model.set_address_book(AddressBook::new());
        tracing::info!("Cleared address book");
        Ok(CommandResult::new(MESSAGE_SUCCESS))
    }
}

impl fmt::Display for ClearCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fields::<Self>(f, &[])
    }
}
