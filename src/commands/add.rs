//! Add a person.

use super::messages::{format_person, MESSAGE_DUPLICATE_PERSON};
use super::{write_fields, Command, CommandResult};
use crate::error::{CommandError, CommandOutcome};
use crate::models::Person;
use crate::services::Model;
use std::fmt;

/// Adds a person to the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    to_add: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";

    pub fn new(person: Person) -> Self {
        Self { to_add: person }
    }
}

impl Command for AddCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome<CommandResult> {
        if model.has_person(&self.to_add) {
            tracing::warn!(ic = %self.to_add.ic(), "Rejected duplicate person");
            return Err(CommandError::new(MESSAGE_DUPLICATE_PERSON));
        }

        model.add_person(self.to_add.clone())?;
        tracing::info!(ic = %self.to_add.ic(), "Added person");

        Ok(CommandResult::new(format!(
            "New person added: {}",
            format_person(&self.to_add)
        )))
    }
}

impl fmt::Display for AddCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fields::<Self>(f, &[("to_add", &self.to_add)])
    }
}
