//! Show every person.

use super::{write_fields, Command, CommandResult};
use crate::error::CommandOutcome;
use crate::matching::PREDICATE_SHOW_ALL_PERSONS;
use crate::services::Model;
use std::fmt;

pub const MESSAGE_SUCCESS: &str = "Listed all persons";

/// Resets the filter so that all persons are displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
}

impl Command for ListCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome<CommandResult> {
        model.update_filtered_person_list(Box::new(PREDICATE_SHOW_ALL_PERSONS));
        Ok(CommandResult::new(MESSAGE_SUCCESS))
    }
}

impl fmt::Display for ListCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fields::<Self>(f, &[])
    }
}
