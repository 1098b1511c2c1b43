//! Delete a person identified by IC.

use super::messages::{format_person, MESSAGE_INVALID_PERSON_DISPLAYED_NRIC};
use super::{write_fields, Command, CommandResult};
use crate::domain::Ic;
use crate::error::{CommandError, CommandOutcome};
use crate::models::Person;
use crate::services::Model;
use std::fmt;

/// Deletes the displayed person with the given IC.
///
/// The lookup is scoped to the *filtered* list: a person hidden by the active
/// filter is reported as not found even though the address book holds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    target_ic: Ic,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";

    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the person identified by the IC \
         used in the displayed person list.\nParameters: IC\nExample: delete S1234567D";

    pub fn new(target_ic: Ic) -> Self {
        Self { target_ic }
    }

    pub fn target_ic(&self) -> &Ic {
        &self.target_ic
    }

    /// Feedback shown after `person` is deleted.
    pub fn success_message(person: &Person) -> String {
        format!("Deleted Person: {}; IC: {}", person.name(), person.ic())
    }
}

impl Command for DeleteCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome<CommandResult> {
        let person_to_delete = model
            .filtered_person_list()
            .iter()
            .find(|p| p.ic() == &self.target_ic)
            .cloned()
            .ok_or_else(|| {
                tracing::warn!(ic = %self.target_ic, "No displayed person to delete");
                CommandError::new(MESSAGE_INVALID_PERSON_DISPLAYED_NRIC)
            })?;

        model.delete_person(&person_to_delete)?;
        tracing::info!(person = %format_person(&person_to_delete), "Deleted person");

        Ok(CommandResult::new(Self::success_message(&person_to_delete)))
    }
}

impl fmt::Display for DeleteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fields::<Self>(f, &[("target_ic", &self.target_ic)])
    }
}
