//! Filter persons by name keywords.

use super::messages::persons_listed_overview;
use super::{write_fields, Command, CommandResult};
use crate::error::CommandOutcome;
use crate::matching::NameContainsKeywordsPredicate;
use crate::services::Model;
use std::fmt;

/// Shows the persons whose name contains any of the keywords (case-insensitive,
/// whole words).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: NameContainsKeywordsPredicate,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";

    pub fn new(predicate: NameContainsKeywordsPredicate) -> Self {
        Self { predicate }
    }
}

impl Command for FindCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome<CommandResult> {
        model.update_filtered_person_list(Box::new(self.predicate.clone()));
        let count = model.filtered_person_list().len();
        tracing::debug!(keywords = ?self.predicate.keywords(), count, "Filtered persons");
        Ok(CommandResult::new(persons_listed_overview(count)))
    }
}

impl fmt::Display for FindCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fields::<Self>(f, &[("predicate", &self.predicate)])
    }
}
