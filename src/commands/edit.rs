//! Edit the fields of a displayed person.

use super::messages::{
    format_person, MESSAGE_DUPLICATE_PERSON, MESSAGE_INVALID_PERSON_DISPLAYED_NRIC,
    MESSAGE_NOT_EDITED,
};
use super::{write_fields, Command, CommandResult};
use crate::domain::{Address, EmailAddress, Ic, Name, PhoneNumber, Tag};
use crate::error::{CommandError, CommandOutcome};
use crate::matching::PREDICATE_SHOW_ALL_PERSONS;
use crate::models::Person;
use crate::services::Model;
use std::collections::BTreeSet;
use std::fmt;

/// The fields to change on a person. Unset fields keep their current value;
/// setting `tags` replaces the whole tag set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<PhoneNumber>,
    pub email: Option<EmailAddress>,
    pub address: Option<Address>,
    pub ic: Option<Ic>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_phone(mut self, phone: PhoneNumber) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_ic(mut self, ic: Ic) -> Self {
        self.ic = Some(ic);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    /// Returns true if at least one field is set.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.ic.is_some()
            || self.tags.is_some()
    }

    /// Build the replacement for `person`.
    pub fn apply(&self, person: &Person) -> Person {
        Person::new(
            self.name.clone().unwrap_or_else(|| person.name().clone()),
            self.phone.clone().unwrap_or_else(|| person.phone().clone()),
            self.email.clone().unwrap_or_else(|| person.email().clone()),
            self.address
                .clone()
                .unwrap_or_else(|| person.address().clone()),
            self.ic.clone().unwrap_or_else(|| person.ic().clone()),
            self.tags.clone().unwrap_or_else(|| person.tags().clone()),
        )
    }
}

impl fmt::Display for EditPersonDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = display_opt(&self.name);
        let phone = display_opt(&self.phone);
        let email = display_opt(&self.email);
        let address = display_opt(&self.address);
        let ic = display_opt(&self.ic);
        let tags = match &self.tags {
            Some(tags) => format!("{:?}", tags.iter().map(Tag::as_str).collect::<Vec<_>>()),
            None => "None".to_string(),
        };
        write_fields::<Self>(
            f,
            &[
                ("name", &name),
                ("phone", &phone),
                ("email", &email),
                ("address", &address),
                ("ic", &ic),
                ("tags", &tags),
            ],
        )
    }
}

fn display_opt<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "None".to_string(), ToString::to_string)
}

/// Edits the displayed person with the given IC.
///
/// Like [`DeleteCommand`](super::DeleteCommand), the target must be in the
/// filtered list. After a successful edit the filter is reset to show all
/// persons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    target_ic: Ic,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";

    /// Create an edit command.
    ///
    /// # Errors
    ///
    /// Fails with [`MESSAGE_NOT_EDITED`] if `descriptor` sets no field.
    pub fn new(target_ic: Ic, descriptor: EditPersonDescriptor) -> CommandOutcome<Self> {
        if !descriptor.is_any_field_edited() {
            return Err(CommandError::new(MESSAGE_NOT_EDITED));
        }
        Ok(Self {
            target_ic,
            descriptor,
        })
    }
}

impl Command for EditCommand {
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome<CommandResult> {
        let person_to_edit = model
            .filtered_person_list()
            .iter()
            .find(|p| p.ic() == &self.target_ic)
            .cloned()
            .ok_or_else(|| CommandError::new(MESSAGE_INVALID_PERSON_DISPLAYED_NRIC))?;

        let edited_person = self.descriptor.apply(&person_to_edit);

        if !person_to_edit.is_same_person(&edited_person) && model.has_person(&edited_person) {
            tracing::warn!(ic = %edited_person.ic(), "Edit would duplicate an existing IC");
            return Err(CommandError::new(MESSAGE_DUPLICATE_PERSON));
        }

        model.set_person(&person_to_edit, edited_person.clone())?;
        model.update_filtered_person_list(Box::new(PREDICATE_SHOW_ALL_PERSONS));
        tracing::info!(ic = %self.target_ic, "Edited person");

        Ok(CommandResult::new(format!(
            "Edited Person: {}",
            format_person(&edited_person)
        )))
    }
}

impl fmt::Display for EditCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fields::<Self>(
            f,
            &[
                ("target_ic", &self.target_ic),
                ("edit_person_descriptor", &self.descriptor),
            ],
        )
    }
}
