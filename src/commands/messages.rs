//! User-facing messages shared across commands.

use crate::models::Person;

pub const MESSAGE_INVALID_PERSON_DISPLAYED_NRIC: &str = "The person NRIC provided is invalid";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// "N persons listed!" summary shown after filtering.
pub fn persons_listed_overview(count: usize) -> String {
    format!("{} persons listed!", count)
}

/// A person rendered for display in a feedback message.
pub fn format_person(person: &Person) -> String {
    person.to_string()
}
