//! Person model representing one contact in the address book.

use crate::domain::{Address, EmailAddress, Ic, Name, PhoneNumber, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A contact in the address book.
///
/// A `Person` is immutable once built: "editing" a person means constructing a
/// replacement and substituting it in the address book. There are two ways to
/// compare persons:
///
/// - [`Person::is_same_person`] compares identity (the IC) only, and is what
///   the address book uses to enforce uniqueness.
/// - `==` compares every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: PhoneNumber,
    email: EmailAddress,
    address: Address,
    ic: Ic,

    /// Kept sorted so equality and display are independent of insertion order
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    tags: BTreeSet<Tag>,
}

impl Person {
    /// Create a new person. Every field is an already-validated value object.
    pub fn new(
        name: Name,
        phone: PhoneNumber,
        email: EmailAddress,
        address: Address,
        ic: Ic,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            ic,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn ic(&self) -> &Ic {
        &self.ic
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns true if both persons have the same IC.
    ///
    /// This is a weaker notion than `==`: two records with the same IC but
    /// different names are the same person.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.ic == other.ic
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; IC: {}; Tags: ",
            self.name, self.phone, self.email, self.address, self.ic
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}
