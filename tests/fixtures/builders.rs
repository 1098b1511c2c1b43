//! Builder for test persons.

use address_book::domain::{Address, EmailAddress, Ic, Name, PhoneNumber, Tag};
use address_book::Person;

/// Builds a [`Person`] from string fields, starting from valid defaults.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    name: String,
    phone: String,
    email: String,
    address: String,
    ic: String,
    tags: Vec<String>,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self {
            name: "Amy Bee".to_string(),
            phone: "85355255".to_string(),
            email: "amy@gmail.com".to_string(),
            address: "123, Jurong West Ave 6, #08-111".to_string(),
            ic: "S9999999Z".to_string(),
            tags: Vec::new(),
        }
    }

    /// Start from an existing person's fields.
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name().to_string(),
            phone: person.phone().to_string(),
            email: person.email().to_string(),
            address: person.address().to_string(),
            ic: person.ic().to_string(),
            tags: person.tags().iter().map(ToString::to_string).collect(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn ic(mut self, ic: &str) -> Self {
        self.ic = ic.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn build(self) -> Person {
        Person::new(
            Name::new(self.name).expect("valid name"),
            PhoneNumber::new(self.phone).expect("valid phone"),
            EmailAddress::new(self.email).expect("valid email"),
            Address::new(self.address).expect("valid address"),
            Ic::new(self.ic).expect("valid IC"),
            self.tags
                .into_iter()
                .map(|t| Tag::new(t).expect("valid tag")),
        )
    }
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}
