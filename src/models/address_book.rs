//! The canonical collection of persons.
//!
//! # Invariants
//! - No two persons share an IC.
//! - Insertion order is preserved; `set_person` replaces in place.
//! - Every mutation either fully succeeds or leaves the book untouched.

use super::Person;
use crate::domain::Ic;
use crate::error::{AddressBookError, AddressBookResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// An ordered collection of persons, unique by IC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SerializedAddressBook")]
pub struct AddressBook {
    persons: Vec<Person>,
}

/// Unchecked shape used for deserialization; converted through
/// [`AddressBook::from_persons`] so loaded data keeps the uniqueness invariant.
#[derive(Deserialize)]
struct SerializedAddressBook {
    #[serde(default)]
    persons: Vec<Person>,
}

impl TryFrom<SerializedAddressBook> for AddressBook {
    type Error = AddressBookError;

    fn try_from(data: SerializedAddressBook) -> Result<Self, Self::Error> {
        Self::from_persons(data.persons)
    }
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an address book from a previously loaded collection.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::DuplicatePerson` if two persons share an IC.
    pub fn from_persons(persons: Vec<Person>) -> AddressBookResult<Self> {
        let mut book = Self::new();
        book.set_persons(persons)?;
        Ok(book)
    }

    /// Replace the whole contents with `persons`.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::DuplicatePerson` if two persons share an IC;
    /// the current contents are kept in that case.
    pub fn set_persons(&mut self, persons: Vec<Person>) -> AddressBookResult<()> {
        let mut seen = HashSet::with_capacity(persons.len());
        for person in &persons {
            if !seen.insert(person.ic()) {
                return Err(AddressBookError::DuplicatePerson(person.ic().clone()));
            }
        }
        self.persons = persons;
        Ok(())
    }

    /// Replace the contents with a copy of `other`'s.
    pub fn reset_data(&mut self, other: &AddressBook) {
        self.persons = other.persons.clone();
    }

    /// Returns true if a person with the same identity as `person` exists.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// Look up a person by IC.
    pub fn find_by_ic(&self, ic: &Ic) -> Option<&Person> {
        self.persons.iter().find(|p| p.ic() == ic)
    }

    /// Append a person.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::DuplicatePerson` if the IC is already in use.
    pub fn add_person(&mut self, person: Person) -> AddressBookResult<()> {
        if self.has_person(&person) {
            return Err(AddressBookError::DuplicatePerson(person.ic().clone()));
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replace `target` with `edited`, keeping its position.
    ///
    /// `edited` may keep `target`'s IC or take a new one that no other person
    /// holds.
    ///
    /// # Errors
    ///
    /// - `AddressBookError::PersonNotFound` if `target` is not in the book
    /// - `AddressBookError::DuplicatePerson` if `edited`'s IC belongs to a
    ///   different person
    pub fn set_person(&mut self, target: &Person, edited: Person) -> AddressBookResult<()> {
        let index = self
            .position_of(target)
            .ok_or_else(|| AddressBookError::PersonNotFound(target.ic().clone()))?;

        if !target.is_same_person(&edited) && self.has_person(&edited) {
            return Err(AddressBookError::DuplicatePerson(edited.ic().clone()));
        }

        self.persons[index] = edited;
        Ok(())
    }

    /// Remove the person with `person`'s identity and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::PersonNotFound` if no such person exists.
    pub fn delete_person(&mut self, person: &Person) -> AddressBookResult<Person> {
        let index = self
            .position_of(person)
            .ok_or_else(|| AddressBookError::PersonNotFound(person.ic().clone()))?;
        Ok(self.persons.remove(index))
    }

    /// Read-only view of the persons, in insertion order.
    pub fn person_list(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    fn position_of(&self, person: &Person) -> Option<usize> {
        self.persons.iter().position(|p| p.is_same_person(person))
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} persons", self.persons.len())
    }
}
