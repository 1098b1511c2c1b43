//! The model façade.
//!
//! Everything outside the model layer reads and mutates address book state
//! through the [`Model`] trait. Commands take `&mut dyn Model`.

use super::filtered::FilteredPersonList;
use crate::error::AddressBookResult;
use crate::matching::{PersonPredicate, PREDICATE_SHOW_ALL_PERSONS};
use crate::models::{AddressBook, Person, UserPrefs};
use std::fmt;
use std::path::{Path, PathBuf};

/// The API of the model layer.
pub trait Model {
    /// Current user preferences.
    fn user_prefs(&self) -> &UserPrefs;

    /// Replace the user preferences.
    fn set_user_prefs(&mut self, user_prefs: UserPrefs);

    /// Where the address book is saved.
    fn address_book_file_path(&self) -> &Path;

    /// Change where the address book is saved.
    fn set_address_book_file_path(&mut self, path: PathBuf);

    /// The canonical address book, e.g. for snapshotting.
    fn address_book(&self) -> &AddressBook;

    /// Replace the address book contents with `address_book`'s.
    fn set_address_book(&mut self, address_book: AddressBook);

    /// Returns true if a person with the same IC as `person` exists.
    fn has_person(&self, person: &Person) -> bool;

    /// Add `person` and reset the filter so the new entry is shown.
    ///
    /// Fails with `AddressBookError::DuplicatePerson` if the IC is taken.
    fn add_person(&mut self, person: Person) -> AddressBookResult<()>;

    /// Remove `target`, which must exist.
    fn delete_person(&mut self, target: &Person) -> AddressBookResult<Person>;

    /// Replace `target`, which must exist, with `edited`.
    ///
    /// `edited`'s IC must not belong to another person.
    fn set_person(&mut self, target: &Person, edited: Person) -> AddressBookResult<()>;

    /// Persons in address book order for which the active predicate holds.
    fn filtered_person_list(&self) -> FilteredPersonList<'_>;

    /// Replace the active predicate. The previous one is discarded.
    fn update_filtered_person_list(&mut self, predicate: Box<dyn PersonPredicate>);
}

/// Default implementation of [`Model`].
pub struct ModelManager {
    address_book: AddressBook,
    user_prefs: UserPrefs,
    predicate: Box<dyn PersonPredicate>,
}

impl ModelManager {
    /// Create a model over `address_book`, showing all persons.
    pub fn new(address_book: AddressBook, user_prefs: UserPrefs) -> Self {
        tracing::info!(
            persons = address_book.len(),
            path = %user_prefs.address_book_file_path().display(),
            "Initializing model"
        );

        Self {
            address_book,
            user_prefs,
            predicate: Box::new(PREDICATE_SHOW_ALL_PERSONS),
        }
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(AddressBook::new(), UserPrefs::default())
    }
}

impl Model for ModelManager {
    fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    fn set_user_prefs(&mut self, user_prefs: UserPrefs) {
        self.user_prefs.reset_data(&user_prefs);
    }

    fn address_book_file_path(&self) -> &Path {
        self.user_prefs.address_book_file_path()
    }

    fn set_address_book_file_path(&mut self, path: PathBuf) {
        self.user_prefs.set_address_book_file_path(path);
    }

    fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    fn set_address_book(&mut self, address_book: AddressBook) {
        tracing::debug!(persons = address_book.len(), "Replacing address book");
        self.address_book = address_book;
    }

    fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    fn add_person(&mut self, person: Person) -> AddressBookResult<()> {
        tracing::debug!(ic = %person.ic(), "Adding person");
        self.address_book.add_person(person)?;
        self.update_filtered_person_list(Box::new(PREDICATE_SHOW_ALL_PERSONS));
        Ok(())
    }

    fn delete_person(&mut self, target: &Person) -> AddressBookResult<Person> {
        tracing::debug!(ic = %target.ic(), "Deleting person");
        self.address_book.delete_person(target)
    }

    fn set_person(&mut self, target: &Person, edited: Person) -> AddressBookResult<()> {
        tracing::debug!(from = %target.ic(), to = %edited.ic(), "Replacing person");
        self.address_book.set_person(target, edited)
    }

    fn filtered_person_list(&self) -> FilteredPersonList<'_> {
        FilteredPersonList::new(self.address_book.person_list(), self.predicate.as_ref())
    }

    fn update_filtered_person_list(&mut self, predicate: Box<dyn PersonPredicate>) {
        self.predicate = predicate;
    }
}

/// Two models are equal when their address books and filtered lists match.
/// User preferences are not compared.
impl PartialEq for ModelManager {
    fn eq(&self, other: &Self) -> bool {
        self.address_book == other.address_book
            && self.filtered_person_list() == other.filtered_person_list()
    }
}

impl fmt::Debug for ModelManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelManager")
            .field("address_book", &self.address_book)
            .field("filtered_person_list", &self.filtered_person_list())
            .field("user_prefs", &self.user_prefs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, EmailAddress, Ic, Name, PhoneNumber};
    use crate::error::AddressBookError;
    use crate::matching::{IcMatchesPredicate, NameContainsKeywordsPredicate};

    fn person(name: &str, ic: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            PhoneNumber::new("12345").unwrap(),
            EmailAddress::new("x@example.com").unwrap(),
            Address::new("Main Street").unwrap(),
            Ic::new(ic).unwrap(),
            [],
        )
    }

    fn model_with(persons: Vec<Person>) -> ModelManager {
        ModelManager::new(
            AddressBook::from_persons(persons).unwrap(),
            UserPrefs::default(),
        )
    }

    #[test]
    fn test_default_model() {
        let model = ModelManager::default();
        assert_eq!(model.user_prefs(), &UserPrefs::default());
        assert_eq!(model.address_book(), &AddressBook::new());
        assert!(model.filtered_person_list().is_empty());
    }

    #[test]
    fn test_set_address_book_file_path() {
        let mut model = ModelManager::default();
        model.set_address_book_file_path(PathBuf::from("address/book/file/path"));
        assert_eq!(
            model.address_book_file_path(),
            Path::new("address/book/file/path")
        );
    }

    #[test]
    fn test_has_person() {
        let mut model = ModelManager::default();
        let alice = person("Alice", "S1111111A");
        assert!(!model.has_person(&alice));
        model.add_person(alice.clone()).unwrap();
        assert!(model.has_person(&alice));
    }

    #[test]
    fn test_filtered_list_tracks_mutations() {
        let alice = person("Alice", "S1111111A");
        let bob = person("Bob", "S2222222B");
        let mut model = model_with(vec![alice.clone(), bob.clone()]);

        model.delete_person(&alice).unwrap();
        assert_eq!(model.filtered_person_list().to_vec(), vec![bob.clone()]);

        let edited = person("Robert", "S2222222B");
        model.set_person(&bob, edited.clone()).unwrap();
        assert_eq!(model.filtered_person_list().to_vec(), vec![edited]);
    }

    #[test]
    fn test_update_filter_replaces_previous_predicate() {
        let alice = person("Alice", "S1111111A");
        let bob = person("Bob", "S2222222B");
        let mut model = model_with(vec![alice.clone(), bob.clone()]);

        model.update_filtered_person_list(Box::new(NameContainsKeywordsPredicate::new(["alice"])));
        assert_eq!(model.filtered_person_list().to_vec(), vec![alice.clone()]);

        // not intersected with the previous predicate
        model.update_filtered_person_list(Box::new(IcMatchesPredicate::new(bob.ic().clone())));
        assert_eq!(model.filtered_person_list().to_vec(), vec![bob.clone()]);

        model.update_filtered_person_list(Box::new(PREDICATE_SHOW_ALL_PERSONS));
        assert_eq!(
            model.filtered_person_list().to_vec(),
            model.address_book().person_list()
        );
    }

    #[test]
    fn test_add_person_resets_filter() {
        let alice = person("Alice", "S1111111A");
        let mut model = model_with(vec![alice.clone()]);
        model.update_filtered_person_list(Box::new(|_: &Person| false));

        let bob = person("Bob", "S2222222B");
        model.add_person(bob.clone()).unwrap();
        assert_eq!(model.filtered_person_list().to_vec(), vec![alice, bob]);
    }

    #[test]
    fn test_failed_mutation_leaves_model_unchanged() {
        let alice = person("Alice", "S1111111A");
        let mut model = model_with(vec![alice.clone()]);
        let before = model_with(vec![alice.clone()]);

        let err = model.add_person(person("Clone", "S1111111A")).unwrap_err();
        assert!(matches!(err, AddressBookError::DuplicatePerson(_)));

        let err = model.delete_person(&person("Bob", "S2222222B")).unwrap_err();
        assert!(matches!(err, AddressBookError::PersonNotFound(_)));

        assert_eq!(model, before);
    }

    #[test]
    fn test_equality() {
        let alice = person("Alice", "S1111111A");
        let bob = person("Bob", "S2222222B");
        let model = model_with(vec![alice.clone(), bob.clone()]);

        // same values -> equal
        assert_eq!(model, model_with(vec![alice.clone(), bob.clone()]));

        // different address book -> not equal
        assert_ne!(model, model_with(vec![alice.clone()]));

        // different filtered list -> not equal
        let mut filtered = model_with(vec![alice.clone(), bob.clone()]);
        filtered.update_filtered_person_list(Box::new(NameContainsKeywordsPredicate::new(["Alice"])));
        assert_ne!(model, filtered);

        // different user prefs -> still equal
        let mut other_prefs = model_with(vec![alice, bob]);
        other_prefs.set_address_book_file_path(PathBuf::from("different/path"));
        assert_eq!(model, other_prefs);
    }
}
