//! Shared fixtures for integration tests.
//!
//! Provides typical persons, a builder for custom persons, and assertion
//! helpers for command execution.

#![allow(dead_code)]

pub mod builders;

use address_book::commands::{Command, CommandResult};
use address_book::domain::Ic;
use address_book::matching::IcMatchesPredicate;
use address_book::{AddressBook, Model, ModelManager, Person, UserPrefs};
pub use builders::PersonBuilder;

pub fn alice() -> Person {
    PersonBuilder::new()
        .name("Alice Pauline")
        .address("123, Jurong West Ave 6, #08-111")
        .email("alice@example.com")
        .phone("94351253")
        .ic("S1111111A")
        .tags(&["friends"])
        .build()
}

pub fn benson() -> Person {
    PersonBuilder::new()
        .name("Benson Meier")
        .address("311, Clementi Ave 2, #02-25")
        .email("johnd@example.com")
        .phone("98765432")
        .ic("F2234567X")
        .tags(&["owesMoney", "friends"])
        .build()
}

pub fn carl() -> Person {
    PersonBuilder::new()
        .name("Carl Kurz")
        .phone("95352563")
        .email("heinz@example.com")
        .address("wall street")
        .ic("S3333333C")
        .build()
}

pub fn daniel() -> Person {
    PersonBuilder::new()
        .name("Daniel Meier")
        .phone("87652533")
        .email("cornelia@example.com")
        .address("10th street")
        .ic("T4444444D")
        .tags(&["friends"])
        .build()
}

pub fn elle() -> Person {
    PersonBuilder::new()
        .name("Elle Meyer")
        .phone("94822224")
        .email("werner@example.com")
        .address("michegan ave")
        .ic("G5555555E")
        .build()
}

/// Not in the typical address book.
pub fn hoon() -> Person {
    PersonBuilder::new()
        .name("Hoon Meier")
        .phone("84824245")
        .email("stefan@example.com")
        .address("little india")
        .ic("S8888888H")
        .build()
}

pub fn typical_persons() -> Vec<Person> {
    vec![alice(), benson(), carl(), daniel(), elle()]
}

pub fn typical_address_book() -> AddressBook {
    AddressBook::from_persons(typical_persons()).expect("typical persons are unique")
}

pub fn typical_model() -> ModelManager {
    ModelManager::new(typical_address_book(), UserPrefs::default())
}

pub fn ic(raw: &str) -> Ic {
    Ic::new(raw).expect("fixture IC is valid")
}

/// Restrict `model`'s filtered list to the person with `ic`.
pub fn show_person_with_ic(model: &mut dyn Model, ic: &Ic) {
    model.update_filtered_person_list(Box::new(IcMatchesPredicate::new(ic.clone())));
    assert_eq!(model.filtered_person_list().len(), 1);
}

/// Restrict `model`'s filtered list to nobody.
pub fn show_no_person(model: &mut dyn Model) {
    model.update_filtered_person_list(Box::new(|_: &Person| false));
    assert!(model.filtered_person_list().is_empty());
}

/// Execute `command` and check it succeeds with `expected_result`, leaving
/// `actual_model` equal to `expected_model`.
pub fn assert_command_success(
    command: &dyn Command,
    actual_model: &mut ModelManager,
    expected_result: CommandResult,
    expected_model: &ModelManager,
) {
    match command.execute(actual_model) {
        Ok(result) => {
            assert_eq!(result, expected_result);
            assert_eq!(actual_model, expected_model);
        }
        Err(e) => panic!("Command {} should not fail: {}", command, e),
    }
}

/// Like [`assert_command_success`], for a plain feedback message.
pub fn assert_command_success_message(
    command: &dyn Command,
    actual_model: &mut ModelManager,
    expected_message: &str,
    expected_model: &ModelManager,
) {
    assert_command_success(
        command,
        actual_model,
        CommandResult::new(expected_message),
        expected_model,
    );
}

/// Execute `command` and check it fails with `expected_message`, leaving the
/// address book and filtered list unchanged.
pub fn assert_command_failure(
    command: &dyn Command,
    actual_model: &mut ModelManager,
    expected_message: &str,
) {
    let expected_address_book = actual_model.address_book().clone();
    let expected_filtered = actual_model.filtered_person_list().to_vec();

    match command.execute(actual_model) {
        Ok(result) => panic!("Command {} should fail, got: {}", command, result),
        Err(e) => assert_eq!(e.message(), expected_message),
    }

    assert_eq!(actual_model.address_book(), &expected_address_book);
    assert_eq!(actual_model.filtered_person_list().to_vec(), expected_filtered);
}
