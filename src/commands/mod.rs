//! Commands executed against the model.
//!
//! Each command is an immutable value holding only its (already validated)
//! arguments. Side effects happen only in [`Command::execute`], which either
//! returns a [`CommandResult`] for the user or fails with a
//! [`CommandError`](crate::error::CommandError) and leaves the model unchanged.
//!
//! - **Mutating**: [`AddCommand`], [`EditCommand`], [`DeleteCommand`], [`ClearCommand`]
//! - **Filtering**: [`FindCommand`], [`ListCommand`]
//! - **Application**: [`HelpCommand`], [`ExitCommand`]

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod exit;
pub mod find;
pub mod help;
pub mod list;
pub mod messages;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPersonDescriptor};
pub use exit::ExitCommand;
pub use find::FindCommand;
pub use help::HelpCommand;
pub use list::ListCommand;

use crate::error::CommandOutcome;
use crate::services::Model;
use std::fmt;

/// A single state transition requested by the user.
///
/// `Display` renders the command kind and its arguments, e.g.
/// `address_book::commands::delete::DeleteCommand{target_ic=S1234567D}`.
pub trait Command: fmt::Debug + fmt::Display {
    /// Run the command against `model`.
    fn execute(&self, model: &mut dyn Model) -> CommandOutcome<CommandResult>;
}

/// What a successful command reports back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback_to_user: String,
    show_help: bool,
    exit: bool,
}

impl CommandResult {
    /// A plain result carrying only a message.
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            show_help: false,
            exit: false,
        }
    }

    /// A result asking the front end to show help.
    pub fn help(feedback_to_user: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback_to_user)
        }
    }

    /// A result asking the application to exit.
    pub fn exit(feedback_to_user: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback_to_user)
        }
    }

    pub fn feedback_to_user(&self) -> &str {
        &self.feedback_to_user
    }

    pub fn is_show_help(&self) -> bool {
        self.show_help
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.feedback_to_user)
    }
}

/// Writes `<type name>{field=value, ...}`.
pub(crate) fn write_fields<T: ?Sized>(
    f: &mut fmt::Formatter<'_>,
    fields: &[(&str, &dyn fmt::Display)],
) -> fmt::Result {
    write!(f, "{}{{", std::any::type_name::<T>())?;
    for (i, (name, value)) in fields.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}={}", name, value)?;
    }
    f.write_str("}")
}
