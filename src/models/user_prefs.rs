//! User preferences carried alongside the address book.
//!
//! The model layer treats these as opaque: they are stored and handed back,
//! but never compared when checking two models for equality.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the saved address book.
pub const DEFAULT_ADDRESS_BOOK_FILE_PATH: &str = "data/addressbook.json";

/// Window size and position for a graphical front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuiSettings {
    pub window_width: u32,
    pub window_height: u32,

    /// Top-left corner; `None` lets the front end choose
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_coordinates: Option<(i32, i32)>,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: 740,
            window_height: 600,
            window_coordinates: None,
        }
    }
}

/// Preferences for a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPrefs {
    gui_settings: GuiSettings,
    address_book_file_path: PathBuf,
}

impl UserPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite every preference with `other`'s.
    pub fn reset_data(&mut self, other: &UserPrefs) {
        self.clone_from(other);
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        &self.gui_settings
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.gui_settings = gui_settings;
    }

    pub fn address_book_file_path(&self) -> &Path {
        &self.address_book_file_path
    }

    pub fn set_address_book_file_path(&mut self, path: impl Into<PathBuf>) {
        self.address_book_file_path = path.into();
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            address_book_file_path: PathBuf::from(DEFAULT_ADDRESS_BOOK_FILE_PATH),
        }
    }
}
