//! Runtime settings
//!
//! The registry has no command-line flags; the binary runs with the defaults
//! and tests point the data file elsewhere.

use std::path::{Path, PathBuf};

use crate::consts::DEFAULT_FILE_NAME;

/// Registry settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Enrollment file read at startup and written on save
    pub data_file: PathBuf,
    /// Render info/warning/prompt text with ANSI colors
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_FILE_NAME),
            color: true,
        }
    }
}

impl Settings {
    /// Use a different enrollment file
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// Enable or disable colored output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}
