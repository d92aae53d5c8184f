//! Course Registry - console course registration backed by a JSON file
//!
//! Core modules:
//! - `model`: Validated person names and student registrations
//! - `persistence`: Load/save of the enrollment file
//! - `console`: Styled console output and the registration table
//! - `app`: Menu-driven interaction loop with the unsaved-changes guard
//! - `settings`: Runtime configuration

pub mod app;
pub mod console;
pub mod error;
pub mod model;
pub mod persistence;
pub mod settings;

pub use app::{App, Exit};
pub use error::{LoadError, SaveError, ValidationError};
pub use model::{PersonName, Student, title_case, validate_name};
pub use persistence::{LoadOutcome, load, save};
pub use settings::Settings;

/// Registry configuration constants
pub mod consts {
    /// Data file used when no other path is configured
    pub const DEFAULT_FILE_NAME: &str = "Enrollments.json";

    /// Longest accepted course name, in characters
    pub const MAX_COURSE_NAME_LEN: usize = 25;

    /// Record keys in the enrollment file
    pub const KEY_FIRST_NAME: &str = "FirstName";
    pub const KEY_LAST_NAME: &str = "LastName";
    pub const KEY_COURSE_NAME: &str = "CourseName";
    pub const RECORD_KEYS: [&str; 3] = [KEY_FIRST_NAME, KEY_LAST_NAME, KEY_COURSE_NAME];

    /// Table column widths
    pub const FIRST_NAME_WIDTH: usize = 20;
    pub const LAST_NAME_WIDTH: usize = 20;
    pub const COURSE_NAME_WIDTH: usize = 25;

    /// Indent used when pretty-printing the enrollment file
    pub const JSON_INDENT: &[u8] = b"    ";
}
