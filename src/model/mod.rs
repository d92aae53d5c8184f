//! Registration entities
//!
//! Every field is validated on assignment. A rejected value never reaches
//! the field, so an entity only ever holds empty or validated, title-cased
//! text.

pub mod name;
pub mod student;

pub use name::{PersonName, title_case, validate_name};
pub use student::Student;
