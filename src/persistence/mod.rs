//! Enrollment file persistence
//!
//! The file is a JSON array of records, each an object with the string keys
//! `FirstName`, `LastName` and `CourseName`. It is read whole at startup and
//! rewritten whole on save.

use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::consts::{JSON_INDENT, RECORD_KEYS};
use crate::error::{LoadError, SaveError, ValidationError};
use crate::model::Student;

/// A field value in the file that failed entity validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordWarning {
    /// 1-based record index
    pub index: usize,
    pub error: ValidationError,
}

/// Result of reading the enrollment file
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Students in file order
    pub students: Vec<Student>,
    /// The file did not exist and an empty one was created
    pub created: bool,
    /// Rejected field values; those fields were left empty
    pub warnings: Vec<RecordWarning>,
}

/// On-disk shape of one registration
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Record<'a> {
    first_name: &'a str,
    last_name: &'a str,
    course_name: &'a str,
}

impl<'a> From<&'a Student> for Record<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            first_name: student.first_name(),
            last_name: student.last_name(),
            course_name: student.course_name(),
        }
    }
}

/// Load every registration from `path`.
///
/// A missing file is created empty and yields an empty registry. Any other
/// failure rejects the whole file.
pub fn load(path: &Path) -> Result<LoadOutcome, LoadError> {
    log::info!("Loading registrations from {}", path.display());

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("{} not found, creating an empty file", path.display());
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(LoadError::Io)?;
            return Ok(LoadOutcome {
                created: true,
                ..LoadOutcome::default()
            });
        }
        Err(e) => return Err(LoadError::Io(e)),
    };

    let outcome = parse_registrations(&content)?;
    log::info!("Loaded {} records", outcome.students.len());
    Ok(outcome)
}

/// Parse the contents of an enrollment file.
///
/// Blank content is an empty registry: that is what the first run leaves
/// behind when nothing is saved.
pub fn parse_registrations(content: &str) -> Result<LoadOutcome, LoadError> {
    if content.trim().is_empty() {
        return Ok(LoadOutcome::default());
    }

    let value: Value = serde_json::from_str(content).map_err(LoadError::Parse)?;
    let Value::Array(records) = value else {
        return Err(LoadError::NotAnArray);
    };

    let mut outcome = LoadOutcome::default();
    for (i, record) in records.iter().enumerate() {
        let index = i + 1;
        let Value::Object(fields) = record else {
            return Err(LoadError::NotAnObject { index });
        };
        let [first, last, course] = record_fields(index, fields)?;

        let (student, rejected) = Student::from_fields(first, last, course);
        for error in rejected {
            log::warn!("Record {index}: {error}");
            outcome.warnings.push(RecordWarning { index, error });
        }
        outcome.students.push(student);
    }
    Ok(outcome)
}

/// Pull the three record keys out of `fields`, in key order.
fn record_fields(index: usize, fields: &Map<String, Value>) -> Result<[&str; 3], LoadError> {
    if let Some(&key) = RECORD_KEYS.iter().find(|key| !fields.contains_key(**key)) {
        return Err(LoadError::MissingKey { index, key });
    }

    let mut values = [""; 3];
    for (slot, key) in values.iter_mut().zip(RECORD_KEYS) {
        *slot = fields
            .get(key)
            .and_then(Value::as_str)
            .ok_or(LoadError::InvalidValue { index, key })?;
    }
    Ok(values)
}

/// Encode registrations as a pretty-printed JSON array.
fn to_json(students: &[Student]) -> Result<Vec<u8>, serde_json::Error> {
    let records: Vec<Record<'_>> = students.iter().map(Record::from).collect();

    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    records.serialize(&mut ser)?;
    Ok(out)
}

/// Write every registration to `path`, replacing its contents.
///
/// A symlinked `path` is written through to its target. The data goes to a
/// temporary file beside the target that is renamed over it, and only after
/// the target has been opened for writing, so a read-only file fails the save
/// the same way a direct write would. On error the previous file is left as
/// it was.
pub fn save(path: &Path, students: &[Student]) -> Result<(), SaveError> {
    let json = to_json(students)?;
    let target = resolve_target(path)?;

    match OpenOptions::new().write(true).open(&target) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&json)?;
    tmp.as_file().sync_all()?;
    if let Ok(meta) = fs::metadata(&target) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.persist(&target)?;

    log::info!("Wrote {} records to {}", students.len(), target.display());
    Ok(())
}

/// The file a save to `path` lands in: symlinks resolved, or `path` itself
/// when nothing exists there yet.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(target) => Ok(target),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}
