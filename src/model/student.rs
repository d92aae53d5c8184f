//! Student registrations

use std::fmt;

use crate::consts::MAX_COURSE_NAME_LEN;
use crate::error::ValidationError;
use crate::model::name::{PersonName, title_case};

/// A student registered for one course
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Student {
    name: PersonName,
    course_name: String,
}

impl Student {
    /// Create an empty registrant
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a student from raw field values.
    ///
    /// Every field is assigned through its setter, so a rejected value leaves
    /// that field empty. The rejections are returned alongside the student.
    pub fn from_fields(
        first_name: &str,
        last_name: &str,
        course_name: &str,
    ) -> (Self, Vec<ValidationError>) {
        let mut student = Self::new();
        let rejected = [
            student.set_first_name(first_name),
            student.set_last_name(last_name),
            student.set_course_name(course_name),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();
        (student, rejected)
    }

    pub fn first_name(&self) -> &str {
        self.name.first_name()
    }

    pub fn last_name(&self) -> &str {
        self.name.last_name()
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.name.set_first_name(value)
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.name.set_last_name(value)
    }

    /// Set the course name, stored title-cased.
    /// Longer than [`MAX_COURSE_NAME_LEN`] characters is rejected and the
    /// previous value kept.
    pub fn set_course_name(&mut self, value: &str) -> Result<(), ValidationError> {
        let len = value.chars().count();
        if len > MAX_COURSE_NAME_LEN {
            return Err(ValidationError::CourseNameTooLong {
                len,
                max: MAX_COURSE_NAME_LEN,
            });
        }
        self.course_name = title_case(value);
        Ok(())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.name, self.course_name)
    }
}
