//! Console output
//!
//! Informational text is green, warnings and errors red, the menu prompt
//! yellow. With color off the same text is written without escapes.

use std::error::Error;
use std::io::{self, Write};

use crate::consts::{COURSE_NAME_WIDTH, FIRST_NAME_WIDTH, LAST_NAME_WIDTH};
use crate::model::Student;

pub const MENU: &str = "
------ Course Registration Program ------
  Select from the following menu:
    1. Register a Student for a Course.
    2. Show current data.
    3. Save data to a file.
    4. Exit the program.
-----------------------------------------
";

pub const MENU_PROMPT: &str = "Enter your choice: ";

const TABLE_HEADER: &str = "First Name          Last Name           Course Name         ";
const TABLE_RULE: &str = "-----------------------------------------------------------------";

const INFO: &str = "\x1b[0;32;49m";
const WARN: &str = "\x1b[0;31;49m";
const PROMPT: &str = "\x1b[1;33;49m";
const RESET_FG: &str = "\x1b[39m";
const RESET_ALL: &str = "\x1b[0;39m";

/// Styled writer for everything the user sees
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Consume the console and hand back the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn styled(&mut self, style: &str, reset: &str, text: &str, newline: bool) -> io::Result<()> {
        if self.color {
            write!(self.out, "{style}{text}{reset}")?;
        } else {
            write!(self.out, "{text}")?;
        }
        if newline {
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    pub fn info(&mut self, text: &str) -> io::Result<()> {
        self.styled(INFO, RESET_FG, text, true)
    }

    pub fn warn(&mut self, text: &str) -> io::Result<()> {
        self.styled(WARN, RESET_FG, text, true)
    }

    /// Warning without a trailing newline, for inline questions
    pub fn warn_inline(&mut self, text: &str) -> io::Result<()> {
        self.styled(WARN, RESET_FG, text, false)
    }

    /// Unstyled text
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Unstyled prompt, cursor left on the same line
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    pub fn menu(&mut self) -> io::Result<()> {
        self.line(MENU)
    }

    pub fn menu_prompt(&mut self) -> io::Result<()> {
        self.styled(PROMPT, RESET_ALL, MENU_PROMPT, false)
    }

    /// Report a failure: our explanation first, then the underlying
    /// technical error if there is one.
    pub fn error(&mut self, message: &str, err: &dyn Error) -> io::Result<()> {
        self.warn(message)?;
        self.warn(&format!(">>> {err}"))?;
        if let Some(source) = err.source() {
            self.warn(&format!(">>> Technical error: {source}"))?;
        }
        Ok(())
    }

    /// Print the registry as a fixed-width table
    pub fn table(&mut self, students: &[Student]) -> io::Result<()> {
        self.info(">>> The current data is:\n")?;
        self.info(TABLE_HEADER)?;
        self.info(TABLE_RULE)?;
        for student in students {
            self.line(&table_row(student))?;
        }
        self.info(TABLE_RULE)
    }
}

/// One table row: every column cut to its width, then padded to it
pub fn table_row(student: &Student) -> String {
    format!(
        "{:<fw$.fw$}{:<lw$.lw$}{:<cw$.cw$}",
        student.first_name(),
        student.last_name(),
        student.course_name(),
        fw = FIRST_NAME_WIDTH,
        lw = LAST_NAME_WIDTH,
        cw = COURSE_NAME_WIDTH,
    )
}
