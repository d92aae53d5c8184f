//! Menu-driven registration session
//!
//! One `App` owns the registry, the unsaved-changes flag and both ends of the
//! console for the whole session. Handlers return a [`Step`] instead of
//! terminating the process, so a session can run against scripted input.

use std::io::{self, BufRead, Write};

use crate::console::Console;
use crate::error::ValidationError;
use crate::model::Student;
use crate::persistence;
use crate::settings::Settings;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Unsaved registrations were saved on the way out
    Saved,
    /// Unsaved registrations were discarded on request
    Discarded,
    /// Nothing was pending
    Clean,
    /// Input closed before the user chose to exit
    EndOfInput,
}

/// What the loop does after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Menu,
    Exit(Exit),
}

/// Registration session state
pub struct App<R, W: Write> {
    settings: Settings,
    students: Vec<Student>,
    dirty: bool,
    input: R,
    console: Console<W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Start a session with an empty registry
    pub fn new(settings: Settings, input: R, output: W) -> Self {
        let console = Console::new(output, settings.color);
        Self {
            settings,
            students: Vec::new(),
            dirty: false,
            input,
            console,
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// True when registrations were added since the last save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Consume the session and hand back the output writer
    pub fn into_output(self) -> W {
        self.console.into_inner()
    }

    /// Read the enrollment file into the registry.
    ///
    /// Returns `Ok(false)` after reporting a fatal load error; the registry is
    /// left untouched in that case and the session should end.
    pub fn load(&mut self) -> io::Result<bool> {
        let path = self.settings.data_file().to_path_buf();
        self.console
            .info(&format!(">>> Loading data from {}", path.display()))?;

        let outcome = match persistence::load(&path) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                let message = format!(
                    ">>> There was an error while loading {0}. Please check {0} and try again.",
                    path.display()
                );
                self.console.error(&message, &e)?;
                return Ok(false);
            }
        };

        if outcome.created {
            self.console.warn(&format!(
                ">>> {} not found. A new file has been created.",
                path.display()
            ))?;
        } else {
            self.console
                .info(&format!(">>> Loaded {} records.", outcome.students.len()))?;
        }
        for warning in &outcome.warnings {
            self.console
                .warn(&format!(">>> Record {}: {}", warning.index, warning.error))?;
        }

        self.students = outcome.students;
        self.dirty = false;
        Ok(true)
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> io::Result<Exit> {
        loop {
            self.console.menu()?;
            self.console.menu_prompt()?;
            let Some(choice) = self.read_line()? else {
                return Ok(Exit::EndOfInput);
            };
            log::debug!("Menu choice {choice:?}");

            let step = match choice.as_str() {
                "1" => self.register()?,
                "2" => {
                    self.console.table(&self.students)?;
                    Step::Menu
                }
                "3" => {
                    if self.save()? {
                        self.console.table(&self.students)?;
                    }
                    Step::Menu
                }
                "4" => self.exit()?,
                _ => {
                    self.console.warn(">>> Please choose option 1, 2, 3, or 4.")?;
                    Step::Menu
                }
            };

            if let Step::Exit(exit) = step {
                log::info!("Session ended: {exit:?}");
                return Ok(exit);
            }
        }
    }

    /// Next input line without its line ending, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn register(&mut self) -> io::Result<Step> {
        self.console.info(">>> Register a student for a course\n")?;

        let mut registrant = Student::new();
        let complete = self.fill_field(
            &mut registrant,
            "Enter student's first name: ",
            Student::first_name,
            Student::set_first_name,
        )? && self.fill_field(
            &mut registrant,
            "Enter student's last name: ",
            Student::last_name,
            Student::set_last_name,
        )? && self.fill_field(
            &mut registrant,
            "Enter the course name: ",
            Student::course_name,
            Student::set_course_name,
        )?;
        if !complete {
            return Ok(Step::Exit(Exit::EndOfInput));
        }

        self.console.info(&format!(
            ">>> Registered {} {} for {}.",
            registrant.first_name(),
            registrant.last_name(),
            registrant.course_name()
        ))?;
        log::info!("Registered {registrant}");
        self.students.push(registrant);
        self.dirty = true;
        Ok(Step::Menu)
    }

    /// Prompt until the field holds a value. Returns false if input ends first.
    fn fill_field(
        &mut self,
        registrant: &mut Student,
        prompt: &str,
        get: fn(&Student) -> &str,
        set: fn(&mut Student, &str) -> Result<(), ValidationError>,
    ) -> io::Result<bool> {
        while get(registrant).is_empty() {
            self.console.prompt(prompt)?;
            let Some(value) = self.read_line()? else {
                return Ok(false);
            };
            if let Err(e) = set(registrant, &value) {
                log::warn!("Rejected {value:?}: {e}");
                self.console.warn(&format!(">>> {e}\n"))?;
            }
        }
        Ok(true)
    }

    /// Save the registry. Failures are reported and leave the dirty flag set.
    fn save(&mut self) -> io::Result<bool> {
        let path = self.settings.data_file().to_path_buf();
        match persistence::save(&path, &self.students) {
            Ok(()) => {
                self.dirty = false;
                self.console.info(&format!(
                    ">>> Wrote registration data to {}\n",
                    path.display()
                ))?;
                Ok(true)
            }
            Err(e) => {
                log::error!("Failed to save {}: {e}", path.display());
                self.console.error(
                    ">>> There was an error writing the registration data. Is the file read-only?",
                    &e,
                )?;
                Ok(false)
            }
        }
    }

    fn exit(&mut self) -> io::Result<Step> {
        if !self.dirty {
            self.console.info(">>> Have a nice day!\n")?;
            return Ok(Step::Exit(Exit::Clean));
        }

        self.console
            .warn_inline(">>> New registration data not saved. Save it now? (Y/N): ")?;
        let Some(answer) = self.read_line()? else {
            return Ok(Step::Exit(Exit::EndOfInput));
        };

        match answer.as_str() {
            "Y" | "y" => {
                if !self.save()? {
                    return Ok(Step::Menu);
                }
                self.console.info(">>> Have a nice day!\n")?;
                Ok(Step::Exit(Exit::Saved))
            }
            "N" | "n" => {
                self.console.warn(">>> Newly entered data not saved.")?;
                self.console.info(">>> Have a nice day!\n")?;
                Ok(Step::Exit(Exit::Discarded))
            }
            // Any other answer is neither yes nor no: back to the menu with
            // the registry still unsaved, so the menu is shown again rather
            // than leaving the user at a bare prompt.
            _ => Ok(Step::Menu),
        }
    }
}
