//! Person names

use std::fmt;

use crate::error::ValidationError;

/// True if `name` is empty, or made only of alphabetic characters once spaces
/// are removed.
///
/// A name of nothing but spaces is rejected.
pub fn validate_name(name: &str) -> bool {
    if name.is_empty() {
        return true;
    }
    let mut letters = name.chars().filter(|c| *c != ' ').peekable();
    letters.peek().is_some() && letters.all(char::is_alphabetic)
}

/// Title-case `value`: the first letter of every run of letters is title
/// case, the rest lower case. Non-letters pass through and start a new run.
///
/// `"math101"` becomes `"Math101"`, `"o'neil"` becomes `"O'Neil"`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for c in value.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                push_titlecase(&mut out, c);
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Push the title-case form of `c`.
///
/// The digraph letters have their own title-case form. A letter whose
/// capital is several characters keeps only the first one upper case, so
/// `ß` becomes `Ss`.
fn push_titlecase(out: &mut String, c: char) {
    let digraph = match c {
        'Ǆ' | 'ǅ' | 'ǆ' => 'ǅ',
        'Ǉ' | 'ǈ' | 'ǉ' => 'ǈ',
        'Ǌ' | 'ǋ' | 'ǌ' => 'ǋ',
        'Ǳ' | 'ǲ' | 'ǳ' => 'ǲ',
        _ => {
            let mut upper = c.to_uppercase();
            if let Some(first) = upper.next() {
                out.push(first);
            }
            for rest in upper {
                out.extend(rest.to_lowercase());
            }
            return;
        }
    };
    out.push(digraph);
}

/// First and last name of a person
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonName {
    first_name: String,
    last_name: String,
}

impl PersonName {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Set the first name, stored title-cased.
    /// On error the previous value is kept.
    pub fn set_first_name(&mut self, value: &str) -> Result<(), ValidationError> {
        if !validate_name(value) {
            return Err(ValidationError::InvalidFirstName);
        }
        self.first_name = title_case(value);
        Ok(())
    }

    /// Set the last name, stored title-cased.
    /// On error the previous value is kept.
    pub fn set_last_name(&mut self, value: &str) -> Result<(), ValidationError> {
        if !validate_name(value) {
            return Err(ValidationError::InvalidLastName);
        }
        self.last_name = title_case(value);
        Ok(())
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Ann Marie"));
        assert!(!validate_name("Ann3"));
        assert!(validate_name(""));
        assert!(!validate_name("   "));
        assert!(!validate_name("O'Neil"));
        assert!(validate_name("Zoë"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("jane"), "Jane");
        assert_eq!(title_case("ann marie"), "Ann Marie");
        assert_eq!(title_case("McDONALD"), "Mcdonald");
        assert_eq!(title_case("math101"), "Math101");
        assert_eq!(title_case("101intro"), "101Intro");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_uses_titlecase_forms() {
        assert_eq!(title_case("ßen"), "Ssen");
        assert_eq!(title_case("straße"), "Straße");
        assert_eq!(title_case("ǆemal"), "ǅemal");
        assert_eq!(title_case("ǄEMAL"), "ǅemal");
        assert_eq!(title_case("élodie"), "Élodie");
    }

    #[test]
    fn test_invalid_first_name_keeps_previous_value() {
        let mut name = PersonName::default();
        assert_eq!(
            name.set_first_name("R2D2"),
            Err(ValidationError::InvalidFirstName)
        );
        assert_eq!(name.first_name(), "");

        name.set_first_name("jane").unwrap();
        assert!(name.set_first_name("j4ne").is_err());
        assert_eq!(name.first_name(), "Jane");
    }

    #[test]
    fn test_invalid_last_name_keeps_previous_value() {
        let mut name = PersonName::default();
        name.set_last_name("van der berg").unwrap();
        assert_eq!(
            name.set_last_name("doe!"),
            Err(ValidationError::InvalidLastName)
        );
        assert_eq!(name.last_name(), "Van Der Berg");
    }

    #[test]
    fn test_display() {
        let mut name = PersonName::default();
        name.set_first_name("jane").unwrap();
        name.set_last_name("doe").unwrap();
        assert_eq!(name.to_string(), "Jane,Doe");
    }

    proptest! {
        #[test]
        fn letters_and_spaces_validate(name in "[a-zA-Z]{1,10}( [a-zA-Z]{1,10}){0,2}") {
            prop_assert!(validate_name(&name));
        }

        #[test]
        fn digits_never_validate(prefix in "[a-z]{0,5}", digit in "[0-9]", suffix in "[a-z]{0,5}") {
            let name = format!("{prefix}{digit}{suffix}");
            prop_assert!(!validate_name(&name));
        }

        // Case mappings are one-to-one on ASCII, so the length is kept there
        #[test]
        fn title_case_is_idempotent(value in "[a-zA-Z0-9 '-]{0,30}") {
            let once = title_case(&value);
            prop_assert_eq!(title_case(&once), once.clone());
            prop_assert_eq!(once.chars().count(), value.chars().count());
        }
    }
}
