use crate::error::CoreError;
use std::fmt;

/// A contact name, trimmed and title-cased so that lookups are
/// case-insensitive by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let normalized = title_case(raw.trim());
        if normalized.is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Uppercases the first letter of every alphabetic run and lowercases the
/// rest. Any non-alphabetic character starts a new word, so `o'neil`
/// becomes `O'Neil`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{title_case, ContactName};
    use crate::error::CoreError;

    #[test]
    fn title_case_basic() {
        assert_eq!(title_case("alice"), "Alice");
        assert_eq!(title_case("ALICE SMITH"), "Alice Smith");
    }

    #[test]
    fn title_case_breaks_on_punctuation_and_digits() {
        assert_eq!(title_case("mary-jane o'neil"), "Mary-Jane O'Neil");
        assert_eq!(title_case("agent 7th"), "Agent 7Th");
    }

    #[test]
    fn contact_name_trims() {
        let name = ContactName::new("  bob  ").unwrap();
        assert_eq!(name.as_str(), "Bob");
    }

    #[test]
    fn contact_name_rejects_blank() {
        assert_eq!(ContactName::new("   "), Err(CoreError::EmptyName));
    }
}
