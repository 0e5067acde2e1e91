use crate::domain::{Contact, ContactName, PhoneNumber};
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub phone_case_sensitive: bool,
}

/// Insertion-ordered contacts keyed by name. Names and phone numbers are
/// both unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, name: &ContactName) -> Option<&Contact> {
        self.contacts.iter().find(|contact| &contact.name == name)
    }

    pub fn contains_name(&self, name: &ContactName) -> bool {
        self.get(name).is_some()
    }

    pub fn contains_phone(&self, phone: &PhoneNumber) -> bool {
        self.contacts.iter().any(|contact| &contact.phone == phone)
    }

    /// Normalizes `raw` and checks it is free to use for a new contact.
    pub fn available_name(&self, raw: &str) -> Result<ContactName, CoreError> {
        let name = ContactName::new(raw)?;
        if self.contains_name(&name) {
            return Err(CoreError::DuplicateName(name.as_str().to_string()));
        }
        Ok(name)
    }

    pub fn available_phone(&self, raw: &str) -> Result<PhoneNumber, CoreError> {
        let phone = PhoneNumber::new(raw)?;
        if self.contains_phone(&phone) {
            return Err(CoreError::DuplicatePhone(phone.as_str().to_string()));
        }
        Ok(phone)
    }

    pub fn insert(&mut self, contact: Contact) -> Result<(), CoreError> {
        if self.contains_name(&contact.name) {
            return Err(CoreError::DuplicateName(contact.name.as_str().to_string()));
        }
        if self.contains_phone(&contact.phone) {
            return Err(CoreError::DuplicatePhone(contact.phone.as_str().to_string()));
        }
        self.contacts.push(contact);
        Ok(())
    }

    /// Swaps the entry named `old_name` for `contact` in the same slot and
    /// returns the previous entry. Uniqueness is checked against every other
    /// entry.
    pub fn replace(
        &mut self,
        old_name: &ContactName,
        contact: Contact,
    ) -> Result<Contact, CoreError> {
        let index = self
            .position(old_name)
            .ok_or_else(|| CoreError::NotFound(old_name.as_str().to_string()))?;

        for (other_index, other) in self.contacts.iter().enumerate() {
            if other_index == index {
                continue;
            }
            if other.name == contact.name {
                return Err(CoreError::DuplicateName(contact.name.as_str().to_string()));
            }
            if other.phone == contact.phone {
                return Err(CoreError::DuplicatePhone(contact.phone.as_str().to_string()));
            }
        }

        Ok(std::mem::replace(&mut self.contacts[index], contact))
    }

    pub fn remove(&mut self, name: &ContactName) -> Result<Contact, CoreError> {
        let index = self
            .position(name)
            .ok_or_else(|| CoreError::NotFound(name.as_str().to_string()))?;
        Ok(self.contacts.remove(index))
    }

    /// Drops every entry and returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.contacts.len();
        self.contacts.clear();
        removed
    }

    pub fn search(&self, keyword: &str, options: SearchOptions) -> FoundSet {
        let keyword = keyword.trim().to_lowercase();
        let entries = self
            .contacts
            .iter()
            .filter(|contact| {
                if contact.name.as_str().to_lowercase().contains(&keyword) {
                    return true;
                }
                if options.phone_case_sensitive {
                    contact.phone.as_str().contains(&keyword)
                } else {
                    contact.phone.as_str().to_lowercase().contains(&keyword)
                }
            })
            .cloned()
            .collect();
        FoundSet { entries }
    }

    fn position(&self, name: &ContactName) -> Option<usize> {
        self.contacts.iter().position(|contact| &contact.name == name)
    }
}

/// Snapshot of search matches in book order. Selection by position is
/// 1-based, matching the printed enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundSet {
    entries: Vec<Contact>,
}

impl FoundSet {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.entries
    }

    pub fn get(&self, name: &ContactName) -> Option<&Contact> {
        self.entries.iter().find(|contact| &contact.name == name)
    }

    pub fn nth(&self, index: usize) -> Option<&Contact> {
        self.entries.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactBook, SearchOptions};
    use crate::domain::{Contact, ContactName, PhoneNumber};
    use crate::error::CoreError;

    fn contact(name: &str, phone: &str) -> Contact {
        Contact::new(ContactName::new(name).unwrap(), PhoneNumber::new(phone).unwrap())
    }

    fn names(book: &ContactBook) -> Vec<&str> {
        book.contacts().iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn available_name_is_case_insensitive() {
        let mut book = ContactBook::new();
        book.insert(contact("Alice", "123")).unwrap();
        assert_eq!(
            book.available_name("  aLiCe "),
            Err(CoreError::DuplicateName("Alice".to_string()))
        );
        assert_eq!(book.available_name("").unwrap_err(), CoreError::EmptyName);
    }

    #[test]
    fn available_phone_is_exact() {
        let mut book = ContactBook::new();
        book.insert(contact("Alice", "555-0100")).unwrap();
        assert!(book.available_phone(" 555-0100 ").is_err());
        assert!(book.available_phone("5550100").is_ok());
    }

    #[test]
    fn insert_rejects_duplicates_without_mutation() {
        let mut book = ContactBook::new();
        book.insert(contact("Alice", "123")).unwrap();
        let before = book.clone();
        assert!(book.insert(contact("alice", "456")).is_err());
        assert!(book.insert(contact("Bob", "123")).is_err());
        assert_eq!(book, before);
    }

    #[test]
    fn replace_keeps_slot() {
        let mut book = ContactBook::new();
        book.insert(contact("Alice", "1")).unwrap();
        book.insert(contact("Bob", "2")).unwrap();
        book.insert(contact("Carol", "3")).unwrap();

        let previous = book
            .replace(&ContactName::new("bob").unwrap(), contact("Robert", "22"))
            .unwrap();
        assert_eq!(previous, contact("Bob", "2"));
        assert_eq!(names(&book), vec!["Alice", "Robert", "Carol"]);
        assert_eq!(book.contacts()[1].phone.as_str(), "22");
    }

    #[test]
    fn replace_allows_unchanged_fields() {
        let mut book = ContactBook::new();
        book.insert(contact("Alice", "1")).unwrap();
        book.replace(&ContactName::new("Alice").unwrap(), contact("Alice", "1"))
            .unwrap();
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn replace_rejects_collisions_with_other_entries() {
        let mut book = ContactBook::new();
        book.insert(contact("Alice", "1")).unwrap();
        book.insert(contact("Bob", "2")).unwrap();
        let alice = ContactName::new("Alice").unwrap();
        assert!(matches!(
            book.replace(&alice, contact("Bob", "9")),
            Err(CoreError::DuplicateName(_))
        ));
        assert!(matches!(
            book.replace(&alice, contact("Alicia", "2")),
            Err(CoreError::DuplicatePhone(_))
        ));
    }

    #[test]
    fn remove_and_clear() {
        let mut book = ContactBook::new();
        book.insert(contact("Alice", "1")).unwrap();
        book.insert(contact("Bob", "2")).unwrap();
        book.insert(contact("Carol", "3")).unwrap();

        let removed = book.remove(&ContactName::new("Bob").unwrap()).unwrap();
        assert_eq!(removed.phone.as_str(), "2");
        assert_eq!(names(&book), vec!["Alice", "Carol"]);
        assert!(matches!(
            book.remove(&ContactName::new("Bob").unwrap()),
            Err(CoreError::NotFound(_))
        ));

        assert_eq!(book.clear(), 2);
        assert!(book.is_empty());
    }

    #[test]
    fn search_matches_name_or_phone_in_book_order() {
        let mut book = ContactBook::new();
        book.insert(contact("Alice", "123")).unwrap();
        book.insert(contact("Bob", "456")).unwrap();
        book.insert(contact("Abby", "789")).unwrap();

        let found = book.search("B", SearchOptions::default());
        let found_names: Vec<&str> = found.contacts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(found_names, vec!["Bob", "Abby"]);

        let by_phone = book.search("45", SearchOptions::default());
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone.nth(0).unwrap().name.as_str(), "Bob");

        assert!(book.search("zed", SearchOptions::default()).is_empty());
        assert_eq!(book.search("", SearchOptions::default()).len(), 3);
    }

    #[test]
    fn search_phone_case_sensitivity_is_configurable() {
        let mut book = ContactBook::new();
        book.insert(contact("Alice", "555-CALL")).unwrap();

        assert_eq!(book.search("call", SearchOptions::default()).len(), 1);
        let strict = SearchOptions {
            phone_case_sensitive: true,
        };
        assert!(book.search("call", strict).is_empty());
    }
}
