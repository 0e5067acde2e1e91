use crate::domain::{ContactName, PhoneNumber};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: ContactName,
    pub phone: PhoneNumber,
}

impl Contact {
    pub fn new(name: ContactName, phone: PhoneNumber) -> Self {
        Self { name, phone }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {} | Phone: {}", self.name, self.phone)
    }
}
