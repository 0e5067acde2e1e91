use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("name is required")]
    EmptyName,
    #[error("phone number is required")]
    EmptyPhone,
    #[error("duplicate name: {0}")]
    DuplicateName(String),
    #[error("duplicate phone number: {0}")]
    DuplicatePhone(String),
    #[error("contact not found: {0}")]
    NotFound(String),
    #[error("not a number: {0}")]
    InvalidNumber(String),
    #[error("selection out of range: {0}")]
    SelectionOutOfRange(i64),
}
