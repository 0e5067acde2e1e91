pub mod contact;
pub mod name;
pub mod phone;

pub use contact::Contact;
pub use name::{title_case, ContactName};
pub use phone::PhoneNumber;
