pub mod book;
pub mod domain;
pub mod error;
pub mod input;

pub use book::{ContactBook, FoundSet, SearchOptions};
pub use domain::*;
pub use error::CoreError;
pub use input::{is_cancel, normalize_command, parse_selection, Confirmation};
