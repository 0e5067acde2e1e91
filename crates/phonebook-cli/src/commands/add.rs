use anyhow::Result;
use phonebook_core::{Contact, CoreError};
use tracing::debug;

use crate::session::{Reply, Session};

const CANCELLED: &str = "Adding contact cancelled.";

/// Collects a name and then a phone number; nothing is stored unless both
/// pass validation.
pub fn add_contact(session: &mut Session<'_>) -> Result<()> {
    let name = loop {
        let Reply::Text(raw) = session.ask("Name")? else {
            return cancelled(session);
        };
        match session.book.available_name(&raw) {
            Ok(name) => break name,
            Err(CoreError::EmptyName) => session.say("Name can't be empty. Please enter name.")?,
            Err(CoreError::DuplicateName(name)) => {
                session.say(format!("{name} already exists. Choose another name."))?
            }
            Err(err) => return Err(err.into()),
        }
    };

    let phone = loop {
        let Reply::Text(raw) = session.ask("Phone")? else {
            return cancelled(session);
        };
        match session.book.available_phone(&raw) {
            Ok(phone) => break phone,
            Err(CoreError::EmptyPhone) => {
                session.say("Phone number can't be empty. Please enter phone number.")?
            }
            Err(CoreError::DuplicatePhone(_)) => session
                .say("This phone number already exists. Choose a different phone number.")?,
            Err(err) => return Err(err.into()),
        }
    };

    debug!(name = %name, "contact added");
    session.book.insert(Contact::new(name, phone))?;
    session.say("New contact added.")
}

fn cancelled(session: &mut Session<'_>) -> Result<()> {
    debug!("add cancelled");
    session.say(CANCELLED)
}
