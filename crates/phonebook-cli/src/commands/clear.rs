use anyhow::Result;
use phonebook_core::Confirmation;
use tracing::debug;

use crate::session::Session;

pub fn clear_contacts(session: &mut Session<'_>) -> Result<()> {
    if !session.has_contacts()? {
        return Ok(());
    }

    match session.confirm("Are you sure to clear all contacts?")? {
        Confirmation::Cancel => {
            debug!("clear cancelled");
            session.say("Clearing contacts cancelled.")
        }
        Confirmation::Yes => {
            let removed = session.book.clear();
            debug!(removed, "contacts cleared");
            session.say("All contacts cleared.")
        }
        // Declining is silent.
        Confirmation::No => Ok(()),
    }
}
