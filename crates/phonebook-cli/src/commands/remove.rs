use anyhow::Result;
use phonebook_core::{parse_selection, Confirmation, CoreError};
use tracing::debug;

use crate::commands::search::find;
use crate::session::{Reply, Session};

const CANCELLED: &str = "Removing contact cancelled.";

/// Removes one contact picked by its position in a search result. The number
/// is read once; a bad number ends the operation.
pub fn remove_contact(session: &mut Session<'_>) -> Result<()> {
    if !session.has_contacts()? {
        return Ok(());
    }

    let found = find(session)?;
    if found.is_empty() {
        return Ok(());
    }

    let Reply::Text(raw) = session.ask("Enter number of contacts to remove")? else {
        return cancelled(session);
    };
    let selected = match parse_selection(&raw, found.len()) {
        Ok(index) => found.nth(index).cloned(),
        Err(CoreError::InvalidNumber(_)) => return session.say("Please enter valid number."),
        Err(CoreError::SelectionOutOfRange(_)) => None,
        Err(err) => return Err(err.into()),
    };
    let Some(selected) = selected else {
        return session.say("Invalid number.");
    };

    match session.confirm("Are you sure to remove this contact?")? {
        Confirmation::Cancel => cancelled(session),
        Confirmation::No => session.say("Removal cancelled."),
        Confirmation::Yes => {
            session.book.remove(&selected.name)?;
            debug!(name = %selected.name, "contact removed");
            session.say("Contact removed.")?;
            if session.config.show_listing_after_change {
                session.show_book()?;
            }
            Ok(())
        }
    }
}

fn cancelled(session: &mut Session<'_>) -> Result<()> {
    debug!("remove cancelled");
    session.say(CANCELLED)
}
