use anyhow::Result;
use phonebook_core::FoundSet;
use tracing::debug;

use crate::session::{Reply, Session};

pub fn search_contacts(session: &mut Session<'_>) -> Result<()> {
    if !session.has_contacts()? {
        return Ok(());
    }
    find(session)?;
    Ok(())
}

/// Asks for a keyword and prints the matches. Cancelling or matching nothing
/// yields an empty set; update and remove treat that as the end of the
/// operation.
pub fn find(session: &mut Session<'_>) -> Result<FoundSet> {
    let keyword = match session.ask("Enter keyword to search contact")? {
        Reply::Text(keyword) => keyword,
        Reply::Cancel => {
            session.say("Searching contact cancelled.")?;
            return Ok(FoundSet::default());
        }
    };

    let found = session.book.search(&keyword, session.search_options());
    debug!(keyword = %keyword, matches = found.len(), "search");
    if found.is_empty() {
        session.say("No matching contact here.")?;
        return Ok(found);
    }

    session.show_contacts(found.contacts())?;
    Ok(found)
}
