use anyhow::Result;
use phonebook_core::{title_case, Contact, ContactName, PhoneNumber};
use tracing::debug;

use crate::commands::search::find;
use crate::session::{Reply, Session};

const CANCELLED: &str = "Updating contact cancelled.";

/// Picks a contact from a search by name, then asks for a new name and a new
/// phone number. Empty answers keep the current value. The change is written
/// back in the contact's original position only after both answers are in.
pub fn update_contact(session: &mut Session<'_>) -> Result<()> {
    if !session.has_contacts()? {
        return Ok(());
    }

    let found = find(session)?;
    if found.is_empty() {
        return Ok(());
    }

    let Reply::Text(raw) = session.ask("Select name to update")? else {
        return cancelled(session);
    };
    if raw.is_empty() {
        return session.say("No name entered. Pick a name from the search results.");
    }
    let selected = ContactName::new(&raw)
        .ok()
        .and_then(|name| found.get(&name).cloned());
    let Some(selected) = selected else {
        return session.say(format!(
            "{} is not in the search results.",
            title_case(&raw)
        ));
    };

    let name = loop {
        let Reply::Text(raw) = session.ask("New name (leave empty to keep current)")? else {
            return cancelled(session);
        };
        if raw.is_empty() {
            break selected.name.clone();
        }
        let name = ContactName::new(&raw)?;
        if name != selected.name && session.book.contains_name(&name) {
            session.say("Contact name already exists. Please choose another name.")?;
            continue;
        }
        break name;
    };

    let phone = loop {
        let Reply::Text(raw) = session.ask("New phone (leave empty to keep current)")? else {
            return cancelled(session);
        };
        if raw.is_empty() {
            break selected.phone.clone();
        }
        let phone = PhoneNumber::new(&raw)?;
        if phone != selected.phone && session.book.contains_phone(&phone) {
            session.say("This phone number already exists. Choose a different phone number.")?;
            continue;
        }
        break phone;
    };

    debug!(from = %selected.name, to = %name, "contact updated");
    session
        .book
        .replace(&selected.name, Contact::new(name, phone))?;
    session.say("Contact updated.")?;
    if session.config.show_listing_after_change {
        session.show_book()?;
    }
    Ok(())
}

fn cancelled(session: &mut Session<'_>) -> Result<()> {
    debug!("update cancelled");
    session.say(CANCELLED)
}
