use anyhow::Result;

use crate::session::Session;

pub fn view_contacts(session: &mut Session<'_>) -> Result<()> {
    if !session.has_contacts()? {
        return Ok(());
    }
    session.show_book()
}
