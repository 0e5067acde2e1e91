use anyhow::Result;

use crate::session::Session;

const HELP: &str = "\nCommands:
  help                      -> Show this help message
  cancel/back               -> Cancel from current operation
  add                       -> Add a new contact
  update                    -> Update original contact
  view/contacts/list/show   -> View all contacts
  search                    -> Search contacts by keyword
  remove/delete             -> Remove a contact by keyword
  clear                     -> Remove all contacts
  exit/quit                 -> Exit the program
";

pub fn show_help(session: &mut Session<'_>) -> Result<()> {
    session.say(HELP)
}
