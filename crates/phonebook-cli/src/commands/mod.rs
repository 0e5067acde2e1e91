use anyhow::Result;
use phonebook_core::normalize_command;

use crate::session::Session;

pub mod add;
pub mod clear;
pub mod help;
pub mod remove;
pub mod search;
pub mod update;
pub mod view;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Add,
    View,
    Search,
    Update,
    Remove,
    Clear,
    Exit,
}

impl Command {
    /// Exact keyword match after trimming and lowercasing; no prefixes.
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_command(raw).as_str() {
            "help" => Some(Command::Help),
            "add" => Some(Command::Add),
            "view" | "contacts" | "list" | "show" => Some(Command::View),
            "search" => Some(Command::Search),
            "update" => Some(Command::Update),
            "remove" | "delete" => Some(Command::Remove),
            "clear" => Some(Command::Clear),
            "exit" | "quit" => Some(Command::Exit),
            _ => None,
        }
    }
}

pub fn dispatch(session: &mut Session<'_>, command: Command) -> Result<()> {
    match command {
        Command::Help => help::show_help(session),
        Command::Add => add::add_contact(session),
        Command::View => view::view_contacts(session),
        Command::Search => search::search_contacts(session),
        Command::Update => update::update_contact(session),
        Command::Remove => remove::remove_contact(session),
        Command::Clear => clear::clear_contacts(session),
        Command::Exit => Ok(()),
    }
}
