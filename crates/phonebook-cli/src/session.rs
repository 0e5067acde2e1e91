use anyhow::Result;
use phonebook_config::AppConfig;
use phonebook_core::{is_cancel, Confirmation, Contact, ContactBook, SearchOptions};
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::commands::{self, Command};

const CANCEL_HINT: &str = "(or type 'back' or 'cancel' to cancel)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Cancel,
}

/// One interactive run: owns the contact book for its lifetime and talks to
/// the user through a line reader and a writer.
pub struct Session<'a> {
    pub book: ContactBook,
    pub config: &'a AppConfig,
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Session<'a> {
    pub fn new(
        config: &'a AppConfig,
        input: &'a mut dyn BufRead,
        output: &'a mut dyn Write,
    ) -> Self {
        Self {
            book: ContactBook::new(),
            config,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn into_book(self) -> ContactBook {
        self.book
    }

    pub fn run(&mut self) -> Result<()> {
        self.say("Welcome to Contact Book!")?;
        self.say("Type 'help' to see available commands.")?;

        let config = self.config;
        loop {
            let Some(line) = self.read_prompted(&config.prompt)? else {
                debug!("input closed");
                break;
            };
            match Command::parse(&line) {
                Some(Command::Exit) => break,
                Some(command) => {
                    debug!(?command, "dispatch");
                    commands::dispatch(self, command)?;
                }
                None => self.say("Invalid input. Type 'help' to see valid command.")?,
            }
        }
        Ok(())
    }

    /// Prompts for one line. End of input counts as a cancel.
    pub fn ask(&mut self, question: &str) -> Result<Reply> {
        let prompt = format!("{question} {CANCEL_HINT}: ");
        match self.read_prompted(&prompt)? {
            Some(line) if !is_cancel(&line) => Ok(Reply::Text(line)),
            _ => Ok(Reply::Cancel),
        }
    }

    pub fn confirm(&mut self, question: &str) -> Result<Confirmation> {
        let prompt = format!("{question} (y/n) {CANCEL_HINT}: ");
        match self.read_prompted(&prompt)? {
            Some(line) => Ok(Confirmation::parse(&line)),
            None => Ok(Confirmation::Cancel),
        }
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Prints the empty-book notice and returns false when there is nothing
    /// to work on.
    pub fn has_contacts(&mut self) -> Result<bool> {
        if self.book.is_empty() {
            self.say("No contacts here.")?;
            return Ok(false);
        }
        Ok(true)
    }

    pub fn show_book(&mut self) -> Result<()> {
        write_listing(&mut *self.output, self.book.contacts())
    }

    pub fn show_contacts(&mut self, contacts: &[Contact]) -> Result<()> {
        write_listing(&mut *self.output, contacts)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            phone_case_sensitive: self.config.search.phone_case_sensitive,
        }
    }

    fn read_prompted(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        // Bytes that are not UTF-8 become replacement characters, so a bad
        // line is just unrecognised text at whatever prompt is active.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}

fn write_listing(output: &mut dyn Write, contacts: &[Contact]) -> Result<()> {
    writeln!(output, "Contacts")?;
    for (index, contact) in contacts.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, contact)?;
    }
    Ok(())
}
