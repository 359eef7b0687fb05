//! Interactive assistant
//!
//! Reads one command per line, runs it against an in-memory address book and
//! writes a reply. The address book lives as long as the assistant.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDateTime};

use super::commands::{find_command, help_text, CommandAction};
use super::parser::{parse_input, raw_argument};
use crate::book::AddressBook;
use crate::config::Settings;
use crate::display::{format_contact_list, format_contact_phones, format_upcoming_birthdays};
use crate::error::{ContactsError, ContactsResult};
use crate::services::ContactService;

const MISSING_NAME: &str = "Enter user name.";
const MISSING_ARGUMENT: &str = "Enter the argument for the command.";

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next command
    Continue(String),
    /// Print the message and stop
    Exit(String),
}

impl Reply {
    pub fn message(&self) -> &str {
        match self {
            Reply::Continue(message) | Reply::Exit(message) => message,
        }
    }
}

/// The interactive assistant session
pub struct Assistant {
    book: AddressBook,
    default_days: u32,
    prompt: String,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl Assistant {
    /// Create an assistant with an empty book
    pub fn new(settings: &Settings) -> Self {
        Self {
            book: AddressBook::new(),
            default_days: settings.upcoming_days,
            prompt: settings.prompt.clone(),
            clock: local_now,
        }
    }

    /// Use a fixed clock for the birthday window
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run until `exit`/`close` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> ContactsResult<()> {
        writeln!(output, "Welcome to the assistant bot!")?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                writeln!(output, "Goodbye!")?;
                break;
            };
            let line = line?;

            match self.handle_line(&line) {
                Some(Reply::Continue(message)) => writeln!(output, "{}", message)?,
                Some(Reply::Exit(message)) => {
                    writeln!(output, "{}", message)?;
                    break;
                }
                None => {}
            }
        }

        output.flush()?;
        Ok(())
    }

    /// Handle one input line; blank lines produce no reply
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let (command, args) = parse_input(line)?;
        tracing::debug!(command = %command, args = args.len(), "assistant command");

        let Some(cmd) = find_command(&command) else {
            return Some(Reply::Continue("Invalid command.".to_string()));
        };

        let reply = match cmd.action {
            CommandAction::Exit => return Some(Reply::Exit("Goodbye!".to_string())),
            CommandAction::Hello => "How can I help you?".to_string(),
            CommandAction::Help => help_text(),
            CommandAction::AddContact => self.add_contact(&args),
            CommandAction::ChangePhone => self.change_phone(&args),
            CommandAction::RemovePhone => self.remove_phone(&args),
            CommandAction::ShowPhone => self.show_phone(&args),
            CommandAction::ShowAll => format_contact_list(&self.book),
            CommandAction::DeleteContact => self.delete_contact(&args),
            CommandAction::AddBirthday => self.add_birthday(&args),
            CommandAction::ShowBirthday => self.show_birthday(&args),
            CommandAction::UpcomingBirthdays => self.upcoming_birthdays(&args),
            CommandAction::Import => self.import(line),
            CommandAction::Export => self.export(),
        };

        Some(Reply::Continue(reply))
    }

    fn service(&mut self) -> ContactService<'_> {
        ContactService::new(&mut self.book)
    }

    fn add_contact(&mut self, args: &[String]) -> String {
        let Some(name) = args.first() else {
            return MISSING_NAME.to_string();
        };

        let report = self
            .service()
            .add_contact(name, args.get(1).map(String::as_str));
        let message = if report.created {
            "Contact added."
        } else {
            "Contact updated."
        };

        match report.phone_error {
            Some(err) => format!("{}\n{}", error_message(&err), message),
            None => message.to_string(),
        }
    }

    fn change_phone(&mut self, args: &[String]) -> String {
        let [name, old, new, ..] = args else {
            return MISSING_ARGUMENT.to_string();
        };

        match self.service().change_phone(name, old, new) {
            Ok(()) => format!("Phone number for {} updated.", name),
            Err(err) => error_message(&err),
        }
    }

    fn remove_phone(&mut self, args: &[String]) -> String {
        let [name, phone, ..] = args else {
            return MISSING_ARGUMENT.to_string();
        };

        match self.service().remove_phone(name, phone) {
            Ok(()) => format!("Phone number removed for {}.", name),
            Err(err) => error_message(&err),
        }
    }

    fn show_phone(&mut self, args: &[String]) -> String {
        let Some(name) = args.first() else {
            return MISSING_NAME.to_string();
        };

        match self.service().get(name) {
            Ok(record) => format_contact_phones(record),
            Err(err) => error_message(&err),
        }
    }

    fn delete_contact(&mut self, args: &[String]) -> String {
        let Some(name) = args.first() else {
            return MISSING_NAME.to_string();
        };

        match self.service().delete(name) {
            Ok(_) => format!("Contact {} deleted.", name),
            Err(err) => error_message(&err),
        }
    }

    fn add_birthday(&mut self, args: &[String]) -> String {
        let [name, birthday, ..] = args else {
            return MISSING_ARGUMENT.to_string();
        };

        match self.service().set_birthday(name, birthday) {
            Ok(()) => format!("Birthday added for {}.", name),
            Err(err) => error_message(&err),
        }
    }

    fn show_birthday(&mut self, args: &[String]) -> String {
        let Some(name) = args.first() else {
            return MISSING_NAME.to_string();
        };

        match self.service().birthday(name) {
            Some(birthday) => format!("{}'s birthday: {}", name, birthday),
            None => format!("Contact {} not found or no birthday set.", name),
        }
    }

    fn upcoming_birthdays(&mut self, args: &[String]) -> String {
        let days = match args.first() {
            Some(raw) => match raw.parse::<u32>() {
                Ok(days) => days,
                Err(_) => return "Days must be a non-negative whole number.".to_string(),
            },
            None => self.default_days,
        };

        let now = (self.clock)();
        let upcoming = self.service().upcoming_birthdays(days, now);
        format_upcoming_birthdays(&upcoming, days)
    }

    fn import(&mut self, line: &str) -> String {
        let Some(json) = raw_argument(line) else {
            return MISSING_ARGUMENT.to_string();
        };

        match self.service().import_json(json) {
            Ok(false) => "Contact imported.".to_string(),
            Ok(true) => "Contact replaced.".to_string(),
            Err(err) => error_message(&err),
        }
    }

    fn export(&mut self) -> String {
        self.service()
            .export_json()
            .unwrap_or_else(|err| error_message(&err))
    }
}

/// User-facing text for an error
fn error_message(err: &ContactsError) -> String {
    match err {
        ContactsError::NotFound { identifier, .. } => format!("Contact {} not found.", identifier),
        other => other.to_string(),
    }
}
