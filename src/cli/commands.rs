//! Assistant command definitions
//!
//! Defines the commands the interactive assistant understands.

/// A command the assistant accepts
#[derive(Debug, Clone)]
pub struct Command {
    /// Command name (what user types)
    pub name: &'static str,
    /// Argument synopsis
    pub usage: &'static str,
    /// Short description
    pub description: &'static str,
    /// Command action
    pub action: CommandAction,
}

/// Actions that commands can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    // Contacts
    AddContact,
    ChangePhone,
    RemovePhone,
    ShowPhone,
    ShowAll,
    DeleteContact,

    // Birthdays
    AddBirthday,
    ShowBirthday,
    UpcomingBirthdays,

    // Import/export
    Import,
    Export,

    // General
    Hello,
    Help,
    Exit,
}

/// All available commands
pub static COMMANDS: &[Command] = &[
    Command {
        name: "hello",
        usage: "",
        description: "Greet the assistant",
        action: CommandAction::Hello,
    },
    // Contact commands
    Command {
        name: "add",
        usage: "<name> [phone]",
        description: "Add a contact or a phone to an existing contact",
        action: CommandAction::AddContact,
    },
    Command {
        name: "change",
        usage: "<name> <old phone> <new phone>",
        description: "Replace a contact's phone",
        action: CommandAction::ChangePhone,
    },
    Command {
        name: "remove-phone",
        usage: "<name> <phone>",
        description: "Remove a phone from a contact",
        action: CommandAction::RemovePhone,
    },
    Command {
        name: "phone",
        usage: "<name>",
        description: "Show a contact's phones",
        action: CommandAction::ShowPhone,
    },
    Command {
        name: "all",
        usage: "",
        description: "Show all contacts",
        action: CommandAction::ShowAll,
    },
    Command {
        name: "delete",
        usage: "<name>",
        description: "Delete a contact",
        action: CommandAction::DeleteContact,
    },
    // Birthday commands
    Command {
        name: "add-birthday",
        usage: "<name> <DD.MM.YYYY>",
        description: "Set a contact's birthday",
        action: CommandAction::AddBirthday,
    },
    Command {
        name: "show-birthday",
        usage: "<name>",
        description: "Show a contact's birthday",
        action: CommandAction::ShowBirthday,
    },
    Command {
        name: "birthdays",
        usage: "[days]",
        description: "List birthdays to celebrate soon",
        action: CommandAction::UpcomingBirthdays,
    },
    // Import/export
    Command {
        name: "import",
        usage: "<json record>",
        description: "Add a contact from a JSON object",
        action: CommandAction::Import,
    },
    Command {
        name: "export",
        usage: "",
        description: "Print all contacts as JSON",
        action: CommandAction::Export,
    },
    // General commands
    Command {
        name: "help",
        usage: "",
        description: "Show this help",
        action: CommandAction::Help,
    },
    Command {
        name: "exit",
        usage: "",
        description: "Leave the assistant",
        action: CommandAction::Exit,
    },
    Command {
        name: "close",
        usage: "",
        description: "Leave the assistant",
        action: CommandAction::Exit,
    },
];

/// Find a command by name
pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|cmd| cmd.name == name)
}

/// Help text listing every command
pub fn help_text() -> String {
    COMMANDS
        .iter()
        .map(|cmd| {
            let synopsis = if cmd.usage.is_empty() {
                cmd.name.to_string()
            } else {
                format!("{} {}", cmd.name, cmd.usage)
            };
            format!("  {:<40} {}", synopsis, cmd.description)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
