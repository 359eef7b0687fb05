use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use contacts::cli::Assistant;
use contacts::config::{paths::ContactsPaths, settings::Settings};
use contacts::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Terminal-based contact manager with birthday reminders",
    long_about = "contacts is an interactive assistant that keeps names, phone \
                  numbers and birthdays for the current session and tells you \
                  whose birthday to celebrate in the coming days."
)]
struct Cli {
    /// Days ahead the `birthdays` command looks by default
    #[arg(long, global = true, env = "CONTACTS_CLI_DAYS")]
    days: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive assistant (default)
    #[command(alias = "run")]
    Chat,

    /// Write default settings to the config directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ContactsPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(days) = cli.days {
        settings.upcoming_days = days;
    }

    init_logging(&settings.log_directive)?;
    tracing::debug!(config = %paths.settings_file().display(), "settings loaded");

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let mut assistant = Assistant::new(&settings);
            assistant.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Commands::Init => {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("contacts configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Upcoming days: {}", settings.upcoming_days);
            println!("  Log directive: {}", settings.log_directive);
            println!("  Prompt:        {:?}", settings.prompt);
        }
    }

    Ok(())
}
