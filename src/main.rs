use anyhow::Result;
use clap::{Parser, Subcommand};

use pocketbook::cli::{handle_config_command, Shell};
use pocketbook::config::{PocketbookPaths, Settings};
use pocketbook::PocketbookResult;

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Terminal-based personal income and expense ledger",
    long_about = "Pocketbook records income and expenses by category from a simple \
                  text menu, keeps a running balance and lets you undo the last entry. \
                  Entries live only for the current session."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    #[command(alias = "menu")]
    Run,

    /// Write a settings file with the current values
    Init,

    /// Show current configuration and paths
    Config,
}

/// Resolve paths and load settings
fn load_configuration() -> PocketbookResult<(PocketbookPaths, Settings)> {
    let paths = PocketbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    Ok((paths, settings))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = load_configuration();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            // The ledger is in-memory only, so a broken config never blocks it
            let settings = match loaded {
                Ok((_, settings)) => {
                    pocketbook::logging::init(&settings.log_filter);
                    settings
                }
                Err(err) => {
                    let settings = Settings::default();
                    pocketbook::logging::init(&settings.log_filter);
                    tracing::warn!(error = %err, "configuration unavailable, using default settings");
                    settings
                }
            };

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut shell = Shell::new(stdin.lock(), stdout.lock(), settings);
            shell.run()?;
        }
        Commands::Init => {
            let (paths, settings) = loaded?;
            pocketbook::logging::init(&settings.log_filter);
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Commands::Config => {
            let (paths, settings) = loaded?;
            pocketbook::logging::init(&settings.log_filter);
            handle_config_command(&paths, &settings, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}
