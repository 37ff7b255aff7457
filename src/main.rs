use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::process::ExitCode;

use roost::commands::{
    cmd_board, cmd_config_get, cmd_config_set, cmd_config_show, cmd_login, cmd_seats,
};

#[derive(Parser)]
#[command(name = "roost")]
#[command(about = "Lunch-hour seat booking from the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive seat board (default)
    #[command(visible_alias = "b")]
    Board,

    /// List seats and their occupancy
    Seats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the session, printing the sign-in URL when absent
    Login,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Display current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a configuration value
    Get {
        /// Key in dot notation (e.g. api.base_url)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Key in dot notation (e.g. api.base_url)
        key: String,
        /// New value
        value: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::Board) => cmd_board().await,
        Some(Commands::Seats { json }) => cmd_seats(json).await,
        Some(Commands::Login) => cmd_login().await,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show { json } => cmd_config_show(json),
            ConfigAction::Get { key } => cmd_config_get(&key),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
        },
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
