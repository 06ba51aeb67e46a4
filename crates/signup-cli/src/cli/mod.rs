//! CLI entry and dispatch.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use signup_core::config::Config;
use signup_core::{Field, Role};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "signup")]
#[command(version)]
#[command(about = "Student and teacher account registration")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Open the signup form for this role right away (student or teacher)
    #[arg(long, value_name = "ROLE")]
    role: Option<Role>,
}

impl Cli {
    /// True for the interactive screen and headless submissions.
    fn writes_log(&self) -> bool {
        matches!(self.command, None | Some(Commands::Submit(_)))
    }
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Check a single field value
    Validate {
        /// Field id (name, email, password, confirmPassword, age, specialty, bio, studyLevel)
        #[arg(value_name = "FIELD")]
        field: Field,

        /// Value to check
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,

        /// Password to compare against when checking confirmPassword
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Run a full registration without the interactive screen
    Submit(commands::submit::SubmitArgs),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

/// Parses arguments and runs the selected command.
///
/// Returns the process exit code; rejected input exits with failure
/// without an error chain.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Quick lookups (`validate`, `config`) leave no log file behind.
    let _log_guard = cli.writes_log().then(logging::init).flatten();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<ExitCode> {
    let Some(command) = cli.command else {
        let config = Config::load().context("load config")?;
        commands::tui::run(&config, cli.role).await?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Validate {
            field,
            value,
            password,
        } => Ok(commands::validate::run(field, &value, &password)),
        Commands::Submit(args) => {
            let config = Config::load().context("load config")?;
            commands::submit::run(&config, &args)
        }
        Commands::Config { command } => {
            match command {
                ConfigCommands::Path => commands::config::path(),
                ConfigCommands::Init => commands::config::init()?,
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
