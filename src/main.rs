use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use questview::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "questview")]
#[command(about = "Terminal progress view for smart-contract challenge runs")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.questview/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show points, completion rate and completed challenges
    Progress {
        /// User state file (JSON or YAML)
        #[arg(short, long)]
        user: Option<PathBuf>,

        /// Challenge catalog file (JSON or YAML)
        #[arg(long)]
        challenges: Option<PathBuf>,

        /// Print the menu tree as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Show completion dates in UTC
        #[arg(long)]
        utc: bool,
    },

    /// Initialize a new config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config, force).await?;
        }
        Some(Commands::Progress {
            user,
            challenges,
            json,
            no_color,
            utc,
        }) => {
            let config = Config::load_from(cli.config.as_deref())?;
            let args = cli::progress::ProgressArgs {
                user,
                challenges,
                json,
                no_color,
                utc,
            };
            cli::progress::progress_command(&config, args).await?;
        }
        None => {
            // Default: show progress from configured files
            let config = Config::load_from(cli.config.as_deref())?;
            cli::progress::progress_command(&config, Default::default()).await?;
        }
    }

    Ok(())
}
