//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use sesame_core::{config, interrupt};

mod commands;

#[derive(Parser)]
#[command(name = "sesame")]
#[command(version)]
#[command(about = "Log in to the sesame service from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the service origin from config
    #[arg(long, global = true, env = "SESAME_BASE_URL", value_name = "URL")]
    base_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
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
    /// Print a fresh config generated from defaults
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    interrupt::init().context("install Ctrl+C handler")?;

    // one tokio runtime for everything; the UI loop spawns requests onto it
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    let _enter = rt.enter();
    dispatch(cli)
}

fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, base_url } = cli;

    // default to the interactive client
    let Some(command) = command else {
        let mut config = config::Config::load().context("load config")?;
        if let Some(url) = base_url {
            config.base_url = url;
        }
        return commands::app::run(&config);
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
    }
}
