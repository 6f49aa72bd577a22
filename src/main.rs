use anyhow::Result;
use clap::Parser;

use raindrop::cli::{Cli, Command};
use raindrop::commands;
use raindrop::config::Config;
use raindrop::RaindropError;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose.max(cli.command.default_verbosity()), cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref()).map_err(RaindropError::from)?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command {
        Command::Tree(args) => {
            tracing::info!(?args, "Rendering tree");
            commands::tree::run(args, &config)?;
        }
        Command::Serve(args) => {
            tracing::info!(?args, "Starting resource server");
            commands::serve::run(args, &config)?;
        }
        Command::Share(args) => {
            tracing::info!(?args, "Starting share server");
            commands::share::run(args, &config)?;
        }
        Command::Fetch(args) => {
            tracing::info!(?args, "Fetching page");
            commands::fetch::run(args, &config)?;
        }
        Command::Completions(args) => commands::completions::run(args)?,
        Command::Manpage => commands::completions::manpage()?,
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    // actix-web's access log goes through the `log` facade and is bridged here.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("raindrop={level},actix_web={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
