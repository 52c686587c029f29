//! CLI entry point.
//!
//! Parses arguments, wires the session through bootstrap and dispatches to
//! the command handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pulse_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};
use pulse_core::services::DEFAULT_GREETING;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the verbosity flag
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        let code = err
            .downcast_ref::<CliError>()
            .map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.as_ref() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let mut config = CliConfig::from_cli(&cli);
    if matches!(command, Commands::Chat { greet: true }) {
        config = config.with_greeting(DEFAULT_GREETING);
    }
    let ctx = bootstrap(config)?;

    match command {
        Commands::Chat { .. } => handlers::chat::execute(&ctx).await,
        Commands::Ask { message } => handlers::ask::execute(&ctx, message).await,
        Commands::Status => handlers::status::execute(&ctx).await,
        Commands::Connect => handlers::connect::execute(&ctx).await,
        Commands::Callback { url } => handlers::callback::execute(&ctx, url).await,
        Commands::Disconnect { yes } => handlers::disconnect::execute(&ctx, *yes).await,
        Commands::Dashboard => handlers::dashboard::execute(&ctx).await,
    }
}
