use anyhow::Result;
use clap::Parser;
use othello_play::cli::Cli;
use othello_play::connectors::TerminalConnector;
use othello_play::session;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut terminal = TerminalConnector::stdio(cli.render_options());
    let game = session::run(&mut terminal)?;
    info!(outcome = %game.outcome(), "session finished");

    Ok(())
}
