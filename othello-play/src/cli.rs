//! Command-line options.

use crate::render::RenderOptions;
use clap::Parser;

/// Pass-and-play Othello for two players at one terminal.
#[derive(Parser, Debug)]
#[command(name = "othello-play", version, about, long_about = None)]
pub struct Cli {
    /// Hide the markers on the active player's legal moves
    #[arg(long)]
    pub no_hints: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Tracing filter for diagnostics on stderr, e.g. `debug` or `othello_core=trace`.
    /// Falls back to RUST_LOG, then `warn`
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            hints: !self.no_hints,
            color: !self.no_color,
        }
    }
}
