use crate::Command;
use othello_core::Snapshot;

/// A player-facing interface between a [`Game`](othello_core::Game) and "the outside world."
///
/// Connectors only ever read [`Snapshot`]s; all game state changes go through the session.
pub trait Connector {
    /// Draw the game as it stands after the latest command.
    fn show(&mut self, snapshot: &Snapshot) -> anyhow::Result<()>;

    /// Tell the players something that is not part of the game state.
    fn notify(&mut self, message: &str) -> anyhow::Result<()>;

    /// Wait for the next command. Returns None once the input is exhausted.
    fn next_command(&mut self) -> anyhow::Result<Option<Command>>;
}
