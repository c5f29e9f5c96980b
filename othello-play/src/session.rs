//! The pass-and-play loop: commands in, snapshots out.

use crate::command::HELP;
use crate::connectors::Connector;
use crate::Command;
use othello_core::{Game, LocationList, MoveResult};
use tracing::{debug, info, instrument};

/// Play games through `connector` until the players quit or the input runs out.
/// Returns the game as it stood when the session ended.
#[instrument(skip_all)]
pub fn run<C: Connector>(connector: &mut C) -> anyhow::Result<Game> {
    let mut game = Game::new();
    connector.show(&game.snapshot())?;

    while let Some(command) = connector.next_command()? {
        let mut placed = false;
        match command {
            Command::Move { row, col } => match game.attempt_move(row, col) {
                Ok(MoveResult::Placed { location, flipped }) => {
                    debug!(%location, %flipped, "move accepted");
                    placed = true;
                }
                // Illegal squares are silently ignored.
                Ok(MoveResult::Ignored) => continue,
                Err(err) => {
                    connector.notify(&format!("{}.", err))?;
                    continue;
                }
            },
            Command::NewGame => {
                info!("starting a new game");
                game.reset();
            }
            Command::DismissPass => game.dismiss_pass(),
            Command::Help => {
                connector.notify(HELP)?;
                continue;
            }
            Command::Quit => break,
        }

        // Flipped stones are only highlighted in the frame drawn for their move.
        let mut snapshot = game.snapshot();
        if !placed {
            snapshot.last_flipped = LocationList::EMPTY;
        }
        connector.show(&snapshot)?;
    }

    Ok(game)
}
