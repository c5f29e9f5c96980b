//! Invariants checked over random legal playouts.

use othello_core::{Board, Cell, Game, Location, MoveResult, Player, Status};
use proptest::prelude::*;

/// Legality computed straight from the grid, independently of the engine.
fn naive_is_legal(cells: &[[Cell; 8]; 8], row: usize, col: usize, player: Player) -> bool {
    if cells[row][col] != Cell::Empty {
        return false;
    }

    let own = player.stone();
    let opponent = (!player).stone();

    for dr in -1isize..=1 {
        for dc in -1isize..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }

            let (mut r, mut c) = (row as isize + dr, col as isize + dc);
            let mut seen = 0;
            while (0..8).contains(&r) && (0..8).contains(&c) {
                let cell = cells[r as usize][c as usize];
                if cell == opponent {
                    seen += 1;
                } else {
                    if cell == own && seen > 0 {
                        return true;
                    }
                    break;
                }
                r += dr;
                c += dc;
            }
        }
    }

    false
}

fn changed_cells(before: &Board, after: &Board) -> Vec<(usize, usize)> {
    let (before, after) = (before.cells(), after.cells());
    let mut changed = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            if before[row][col] != after[row][col] {
                changed.push((row, col));
            }
        }
    }
    changed
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn playouts_respect_the_rules(choices in prop::collection::vec(any::<u8>(), 0..70)) {
        let mut game = Game::new();

        for choice in choices {
            let player = match game.active_player() {
                Some(player) => player,
                None => break,
            };

            let moves: Vec<Location> = game.legal_moves().collect();
            prop_assert!(!moves.is_empty());
            prop_assert_eq!(game.legal_moves(), game.board().legal_moves(player));

            let cells = game.board().cells();
            for row in 0..8 {
                for col in 0..8 {
                    let loc = Location::from_coords(row, col);
                    prop_assert_eq!(
                        game.board().is_legal_move(loc, player),
                        naive_is_legal(&cells, row, col, player)
                    );
                }
            }

            let loc = moves[choice as usize % moves.len()];
            let before = *game.board();

            let flipped = match game.play(loc) {
                MoveResult::Placed { location, flipped } => {
                    prop_assert_eq!(location, loc);
                    flipped
                }
                MoveResult::Ignored => return Err(TestCaseError::fail("legal move ignored")),
            };

            let after = *game.board();
            prop_assert_eq!(after.count_stones().total(), before.count_stones().total() + 1);
            prop_assert!(!flipped.is_empty());
            prop_assert_eq!(after.cell(loc), player.stone());

            let mut changed = changed_cells(&before, &after);
            changed.retain(|&coords| coords != loc.to_coords());
            prop_assert_eq!(flipped.coords(), changed);

            match game.status() {
                Status::Active(next) if next == player => {
                    prop_assert_eq!(game.pass_notice(), Some(!player));
                    prop_assert!(after.legal_moves(!player).is_empty());
                }
                Status::Active(next) => {
                    prop_assert_eq!(next, !player);
                    prop_assert_eq!(game.pass_notice(), None);
                }
                Status::Ended(outcome) => {
                    prop_assert!(after.legal_moves(Player::Black).is_empty());
                    prop_assert!(after.legal_moves(Player::White).is_empty());
                    prop_assert_eq!(outcome.winner(), after.count_stones().leader());
                }
            }
        }
    }

    #[test]
    fn ignored_input_is_a_no_op(
        opening in prop::collection::vec(any::<u8>(), 0..20),
        row in 0usize..8,
        col in 0usize..8,
    ) {
        let mut game = Game::new();
        for choice in opening {
            let moves: Vec<Location> = game.legal_moves().collect();
            if moves.is_empty() {
                break;
            }
            game.play(moves[choice as usize % moves.len()]);
        }

        let before = game;
        let loc = Location::from_coords(row, col);
        if !game.legal_moves().contains(loc) {
            prop_assert_eq!(game.attempt_move(row, col), Ok(MoveResult::Ignored));
            prop_assert_eq!(game, before);
        }
    }
}

#[test]
fn games_always_finish() {
    let mut game = Game::new();
    let mut plies = 0;

    while let Some(loc) = game.legal_moves().next() {
        game.play(loc);
        plies += 1;
        assert!(plies <= 60);
    }

    assert!(game.is_finished());
    let score = game.score();
    assert_eq!(game.winner(), score.leader());
}
