//! Implements the turn controller.
//!
//! [`Game`] layers turn order on top of [`Board`]: it tracks the active player and
//! their legal moves, skips a player who cannot move, and ends the game once neither
//! player can. Presentation layers drive it through [`Game::attempt_move`] and read
//! the result back through [`Game::snapshot`].

use crate::{Board, Location, LocationList, MoveError, Player, Score, Snapshot};
use std::fmt;
use tracing::{debug, info, instrument, trace};

/// How a game finished, or that it has not.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Outcome {
    InProgress,
    BlackWins,
    WhiteWins,
    Draw,
}

/// Where the turn controller is in the game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Status {
    /// The given player is to move.
    Active(Player),
    /// Neither player can move. Terminal until the game is reset.
    Ended(Outcome),
}

/// What an inbound move did to the game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MoveResult {
    /// The input was not a legal move, or the game is over. Nothing changed.
    Ignored,
    /// A stone was placed at `location`, flipping `flipped`.
    Placed {
        location: Location,
        flipped: LocationList,
    },
}

/// The state of a single local game session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Game {
    board: Board,
    status: Status,
    legal_moves: LocationList,
    pass_notice: Option<Player>,
    last_flipped: LocationList,
}

impl Outcome {
    /// The finished outcome for a final score: the player with more stones wins.
    pub fn from_score(score: Score) -> Self {
        match score.leader() {
            Some(Player::Black) => Outcome::BlackWins,
            Some(Player::White) => Outcome::WhiteWins,
            None => Outcome::Draw,
        }
    }

    /// The winning player, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::BlackWins => Some(Player::Black),
            Outcome::WhiteWins => Some(Player::White),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => f.write_str("In progress"),
            Outcome::BlackWins => f.write_str("Black wins"),
            Outcome::WhiteWins => f.write_str("White wins"),
            Outcome::Draw => f.write_str("Draw"),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game from the starting position, Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::default())
    }

    /// A game continuing from `board` with `to_move` next.
    ///
    /// If `to_move` has no legal move the usual pass and end-of-game rules apply
    /// immediately, exactly as if the other player had just moved.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let mut game = Self {
            board,
            status: Status::Active(to_move),
            legal_moves: LocationList::EMPTY,
            pass_notice: None,
            last_flipped: LocationList::EMPTY,
        };
        game.advance(!to_move);
        game
    }

    /// Try to play at `(row, col)` for the active player.
    ///
    /// Coordinates off the board are rejected with [`MoveError::OutOfBounds`].
    /// Illegal squares and moves after the game has ended are ignored.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<MoveResult, MoveError> {
        let loc = Location::try_from_coords(row, col)?;
        Ok(self.play(loc))
    }

    /// Play at `loc` for the active player, ignoring illegal moves.
    pub fn play(&mut self, loc: Location) -> MoveResult {
        let player = match self.status {
            Status::Active(player) => player,
            Status::Ended(_) => {
                trace!(location = %loc, "game is over, ignoring move");
                return MoveResult::Ignored;
            }
        };

        if !self.board.is_legal_move(loc, player) {
            trace!(location = %loc, %player, "illegal move ignored");
            return MoveResult::Ignored;
        }

        let flipped = self.board.apply_move(loc, player);
        debug!(location = %loc, %player, flipped = flipped.len(), "placed stone");

        self.last_flipped = flipped;
        self.advance(player);

        MoveResult::Placed {
            location: loc,
            flipped,
        }
    }

    /// Hand the turn on after `mover` has played.
    ///
    /// The opponent is offered the move first. Only if they are stuck is `mover`
    /// checked again, and only if both are stuck does the game end.
    fn advance(&mut self, mover: Player) {
        let opponent = !mover;

        let replies = self.board.legal_moves(opponent);
        if !replies.is_empty() {
            self.status = Status::Active(opponent);
            self.legal_moves = replies;
            self.pass_notice = None;
            return;
        }

        let again = self.board.legal_moves(mover);
        if !again.is_empty() {
            info!(skipped = %opponent, "{} cannot move and passes", opponent);
            self.status = Status::Active(mover);
            self.legal_moves = again;
            self.pass_notice = Some(opponent);
            return;
        }

        let score = self.board.count_stones();
        let outcome = Outcome::from_score(score);
        info!(black = score.black, white = score.white, "game over: {}", outcome);

        self.status = Status::Ended(outcome);
        self.legal_moves = LocationList::EMPTY;
        self.pass_notice = None;
    }

    /// Discard this game and start again from the starting position.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Clear the pass advisory. The game itself is untouched.
    pub fn dismiss_pass(&mut self) {
        self.pass_notice = None;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The player to move, or None once the game has ended.
    pub fn active_player(&self) -> Option<Player> {
        match self.status {
            Status::Active(player) => Some(player),
            Status::Ended(_) => None,
        }
    }

    /// Legal moves for the active player. Empty once the game has ended.
    pub fn legal_moves(&self) -> LocationList {
        self.legal_moves
    }

    pub fn score(&self) -> Score {
        self.board.count_stones()
    }

    /// The player skipped by the most recent move, until dismissed.
    pub fn pass_notice(&self) -> Option<Player> {
        self.pass_notice
    }

    /// Stones flipped by the most recent move.
    pub fn last_flipped(&self) -> LocationList {
        self.last_flipped
    }

    pub fn outcome(&self) -> Outcome {
        match self.status {
            Status::Active(_) => Outcome::InProgress,
            Status::Ended(outcome) => outcome,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, Status::Ended(_))
    }

    pub fn winner(&self) -> Option<Player> {
        self.outcome().winner()
    }

    /// Copy out everything a presentation layer needs to draw the game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.board.cells(),
            active_player: self.active_player(),
            legal_moves: self.legal_moves,
            score: self.score(),
            pass_notice: self.pass_notice,
            outcome: match self.status {
                Status::Active(_) => None,
                Status::Ended(outcome) => Some(outcome),
            },
            last_flipped: self.last_flipped,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let score = self.score();
        writeln!(f, "{}", self.board)?;
        writeln!(f, "Black {} - White {}", score.black, score.white)?;
        match self.status {
            Status::Active(player) => writeln!(f, "{} to move", player)?,
            Status::Ended(outcome) => writeln!(f, "{}", outcome)?,
        }
        if let Some(skipped) = self.pass_notice {
            writeln!(f, "({} cannot move and passes)", skipped)?;
        }
        Ok(())
    }
}
