//! Phase-specific typestate structs for skirmish.
//!
//! Each phase is its own type with phase-specific fields. A finished game
//! always has a winner, not `Option<Owner>`, and only an in-progress game
//! accepts moves.
//!
//! Transitions borrow the current phase and build the next one, so a
//! rejected action leaves the caller's value untouched.

use crate::action::Move;
use crate::capture::resolve;
use crate::catalog::Direction;
use crate::contracts::{Contract, MoveContract};
use crate::error::RuleViolation;
use crate::log::{MoveLog, MoveRecord};
use crate::phases::Selection;
use crate::rules::{check_swap, check_winner, swap};
use crate::types::{Board, Owner, Position, Target};
use crate::validator::{LegalMove, legal_destinations};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase: players rearrange their home rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    board: Board,
    selection: Option<Selection>,
}

impl GameSetup {
    /// Creates a new game with the opening arrangement.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::opening())
    }

    /// Creates a setup phase over a custom arrangement.
    #[instrument(skip(board))]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            selection: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current selection.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Handles a click on `pos`.
    ///
    /// Clicking the selected square clears the selection. With nothing
    /// selected, an occupied square becomes the selection. With a selection,
    /// any other square is a swap target.
    ///
    /// # Errors
    ///
    /// [`RuleViolation::NoCharacterSelected`] for an empty square with
    /// nothing selected, [`RuleViolation::InvalidSwap`] for a bad swap.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn select(&self, pos: Position) -> Result<Self, RuleViolation> {
        match self.selection {
            Some(sel) if sel.is_at(pos) => {
                debug!("Selection cleared");
                Ok(self.with_selection(None))
            }
            Some(_) => self.swap(pos),
            None => {
                let occupant = self
                    .board
                    .occupant(pos)
                    .ok_or(RuleViolation::NoCharacterSelected)?;
                debug!(%occupant, "Selected");
                Ok(self.with_selection(Some(Selection::new(pos, occupant))))
            }
        }
    }

    /// Swaps the selected piece with the piece on `target`.
    ///
    /// Both must share a row and an owner. On success the selection clears.
    ///
    /// # Errors
    ///
    /// [`RuleViolation::NoCharacterSelected`] without a selection,
    /// [`RuleViolation::InvalidSwap`] when the swap breaks a rule; the
    /// selection is kept.
    #[instrument(skip(self), fields(target = %target))]
    pub fn swap(&self, target: Position) -> Result<Self, RuleViolation> {
        let sel = self.selection.ok_or(RuleViolation::NoCharacterSelected)?;
        check_swap(&self.board, &sel, target)?;

        debug!(from = %sel.position, to = %target, "Swapped");
        Ok(Self {
            board: swap(&self.board, sel.position, target),
            selection: None,
        })
    }

    /// Starts combat with `A` to move (consumes setup, returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        info!("Combat started");
        GameInProgress {
            board: self.board,
            opening: self.board,
            selection: None,
            to_move: Owner::A,
            log: MoveLog::new(),
        }
    }

    fn with_selection(&self, selection: Option<Selection>) -> Self {
        Self {
            board: self.board,
            selection,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress: players alternate moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) opening: Board,
    pub(crate) selection: Option<Selection>,
    pub(crate) to_move: Owner,
    pub(crate) log: MoveLog,
}

impl GameInProgress {
    /// Handles a click on `pos`.
    ///
    /// - the selected square: clears the selection
    /// - one of the mover's pieces, nothing selected: selects it
    /// - anything else with a selection: moves there
    ///
    /// # Errors
    ///
    /// [`RuleViolation::NotYourTurn`] for an opposing piece and
    /// [`RuleViolation::NoCharacterSelected`] for an empty square when
    /// nothing is selected. With a selection, [`RuleViolation::FriendlyFire`]
    /// for another of the mover's pieces (the selection is kept), otherwise
    /// whatever the move is rejected with.
    #[instrument(skip(self), fields(position = %pos, mover = %self.to_move))]
    pub fn select(&self, pos: Position) -> Result<GameResult, RuleViolation> {
        if let Some(sel) = self.selection
            && sel.is_at(pos)
        {
            debug!("Selection cleared");
            return Ok(GameResult::InProgress(self.with_selection(None)));
        }

        match (self.board.occupant(pos), self.selection) {
            (Some(occupant), None) if occupant.belongs_to(self.to_move) => {
                debug!(%occupant, "Selected");
                Ok(GameResult::InProgress(
                    self.with_selection(Some(Selection::new(pos, occupant))),
                ))
            }
            (Some(_), None) => Err(RuleViolation::NotYourTurn),
            (Some(occupant), Some(_)) if occupant.belongs_to(self.to_move) => {
                Err(RuleViolation::FriendlyFire)
            }
            (None, None) => Err(RuleViolation::NoCharacterSelected),
            (_, Some(sel)) => {
                let (dr, dc) = sel.position.delta_to(pos.into());
                let direction = Direction::for_delta(sel.occupant.kind, dr, dc)
                    .ok_or(RuleViolation::IllegalGeometry)?;
                self.make_move(Move::new(self.to_move, sel.position, pos.into(), direction))
            }
        }
    }

    /// Moves the selected piece to `to` using the move labelled `direction`.
    ///
    /// # Errors
    ///
    /// [`RuleViolation::NoCharacterSelected`] without a selection; otherwise
    /// see [`GameInProgress::make_move`].
    #[instrument(skip(self), fields(mover = %self.to_move))]
    pub fn apply_move(
        &self,
        to: Target,
        direction: Direction,
    ) -> Result<GameResult, RuleViolation> {
        let sel = self.selection.ok_or(RuleViolation::NoCharacterSelected)?;
        self.make_move(Move::new(self.to_move, sel.position, to, direction))
    }

    /// Validates and applies a move, returning the next state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// [`RuleViolation::OutOfBounds`], [`RuleViolation::FriendlyFire`],
    /// [`RuleViolation::IllegalGeometry`], or a turn/selection violation.
    #[instrument(skip(self), fields(action = %action))]
    pub fn make_move(&self, action: Move) -> Result<GameResult, RuleViolation> {
        MoveContract::pre(self, &action)?;

        let to = action.to.to_position().ok_or(RuleViolation::OutOfBounds)?;
        let occupant = self
            .board
            .occupant(action.from)
            .ok_or(RuleViolation::NoCharacterSelected)?;
        let resolution = resolve(&self.board, action.from, to);

        let mut game = self.clone();
        game.board = resolution.board;
        game.selection = None;
        game.log.push(MoveRecord::new(
            action.mover,
            occupant,
            action.direction,
            action.from,
            to,
            resolution.captures,
        ));
        let entry = game.log.last().map(ToString::to_string).unwrap_or_default();
        info!(%entry, "Move applied");

        if let Some(winner) = check_winner(&game.board) {
            info!(%winner, "Game won");
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                log: game.log,
                winner,
            }));
        }

        game.to_move = game.to_move.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(self, &game)?;

        Ok(GameResult::InProgress(game))
    }

    /// Legal destinations for the selected piece, empty without a selection.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<LegalMove> {
        self.selection
            .map(|sel| {
                legal_destinations(sel.occupant.kind, sel.position, sel.occupant.owner, &self.board)
            })
            .unwrap_or_default()
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Owner {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the arrangement combat started from.
    pub fn opening(&self) -> &Board {
        &self.opening
    }

    /// Returns the current selection.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Returns the move log.
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    /// Replays logged moves from an opening arrangement.
    ///
    /// Stops at the first move that wins the game.
    ///
    /// # Errors
    ///
    /// The first rule violation any replayed move hits.
    #[instrument(skip(opening, entries), fields(moves = entries.len()))]
    pub fn replay(opening: Board, entries: &[MoveRecord]) -> Result<GameResult, RuleViolation> {
        let mut game = GameSetup::from_board(opening).start();

        for entry in entries {
            let action = Move::new(
                *entry.mover(),
                *entry.from(),
                (*entry.to()).into(),
                *entry.direction(),
            );
            match game.make_move(action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }

    pub(crate) fn with_selection(&self, selection: Option<Selection>) -> Self {
        Self {
            selection,
            ..self.clone()
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished: one side has no pieces left.
///
/// The board and log stay inspectable; the winner is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFinished {
    board: Board,
    log: MoveLog,
    winner: Owner,
}

impl GameFinished {
    /// Returns the winner.
    pub fn winner(&self) -> Owner {
        self.winner
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move log.
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    /// Restarts the game (consumes finished, returns a fresh setup).
    #[instrument(skip(self), fields(winner = %self.winner))]
    pub fn restart(self) -> GameSetup {
        info!("Game reset");
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of a combat action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
