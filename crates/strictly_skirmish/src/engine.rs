//! Game snapshots and the click-driven engine façade.

use crate::action::Action;
use crate::catalog::Direction;
use crate::error::RuleViolation;
use crate::log::MoveLog;
use crate::phases::{Phase, Selection};
use crate::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
use crate::types::{Board, Owner, Position, Target};
use crate::validator::LegalMove;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

static EMPTY_LOG: MoveLog = MoveLog::new();

/// Serializable snapshot of a game in any phase.
///
/// Snapshots are values: applying an action builds a new snapshot and
/// leaves the old one as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Players are arranging their home rows.
    Setup(GameSetup),
    /// Players alternate moves.
    Combat(GameInProgress),
    /// One side has been wiped out.
    Finished(GameFinished),
}

impl From<GameSetup> for GameState {
    fn from(game: GameSetup) -> Self {
        GameState::Setup(game)
    }
}

impl From<GameInProgress> for GameState {
    fn from(game: GameInProgress) -> Self {
        GameState::Combat(game)
    }
}

impl From<GameFinished> for GameState {
    fn from(game: GameFinished) -> Self {
        GameState::Finished(game)
    }
}

impl From<GameResult> for GameState {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(g) => g.into(),
            GameResult::Finished(g) => g.into(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameSetup::new().into()
    }
}

impl GameState {
    /// A fresh game in setup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase. A finished game reports [`Phase::Combat`].
    pub fn phase(&self) -> Phase {
        match self {
            GameState::Setup(_) => Phase::Setup,
            GameState::Combat(_) | GameState::Finished(_) => Phase::Combat,
        }
    }

    /// Board for any phase.
    pub fn board(&self) -> &Board {
        match self {
            GameState::Setup(g) => g.board(),
            GameState::Combat(g) => g.board(),
            GameState::Finished(g) => g.board(),
        }
    }

    /// Current selection, never present once the game is won.
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            GameState::Setup(g) => g.selection(),
            GameState::Combat(g) => g.selection(),
            GameState::Finished(_) => None,
        }
    }

    /// Player to move.
    ///
    /// `A` during setup; the winner once the game is over, since a winning
    /// move does not pass the turn.
    pub fn mover(&self) -> Owner {
        match self {
            GameState::Setup(_) => Owner::A,
            GameState::Combat(g) => g.to_move(),
            GameState::Finished(g) => g.winner(),
        }
    }

    /// Winner, if decided.
    pub fn winner(&self) -> Option<Owner> {
        match self {
            GameState::Finished(g) => Some(g.winner()),
            _ => None,
        }
    }

    /// True once a winner has been decided.
    pub fn is_over(&self) -> bool {
        matches!(self, GameState::Finished(_))
    }

    /// Move log, empty during setup.
    pub fn log(&self) -> &MoveLog {
        match self {
            GameState::Setup(_) => &EMPTY_LOG,
            GameState::Combat(g) => g.log(),
            GameState::Finished(g) => g.log(),
        }
    }

    /// Legal moves for the current selection; empty outside combat.
    pub fn legal_moves(&self) -> Vec<LegalMove> {
        match self {
            GameState::Combat(g) => g.legal_moves(),
            _ => Vec::new(),
        }
    }

    /// Status line for display.
    pub fn status_string(&self) -> String {
        match self {
            GameState::Setup(_) => {
                "Swap your characters in respective rows, then start the game.".to_string()
            }
            GameState::Combat(g) => format!("Current Turn: Player {}", g.to_move()),
            GameState::Finished(g) => format!("Player {} wins!", g.winner()),
        }
    }

    /// Applies an action, returning the next snapshot.
    ///
    /// Once a winner is recorded, clicks, swaps, and moves are no-ops; only
    /// `Start` and `Reset` do anything, and both begin a fresh setup.
    /// `Start` during undecided combat and `Reset` before a winner are
    /// no-ops too.
    ///
    /// # Errors
    ///
    /// The [`RuleViolation`] the action broke. The snapshot itself is never
    /// modified.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn apply(&self, action: Action) -> Result<GameState, RuleViolation> {
        match (self, action) {
            (GameState::Setup(g), Action::Select(pos)) => Ok(g.select(pos)?.into()),
            (GameState::Setup(g), Action::Swap(pos)) => Ok(g.swap(pos)?.into()),
            (GameState::Setup(_), Action::Move { .. }) => Err(RuleViolation::NotStarted),
            (GameState::Setup(g), Action::Start) => Ok(g.clone().start().into()),
            (GameState::Setup(_), Action::Reset) => Ok(self.clone()),

            (GameState::Combat(g), Action::Select(pos)) => Ok(g.select(pos)?.into()),
            (GameState::Combat(_), Action::Swap(_)) => Err(RuleViolation::InvalidSwap),
            (GameState::Combat(g), Action::Move { to, direction }) => {
                Ok(g.apply_move(to, direction)?.into())
            }
            (GameState::Combat(_), Action::Start | Action::Reset) => {
                debug!("Game already under way");
                Ok(self.clone())
            }

            (GameState::Finished(g), Action::Start | Action::Reset) => {
                Ok(g.clone().restart().into())
            }
            (GameState::Finished(_), _) => {
                debug!("Game over, ignoring action");
                Ok(self.clone())
            }
        }
    }

    /// Snapshot left behind after `violation`.
    ///
    /// An off-board destination drops the selection; every other violation
    /// keeps the snapshot as it was.
    pub fn after_violation(&self, violation: &RuleViolation) -> GameState {
        match (self, violation) {
            (GameState::Combat(g), RuleViolation::OutOfBounds) => g.with_selection(None).into(),
            _ => self.clone(),
        }
    }
}

/// The engine a presentation layer drives.
///
/// Holds the current snapshot and the current error. Every operation
/// replaces the snapshot wholesale; a successful operation clears the
/// error, a rejected one records it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skirmish {
    state: GameState,
    error: Option<RuleViolation>,
}

impl Skirmish {
    /// Creates an engine at the start of setup.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine from an existing snapshot.
    #[instrument(skip(state))]
    pub fn from_state(state: GameState) -> Self {
        Self { state, error: None }
    }

    /// Handles a click on a square, in either phase.
    ///
    /// # Errors
    ///
    /// The rule the click broke; it also becomes [`Skirmish::error`].
    #[instrument(skip(self), fields(position = %pos))]
    pub fn select_or_toggle(&mut self, pos: Position) -> Result<(), RuleViolation> {
        self.dispatch(Action::Select(pos))
    }

    /// Swaps the selected piece with the piece on `target` during setup.
    ///
    /// # Errors
    ///
    /// [`RuleViolation::InvalidSwap`] or [`RuleViolation::NoCharacterSelected`].
    #[instrument(skip(self), fields(target = %target))]
    pub fn swap(&mut self, target: Position) -> Result<(), RuleViolation> {
        self.dispatch(Action::Swap(target))
    }

    /// Moves the selected piece during combat.
    ///
    /// # Errors
    ///
    /// [`RuleViolation::OutOfBounds`] (which also drops the selection),
    /// [`RuleViolation::FriendlyFire`], [`RuleViolation::IllegalGeometry`],
    /// [`RuleViolation::NoCharacterSelected`], or
    /// [`RuleViolation::NotStarted`] during setup.
    #[instrument(skip(self), fields(target = %target, direction = %direction))]
    pub fn apply_move(
        &mut self,
        target: Target,
        direction: Direction,
    ) -> Result<(), RuleViolation> {
        self.dispatch(Action::Move {
            to: target,
            direction,
        })
    }

    /// Moves the selected piece by the labelled move, as a move button does.
    ///
    /// The destination is the selection offset by `direction`; it may lie
    /// off the board.
    ///
    /// # Errors
    ///
    /// As [`Skirmish::apply_move`].
    #[instrument(skip(self), fields(direction = %direction))]
    pub fn apply_labelled(&mut self, direction: Direction) -> Result<(), RuleViolation> {
        let (dr, dc) = direction.delta();
        // Without a selection the target is never read.
        let target = self
            .selection()
            .map_or(Target::new(dr, dc), |sel| Target::from(sel.position).offset(dr, dc));
        self.apply_move(target, direction)
    }

    /// Legal moves for the current selection, recomputed from the board.
    pub fn enumerate_moves(&self) -> Vec<LegalMove> {
        self.state.legal_moves()
    }

    /// Starts combat, or begins a fresh setup once a winner is recorded.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        self.commit(Action::Start);
    }

    /// Begins a fresh setup if a winner is recorded.
    ///
    /// Returns `false`, changing nothing, while the game is undecided.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> bool {
        if !self.state.is_over() {
            debug!("Reset ignored, no winner yet");
            return false;
        }
        self.commit(Action::Reset);
        true
    }

    /// Current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Player to move.
    pub fn mover(&self) -> Owner {
        self.state.mover()
    }

    /// Winner, if decided.
    pub fn winner(&self) -> Option<Owner> {
        self.state.winner()
    }

    /// Error from the last rejected action, cleared by the next valid one.
    pub fn error(&self) -> Option<&RuleViolation> {
        self.error.as_ref()
    }

    /// Current selection.
    pub fn selection(&self) -> Option<&Selection> {
        self.state.selection()
    }

    /// Move log, oldest first.
    pub fn log(&self) -> &MoveLog {
        self.state.log()
    }

    fn dispatch(&mut self, action: Action) -> Result<(), RuleViolation> {
        match self.state.apply(action) {
            Ok(next) => {
                if next.phase() != self.state.phase() || next.winner() != self.state.winner() {
                    info!(phase = %next.phase(), status = %next.status_string(), "Phase changed");
                }
                self.state = next;
                self.error = None;
                Ok(())
            }
            Err(violation) => {
                warn!(%violation, ?action, "Action rejected");
                self.state = self.state.after_violation(&violation);
                self.error = Some(violation.clone());
                Err(violation)
            }
        }
    }

    fn commit(&mut self, action: Action) {
        if let Err(violation) = self.dispatch(action) {
            warn!(%violation, "Phase trigger rejected");
        }
    }
}
