//! Tests for the phase types, move contract, and invariants.

use strictly_skirmish::{
    Action, Board, Contract, Direction, GameInProgress, GameResult, GameSetup, GameState,
    InvariantSet, Move, MoveContract, Occupant, Owner, PieceKind, Position, RuleViolation,
    SkirmishInvariants, Square, Target,
};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).expect("Position on board")
}

fn advance(game: &GameInProgress, action: Move) -> GameInProgress {
    match game.make_move(action).expect("Valid move") {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("Game shouldn't finish"),
    }
}

#[test]
fn test_typestate_lifecycle() {
    let game = GameSetup::new()
        .select(pos(4, 3))
        .and_then(|g| g.swap(pos(4, 4)))
        .expect("Valid swap")
        .start();
    assert_eq!(game.to_move(), Owner::A);
    assert_eq!(
        game.board().occupant(pos(4, 3)),
        Some(Occupant::new(Owner::B, PieceKind::H2))
    );

    let game = advance(&game, Move::new(Owner::A, pos(0, 1), Target::new(1, 1), Direction::Back));
    assert_eq!(game.to_move(), Owner::B);

    let game = advance(
        &game,
        Move::new(Owner::B, pos(4, 3), Target::new(3, 2), Direction::ForwardLeft),
    );
    assert_eq!(game.to_move(), Owner::A);
    assert_eq!(game.log().len(), 2);
}

#[test]
fn test_wrong_player_rejected() {
    let game = GameSetup::new().start();
    let action = Move::new(Owner::B, pos(4, 0), Target::new(3, 0), Direction::Forward);
    assert_eq!(game.make_move(action), Err(RuleViolation::NotYourTurn));
}

#[test]
fn test_replay_from_log() {
    let game = GameSetup::new().start();
    let game = advance(
        &game,
        Move::new(Owner::A, pos(0, 3), Target::new(2, 3), Direction::ChargeBack),
    );
    let game = advance(
        &game,
        Move::new(Owner::B, pos(4, 3), Target::new(2, 3), Direction::ChargeForward),
    );

    match GameInProgress::replay(Board::opening(), game.log().entries()).expect("Valid replay") {
        GameResult::InProgress(replayed) => {
            assert_eq!(replayed.board(), game.board());
            assert_eq!(replayed.board().count(Owner::A), 4);
            assert_eq!(replayed.to_move(), Owner::A);
        }
        GameResult::Finished(_) => panic!("Game shouldn't finish"),
    }
}

#[test]
fn test_invariants_hold_through_play() {
    let mut game = GameSetup::new().start();
    assert!(SkirmishInvariants::check_all(&game).is_ok());

    for action in [
        Move::new(Owner::A, pos(0, 4), Target::new(1, 3), Direction::BackLeft),
        Move::new(Owner::B, pos(4, 0), Target::new(3, 0), Direction::Forward),
        Move::new(Owner::A, pos(1, 3), Target::new(2, 4), Direction::BackRight),
    ] {
        let next = advance(&game, action);
        assert!(MoveContract::post(&game, &next).is_ok());
        assert!(SkirmishInvariants::check_all(&next).is_ok());
        game = next;
    }
}

#[test]
fn test_contract_rejects_before_touching_state() {
    let game = GameSetup::new().start();
    let action = Move::new(Owner::A, pos(0, 3), Target::new(0, 5), Direction::ChargeRight);
    assert_eq!(MoveContract::pre(&game, &action), Err(RuleViolation::OutOfBounds));
    assert_eq!(game.board(), &Board::opening());
}

#[test]
fn test_state_apply_leaves_snapshot_untouched() {
    let state = GameState::from(GameSetup::new().start());
    let next = state.apply(Action::Select(pos(0, 0))).expect("Select");

    assert!(state.selection().is_none());
    assert_eq!(next.selection().map(|s| s.position), Some(pos(0, 0)));

    let rejected = next.apply(Action::Move {
        to: Target::new(0, 1),
        direction: Direction::Right,
    });
    assert_eq!(rejected, Err(RuleViolation::FriendlyFire));
}

#[test]
fn test_swap_during_combat_rejected() {
    let state = GameState::from(GameSetup::new().start());
    assert_eq!(state.apply(Action::Swap(pos(0, 1))), Err(RuleViolation::InvalidSwap));
}

#[test]
fn test_finished_game_restarts_into_setup() {
    let board = Board::new()
        .with(pos(3, 3), Square::Occupied(Occupant::new(Owner::A, PieceKind::P1)))
        .with(pos(2, 3), Square::Occupied(Occupant::new(Owner::B, PieceKind::P2)));
    let game = GameSetup::from_board(board).start();

    let GameResult::Finished(done) = game
        .make_move(Move::new(Owner::A, pos(3, 3), Target::new(2, 3), Direction::Forward))
        .expect("Winning move")
    else {
        panic!("Expected finished game");
    };
    assert_eq!(done.winner(), Owner::A);

    let state = GameState::from(done).apply(Action::Start).expect("Restart");
    assert_eq!(state, GameState::new());
}
