//! End-to-end tests driving the engine the way a presentation layer does.

use strictly_skirmish::{
    Board, Direction, GameSetup, GameState, Occupant, Owner, Phase, PieceKind, Position,
    RuleViolation, Skirmish, Square, Target,
};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).expect("Position on board")
}

fn piece(owner: Owner, kind: PieceKind) -> Square {
    Square::Occupied(Occupant::new(owner, kind))
}

/// Engine already in combat over a hand-built board, `A` to move.
fn combat_over(board: Board) -> Skirmish {
    let mut game = Skirmish::from_state(GameSetup::from_board(board).into());
    game.start();
    game
}

#[test]
fn test_fresh_engine_is_in_setup() {
    let game = Skirmish::new();
    assert_eq!(game.phase(), Phase::Setup);
    assert_eq!(game.mover(), Owner::A);
    assert_eq!(game.board(), &Board::opening());
    assert!(game.error().is_none());
    assert!(game.log().is_empty());
    assert_eq!(
        game.state().status_string(),
        "Swap your characters in respective rows, then start the game."
    );
}

#[test]
fn test_setup_swap_by_clicks() {
    let mut game = Skirmish::new();
    game.select_or_toggle(pos(0, 0)).expect("Select P1");
    game.select_or_toggle(pos(0, 1)).expect("Swap with P2");

    assert_eq!(game.board().occupant(pos(0, 0)), Some(Occupant::new(Owner::A, PieceKind::P2)));
    assert_eq!(game.board().occupant(pos(0, 1)), Some(Occupant::new(Owner::A, PieceKind::P1)));
    assert!(game.selection().is_none());
}

#[test]
fn test_setup_swap_across_rows_rejected() {
    let mut game = Skirmish::new();
    game.select_or_toggle(pos(0, 0)).expect("Select P1");

    assert_eq!(game.swap(pos(4, 0)), Err(RuleViolation::InvalidSwap));
    assert_eq!(game.error(), Some(&RuleViolation::InvalidSwap));
    assert_eq!(game.board(), &Board::opening());
    assert!(game.selection().is_some());
}

#[test]
fn test_move_before_start_rejected() {
    let mut game = Skirmish::new();
    game.select_or_toggle(pos(0, 0)).expect("Select P1");

    let result = game.apply_move(Target::new(1, 0), Direction::Back);
    assert_eq!(result, Err(RuleViolation::NotStarted));
    assert_eq!(game.phase(), Phase::Setup);
}

#[test]
fn test_first_move_is_logged_and_passes_turn() {
    let mut game = Skirmish::new();
    game.start();
    game.select_or_toggle(pos(0, 0)).expect("Select P1");
    game.apply_move(Target::new(1, 0), Direction::Back).expect("Step toward B");

    assert_eq!(game.mover(), Owner::B);
    assert!(game.board().is_empty(pos(0, 0)));
    assert_eq!(game.board().occupant(pos(1, 0)), Some(Occupant::new(Owner::A, PieceKind::P1)));
    assert_eq!(game.log().lines(), vec!["A moved A-P1 using move B".to_string()]);
    assert_eq!(game.state().status_string(), "Current Turn: Player B");
}

#[test]
fn test_hero_two_cannot_step_straight() {
    let mut game = Skirmish::new();
    game.start();
    game.select_or_toggle(pos(0, 0)).expect("Select P1");
    game.apply_move(Target::new(1, 0), Direction::Back).expect("A moves");

    game.select_or_toggle(pos(4, 4)).expect("Select B-H2");
    let before = *game.board();
    let result = game.apply_move(Target::new(3, 4), Direction::Forward);

    assert_eq!(result, Err(RuleViolation::IllegalGeometry));
    assert_eq!(game.board(), &before);
    assert_eq!(game.mover(), Owner::B);
    assert_eq!(game.selection().map(|s| s.position), Some(pos(4, 4)));
}

#[test]
fn test_charge_captures_on_path_and_destination() {
    let board = Board::new()
        .with(pos(2, 2), piece(Owner::A, PieceKind::H1))
        .with(pos(1, 2), piece(Owner::B, PieceKind::P1))
        .with(pos(0, 2), piece(Owner::B, PieceKind::P2))
        .with(pos(4, 0), piece(Owner::B, PieceKind::H2));
    let mut game = combat_over(board);

    game.select_or_toggle(pos(2, 2)).expect("Select H1");
    game.apply_move(Target::new(0, 2), Direction::ChargeForward).expect("Charge");

    assert!(game.board().is_empty(pos(1, 2)));
    assert!(game.board().is_empty(pos(2, 2)));
    assert_eq!(game.board().occupant(pos(0, 2)), Some(Occupant::new(Owner::A, PieceKind::H1)));
    assert_eq!(game.board().count(Owner::B), 1);
    assert_eq!(game.log().last().map(|r| r.captures().len()), Some(2));
    assert_eq!(game.mover(), Owner::B);
}

#[test]
fn test_charge_over_friend_rejected() {
    let board = Board::new()
        .with(pos(2, 2), piece(Owner::A, PieceKind::H1))
        .with(pos(1, 2), piece(Owner::A, PieceKind::P1))
        .with(pos(4, 4), piece(Owner::B, PieceKind::P1));
    let mut game = combat_over(board);

    game.select_or_toggle(pos(2, 2)).expect("Select H1");
    let moves: Vec<&str> = game.enumerate_moves().iter().map(|m| m.direction.label()).collect();
    assert!(!moves.contains(&"2F"));

    let result = game.apply_move(Target::new(0, 2), Direction::ChargeForward);
    assert_eq!(result, Err(RuleViolation::IllegalGeometry));
    assert_eq!(game.board(), &board);
    assert!(game.log().is_empty());
}

#[test]
fn test_labelled_move_targets_offset_from_selection() {
    let mut game = Skirmish::new();
    game.start();
    assert_eq!(
        game.apply_labelled(Direction::Back),
        Err(RuleViolation::NoCharacterSelected)
    );

    game.select_or_toggle(pos(0, 3)).expect("Select H1");
    game.apply_labelled(Direction::ChargeBack).expect("Charge");
    assert_eq!(game.board().occupant(pos(2, 3)), Some(Occupant::new(Owner::A, PieceKind::H1)));

    game.select_or_toggle(pos(4, 0)).expect("Select B-P1");
    assert_eq!(game.apply_labelled(Direction::Left), Err(RuleViolation::OutOfBounds));
    assert!(game.selection().is_none());
}

#[test]
fn test_toggle_returns_to_prior_state() {
    let mut game = Skirmish::new();
    game.start();
    let before = game.state().clone();

    game.select_or_toggle(pos(0, 2)).expect("Select");
    game.select_or_toggle(pos(0, 2)).expect("Deselect");

    assert_eq!(game.state(), &before);
}

#[test]
fn test_out_of_bounds_drops_selection() {
    let mut game = Skirmish::new();
    game.start();
    game.select_or_toggle(pos(0, 0)).expect("Select P1");

    let result = game.apply_move(Target::new(-1, 0), Direction::Forward);
    assert_eq!(result, Err(RuleViolation::OutOfBounds));
    assert!(game.selection().is_none());
    assert_eq!(game.board(), &Board::opening());
}

#[test]
fn test_opponent_piece_click_rejected() {
    let mut game = Skirmish::new();
    game.start();

    assert_eq!(game.select_or_toggle(pos(4, 0)), Err(RuleViolation::NotYourTurn));
    assert_eq!(game.select_or_toggle(pos(2, 2)), Err(RuleViolation::NoCharacterSelected));
}

#[test]
fn test_click_on_own_piece_with_selection_is_friendly_fire() {
    let mut game = Skirmish::new();
    game.start();
    game.select_or_toggle(pos(0, 0)).expect("Select P1");

    assert_eq!(game.select_or_toggle(pos(0, 1)), Err(RuleViolation::FriendlyFire));
    assert_eq!(game.error(), Some(&RuleViolation::FriendlyFire));
    assert_eq!(game.selection().map(|s| s.position), Some(pos(0, 0)));
    assert_eq!(game.board(), &Board::opening());

    game.select_or_toggle(pos(0, 0)).expect("Deselect");
    game.select_or_toggle(pos(0, 1)).expect("Select P2 instead");
    assert_eq!(game.selection().map(|s| s.position), Some(pos(0, 1)));
    assert!(game.error().is_none());
}

#[test]
fn test_valid_action_clears_error() {
    let mut game = Skirmish::new();
    game.start();
    let _ = game.select_or_toggle(pos(4, 0));
    assert_eq!(game.error(), Some(&RuleViolation::NotYourTurn));

    game.select_or_toggle(pos(0, 0)).expect("Select own piece");
    assert!(game.error().is_none());
}

#[test]
fn test_win_keeps_mover_and_freezes_board() {
    let board = Board::new()
        .with(pos(1, 1), piece(Owner::A, PieceKind::H2))
        .with(pos(2, 2), piece(Owner::B, PieceKind::P3));
    let mut game = combat_over(board);

    game.select_or_toggle(pos(1, 1)).expect("Select H2");
    game.apply_move(Target::new(2, 2), Direction::BackRight).expect("Capture");

    assert_eq!(game.winner(), Some(Owner::A));
    assert_eq!(game.mover(), Owner::A);
    assert_eq!(game.state().status_string(), "Player A wins!");

    let frozen = game.state().clone();
    game.select_or_toggle(pos(2, 2)).expect("Clicks are ignored");
    assert_eq!(game.state(), &frozen);
}

#[test]
fn test_reset_only_after_win() {
    let mut game = Skirmish::new();
    game.start();
    assert!(!game.reset());
    assert_eq!(game.phase(), Phase::Combat);

    let board = Board::new()
        .with(pos(1, 1), piece(Owner::A, PieceKind::H2))
        .with(pos(2, 2), piece(Owner::B, PieceKind::P3));
    let mut game = combat_over(board);
    game.select_or_toggle(pos(1, 1)).expect("Select H2");
    game.select_or_toggle(pos(2, 2)).expect("Capture by click");
    assert!(game.state().is_over());

    assert!(game.reset());
    assert_eq!(game.phase(), Phase::Setup);
    assert_eq!(game.board(), &Board::opening());
    assert!(game.winner().is_none());
}

#[test]
fn test_start_twice_is_noop() {
    let mut game = Skirmish::new();
    game.start();
    game.select_or_toggle(pos(0, 0)).expect("Select");
    let before = game.state().clone();

    game.start();
    assert_eq!(game.state(), &before);
}

#[test]
fn test_occupant_count_never_grows() {
    let mut game = Skirmish::new();
    game.start();
    let script = [
        (pos(0, 3), Target::new(2, 3), Direction::ChargeBack),
        (pos(4, 3), Target::new(2, 3), Direction::ChargeForward),
        (pos(0, 4), Target::new(1, 3), Direction::BackLeft),
        (pos(2, 3), Target::new(0, 3), Direction::ChargeForward),
    ];

    let mut total = game.board().total();
    for (from, to, direction) in script {
        game.select_or_toggle(from).expect("Select");
        game.apply_move(to, direction).expect("Scripted move");
        let now = game.board().total();
        assert!(now <= total);
        total = now;
    }
    assert_eq!(game.log().len(), 4);
    assert_eq!(total, 8);
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut game = Skirmish::new();
    game.start();
    game.select_or_toggle(pos(0, 0)).expect("Select");
    game.apply_move(Target::new(1, 0), Direction::Back).expect("Move");

    let json = serde_json::to_string(game.state()).expect("Serialize");
    let restored: GameState = serde_json::from_str(&json).expect("Deserialize");
    assert_eq!(&restored, game.state());
}
