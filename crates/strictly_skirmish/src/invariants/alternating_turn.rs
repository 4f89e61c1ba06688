//! Alternating turn invariant: A, B, A, B, ...

use super::super::{GameInProgress, Owner};
use super::Invariant;

/// Invariant: players alternate, starting with `A`.
///
/// The log must read A, B, A, B, ... and the player to move must be the
/// one after the last logged mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let entries = game.log().entries();

        if let Some(first) = entries.first()
            && *first.mover() != Owner::A
        {
            return false;
        }

        if entries.windows(2).any(|w| w[0].mover() == w[1].mover()) {
            return false;
        }

        let expected_next = if entries.len() % 2 == 0 {
            Owner::A
        } else {
            Owner::B
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (A, B, A, B, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, GameResult, GameSetup, Position, Target};

    #[test]
    fn test_fresh_game_holds() {
        let game = GameSetup::new().start();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_single_move_holds() {
        let game = GameSetup::new().start();
        let Ok(GameResult::InProgress(game)) = game.select(Position::new(0, 1).unwrap()) else {
            panic!("Expected selection");
        };
        let Ok(GameResult::InProgress(game)) = game.apply_move(Target::new(1, 1), Direction::Back)
        else {
            panic!("Expected in-progress game");
        };
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Owner::B);
    }

    #[test]
    fn test_wrong_mover_violates() {
        let mut game = GameSetup::new().start();
        game.to_move = Owner::B;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
