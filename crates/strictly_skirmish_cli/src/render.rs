//! Plain-text rendering of engine snapshots.

use strictly_skirmish::{BOARD_SIZE, GameState, LegalMove, MoveLog, RuleViolation, Square};

/// Board grid with row and column indices; the selected square is bracketed.
pub fn board(state: &GameState) -> String {
    let selected = state.selection().map(|s| s.position);
    let header: String = (0..BOARD_SIZE).map(|col| format!("   {col}  ")).collect();

    let mut lines = vec![format!("  {}", header.trim_end())];
    for (row, squares) in state.board().rows().iter().enumerate() {
        let cells: Vec<String> = squares
            .iter()
            .enumerate()
            .map(|(col, square)| {
                let text = match square {
                    Square::Empty => " .. ".to_string(),
                    Square::Occupied(o) => o.to_string(),
                };
                if selected.is_some_and(|p| p.row() == row && p.col() == col) {
                    format!("[{text}]")
                } else {
                    format!(" {text} ")
                }
            })
            .collect();
        lines.push(format!("{row} {}", cells.join("")));
    }
    lines.join("\n")
}

/// Legal moves as `LABEL -> (r, c)`, or a note when there are none.
pub fn moves(moves: &[LegalMove]) -> String {
    if moves.is_empty() {
        return "No legal moves.".to_string();
    }
    let listed: Vec<String> = moves.iter().map(ToString::to_string).collect();
    format!("Moves: {}", listed.join(", "))
}

/// Numbered move log.
pub fn history(log: &MoveLog) -> String {
    if log.is_empty() {
        return "No moves yet.".to_string();
    }
    log.lines()
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>3}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Board, status line, and current error, as shown after each command.
pub fn frame(state: &GameState, error: Option<&RuleViolation>) -> String {
    let mut out = format!("{}\n{}", board(state), state.status_string());
    if let Some(selection) = state.selection() {
        out.push_str(&format!("\nSelected: {} at {}", selection.occupant, selection.position));
    }
    if let Some(error) = error {
        out.push_str(&format!("\nError: {error}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_skirmish::{Action, Position};

    #[test]
    fn test_board_marks_selection() {
        let state = GameState::new()
            .apply(Action::Select(Position::new(0, 0).unwrap()))
            .unwrap();
        let text = board(&state);
        assert!(text.contains("[A-P1]"));
        assert!(text.lines().nth(5).unwrap().starts_with("4  B-P1"));
    }

    #[test]
    fn test_empty_listings() {
        assert_eq!(moves(&[]), "No legal moves.");
        assert_eq!(history(&MoveLog::new()), "No moves yet.");
    }

    #[test]
    fn test_frame_shows_error() {
        let state = GameState::new();
        let text = frame(&state, Some(&RuleViolation::NotYourTurn));
        assert!(text.ends_with("Error: It is not your turn."));
    }
}
