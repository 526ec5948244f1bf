//! Plain-text drawing of the board and player panel.
//!
//! Each square shows its number, an `S` on a snake head or `L` on a ladder
//! bottom, and the seat numbers of any tokens standing on it:
//!
//! ```text
//! +--------+--------+ ...
//! |100     | 99     | ...
//! ```

use std::fmt::Write;

use crate::board::{Cell, TransportKind, GRID_SIZE};
use crate::core::DiceSource;
use crate::engine::{GameSession, TurnPhase};

const SQUARE_WIDTH: usize = 8;

/// Draw the 10×10 board with tokens.
#[must_use]
pub fn render_board<D: DiceSource>(session: &GameSession<D>) -> String {
    let size = GRID_SIZE as usize;
    let mut grid = vec![vec![String::new(); size]; size];
    for cell in Cell::all() {
        let coord = cell.coordinate();
        grid[coord.row as usize][coord.column as usize] = square(session, cell);
    }

    let divider = format!("+{}\n", format!("{}+", "-".repeat(SQUARE_WIDTH)).repeat(size));
    let mut out = divider.clone();
    for row in grid {
        out.push('|');
        for text in row {
            let _ = write!(out, "{text:<SQUARE_WIDTH$}|");
        }
        out.push('\n');
        out.push_str(&divider);
    }
    out
}

fn square<D: DiceSource>(session: &GameSession<D>, cell: Cell) -> String {
    let marker = match session.topology().transport_at(cell).map(|t| t.kind) {
        Some(TransportKind::Snake) => 'S',
        Some(TransportKind::Ladder) => 'L',
        None => ' ',
    };
    let tokens: String = session
        .positions()
        .iter()
        .filter(|(_, pos)| pos.cell() == Some(cell))
        .map(|(player, _)| char::from(b'0' + player.number()))
        .collect();
    format!("{:>3}{marker}{tokens}", cell.number())
}

/// Snake and ladder key, one transport per line.
#[must_use]
pub fn render_legend<D: DiceSource>(session: &GameSession<D>) -> String {
    let topology = session.topology();
    let mut out = String::new();
    let snakes: Vec<String> = topology
        .snakes()
        .iter()
        .map(|(head, tail)| format!("{head}->{tail}"))
        .collect();
    let ladders: Vec<String> = topology
        .ladders()
        .iter()
        .map(|(bottom, top)| format!("{bottom}->{top}"))
        .collect();
    let _ = writeln!(out, "Snakes:  {}", snakes.join(", "));
    let _ = writeln!(out, "Ladders: {}", ladders.join(", "));
    out
}

/// Player positions and the turn message.
#[must_use]
pub fn render_status<D: DiceSource>(session: &GameSession<D>) -> String {
    let mut out = String::new();
    for (player, position) in session.positions().iter() {
        let pointer = if !session.is_over() && player == session.current_player() {
            '>'
        } else {
            ' '
        };
        let status = match position.cell() {
            None => "Not started".to_string(),
            Some(cell) => format!("Position: {cell}"),
        };
        let _ = writeln!(out, "{pointer} {player}: {status}");
    }
    let _ = writeln!(out, "{}", turn_message(session.phase()));
    out
}

/// The headline shown under the player list.
#[must_use]
pub fn turn_message(phase: TurnPhase) -> String {
    match phase {
        TurnPhase::AwaitingRoll(player) => format!("{player}'s turn"),
        TurnPhase::Resolving { .. } => "Moving...".to_string(),
        TurnPhase::GameOver(winner) => format!("{winner} wins!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardTopology;
    use crate::core::{DieFace, PlayerId, ScriptedDice};

    fn session() -> GameSession<ScriptedDice> {
        GameSession::new(2, ScriptedDice::new([1]).unwrap()).unwrap()
    }

    #[test]
    fn test_board_layout() {
        let board = render_board(&session());
        let lines: Vec<&str> = board.lines().collect();

        // 10 rows of squares, each followed by a divider, plus the top divider.
        assert_eq!(lines.len(), 21);
        assert!(lines[1].starts_with("|100"));
        assert!(lines[19].starts_with("|  1L"));
        assert!(lines[19].ends_with("| 10     |"));
        // Second row from the bottom runs right to left.
        assert!(lines[17].starts_with("| 20"));
    }

    #[test]
    fn test_tokens_are_drawn() {
        let mut s = session();
        s.apply_roll(DieFace::SIX).unwrap();

        let board = render_board(&s);
        assert!(board.contains(" 38 1"));
    }

    #[test]
    fn test_plain_board_has_no_markers() {
        let dice = ScriptedDice::new([1]).unwrap();
        let s = GameSession::with_topology(2, BoardTopology::empty(), dice).unwrap();
        let board = render_board(&s);
        assert!(!board.contains('S'));
        assert!(!board.contains('L'));
    }

    #[test]
    fn test_legend() {
        let legend = render_legend(&session());
        assert!(legend.starts_with("Snakes:  17->7, 54->34"));
        assert!(legend.contains("Ladders: 1->38, 4->14"));
    }

    #[test]
    fn test_status_and_messages() {
        let status = render_status(&session());
        assert!(status.contains("> Player 1: Not started"));
        assert!(status.contains("  Player 2: Not started"));
        assert!(status.ends_with("Player 1's turn\n"));

        assert_eq!(turn_message(TurnPhase::GameOver(PlayerId::new(2))), "Player 2 wins!");
    }
}
