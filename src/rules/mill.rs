//! Mill detection and the capture-protection rule.
//!
//! All functions are pure reads of a `Board`. Hypothetical questions
//! ("would this move close a mill?") are answered without touching the
//! board, so the AI can ask them against a shared snapshot.

use crate::board::{Board, LINES_THROUGH, MILL_LINES};
use crate::core::{Player, Position};

/// The mill lines that pass through `pos` (two for every valid position).
pub fn mill_lines_through(pos: Position) -> impl Iterator<Item = [Position; 3]> {
    LINES_THROUGH
        .get(pos.index())
        .into_iter()
        .flatten()
        .map(|&line| MILL_LINES[line].map(Position))
}

/// True iff some line through `pos` is fully owned by `owner`.
#[must_use]
pub fn forms_mill(board: &Board, pos: Position, owner: Player) -> bool {
    mill_lines_through(pos).any(|line| line.iter().all(|&p| board.owner_at(p) == Some(owner)))
}

/// Whether the stone at `pos` is part of a mill. False for empty positions.
#[must_use]
pub fn is_in_mill(board: &Board, pos: Position) -> bool {
    board
        .owner_at(pos)
        .is_some_and(|owner| forms_mill(board, pos, owner))
}

/// Would a stone of `owner` arriving at `dest` close a mill?
///
/// `vacated` is the square the stone leaves (for moves), which no longer
/// counts towards any line.
#[must_use]
pub fn would_form_mill(
    board: &Board,
    dest: Position,
    owner: Player,
    vacated: Option<Position>,
) -> bool {
    mill_lines_through(dest).any(|line| {
        line.iter()
            .filter(|&&p| p != dest)
            .all(|&p| Some(p) != vacated && board.owner_at(p) == Some(owner))
    })
}

/// Capture-protection rule.
///
/// A `defender` stone may be removed if it is not in a mill, or if every
/// one of the defender's stones is in a mill.
#[must_use]
pub fn can_capture(board: &Board, pos: Position, defender: Player) -> bool {
    if board.owner_at(pos) != Some(defender) {
        return false;
    }
    !is_in_mill(board, pos) || all_in_mills(board, defender)
}

/// The defender's stones that the protection rule allows removing.
#[must_use]
pub fn removable_positions(board: &Board, defender: Player) -> Vec<Position> {
    let every_stone_protected = all_in_mills(board, defender);
    board
        .positions_owned_by(defender)
        .filter(|&p| every_stone_protected || !is_in_mill(board, p))
        .collect()
}

fn all_in_mills(board: &Board, player: Player) -> bool {
    board
        .positions_owned_by(player)
        .all(|p| is_in_mill(board, p))
}

/// Number of complete mills `owner` currently has.
#[must_use]
pub fn count_mills(board: &Board, owner: Player) -> usize {
    MILL_LINES
        .iter()
        .filter(|line| line.iter().all(|&p| board.owner_at(Position(p)) == Some(owner)))
        .count()
}

/// Lines holding two of `owner`'s stones and one empty position: mills
/// that a single stone can close.
#[must_use]
pub fn open_two_lines(board: &Board, owner: Player) -> Vec<[Position; 3]> {
    MILL_LINES
        .iter()
        .map(|line| line.map(Position))
        .filter(|line| is_open_two(board, line, owner))
        .collect()
}

/// Whether the stone at `pos` lies on one of its owner's open-two lines.
#[must_use]
pub fn sits_on_open_two(board: &Board, pos: Position) -> bool {
    let Some(owner) = board.owner_at(pos) else {
        return false;
    };
    open_two_lines(board, owner)
        .iter()
        .any(|line| line.contains(&pos))
}

fn is_open_two(board: &Board, line: &[Position; 3], owner: Player) -> bool {
    let own = line.iter().filter(|&&p| board.owner_at(p) == Some(owner)).count();
    let empty = line.iter().filter(|&&p| board.is_empty(p)).count();
    own == 2 && empty == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, owner) in stones {
            assert!(board.place(Position(pos), owner));
        }
        board
    }

    #[test]
    fn test_forms_mill_row() {
        let board = board_with(&[(0, Player::One), (1, Player::One), (2, Player::One)]);

        assert!(forms_mill(&board, Position(2), Player::One));
        assert!(forms_mill(&board, Position(0), Player::One));
        assert!(!forms_mill(&board, Position(2), Player::Two));
        assert!(!forms_mill(&board, Position(9), Player::One));
    }

    #[test]
    fn test_forms_mill_column() {
        let board = board_with(&[(0, Player::Two), (9, Player::Two), (21, Player::Two)]);
        assert!(forms_mill(&board, Position(9), Player::Two));
    }

    #[test]
    fn test_mixed_line_is_not_mill() {
        let board = board_with(&[(0, Player::One), (1, Player::Two), (2, Player::One)]);
        assert!(!forms_mill(&board, Position(0), Player::One));
        assert!(!is_in_mill(&board, Position(1)));
    }

    #[test]
    fn test_out_of_range_never_mills() {
        let board = Board::new();
        assert!(!forms_mill(&board, Position(24), Player::One));
        assert_eq!(mill_lines_through(Position(77)).count(), 0);
    }

    #[test]
    fn test_is_in_mill_empty_position() {
        let board = Board::new();
        assert!(!is_in_mill(&board, Position(4)));
    }

    #[test]
    fn test_would_form_mill_placement() {
        let board = board_with(&[(3, Player::One), (4, Player::One)]);

        assert!(would_form_mill(&board, Position(5), Player::One, None));
        assert!(!would_form_mill(&board, Position(5), Player::Two, None));
        assert!(!would_form_mill(&board, Position(6), Player::One, None));
    }

    #[test]
    fn test_would_form_mill_ignores_vacated_square() {
        let board = board_with(&[
            (0, Player::One),
            (1, Player::One),
            (2, Player::One),
            (12, Player::One),
            (13, Player::One),
        ]);

        // 2 -> 14 closes the 12-13-14 row even though it leaves 0-1-2.
        assert!(would_form_mill(&board, Position(14), Player::One, Some(Position(2))));

        // Stone leaving 1 breaks the row it would otherwise complete.
        let board = board_with(&[(0, Player::One), (1, Player::One), (4, Player::One)]);
        assert!(!would_form_mill(&board, Position(2), Player::One, Some(Position(1))));
        assert!(would_form_mill(&board, Position(2), Player::One, Some(Position(4))));
    }

    #[test]
    fn test_can_capture_unprotected() {
        let board = board_with(&[
            (0, Player::Two),
            (1, Player::Two),
            (2, Player::Two),
            (10, Player::Two),
        ]);

        assert!(can_capture(&board, Position(10), Player::Two));
        assert!(!can_capture(&board, Position(1), Player::Two));
        // Not the defender's stone
        assert!(!can_capture(&board, Position(1), Player::One));
        assert!(!can_capture(&board, Position(5), Player::Two));
    }

    #[test]
    fn test_can_capture_all_protected() {
        let board = board_with(&[
            (0, Player::Two),
            (1, Player::Two),
            (2, Player::Two),
            (9, Player::Two),
            (21, Player::Two),
        ]);

        for pos in [0, 1, 2, 9, 21] {
            assert!(can_capture(&board, Position(pos), Player::Two));
        }
        assert_eq!(removable_positions(&board, Player::Two).len(), 5);
    }

    #[test]
    fn test_removable_positions_skip_protected() {
        let board = board_with(&[
            (3, Player::One),
            (4, Player::One),
            (5, Player::One),
            (23, Player::One),
            (22, Player::Two),
        ]);

        assert_eq!(removable_positions(&board, Player::One), vec![Position(23)]);
        assert_eq!(removable_positions(&board, Player::Two), vec![Position(22)]);
    }

    #[test]
    fn test_count_mills() {
        let board = board_with(&[
            (0, Player::One),
            (1, Player::One),
            (2, Player::One),
            (9, Player::One),
            (21, Player::One),
        ]);
        assert_eq!(count_mills(&board, Player::One), 2);
        assert_eq!(count_mills(&board, Player::Two), 0);
    }

    #[test]
    fn test_sits_on_open_two() {
        let board = board_with(&[(6, Player::Two), (7, Player::Two), (11, Player::One)]);

        assert!(sits_on_open_two(&board, Position(6)));
        assert!(sits_on_open_two(&board, Position(7)));
        assert!(!sits_on_open_two(&board, Position(11)));
        assert!(!sits_on_open_two(&board, Position(8)));
    }

    #[test]
    fn test_open_two_lines() {
        let board = board_with(&[
            (6, Player::Two),
            (7, Player::Two),
            (21, Player::Two),
            (22, Player::Two),
            (23, Player::One),
        ]);

        let lines = open_two_lines(&board, Player::Two);
        assert_eq!(lines, vec![[Position(6), Position(7), Position(8)]]);
        assert!(open_two_lines(&board, Player::One).is_empty());
    }
}
