//! Properties of the win evaluator over whole families of boards.

use rewind_tictactoe::rules::LINES;
use rewind_tictactoe::{Board, Player, Position, Square, check_winner, is_draw, is_full};

/// Every board over {Empty, X, O}, 3^9 of them.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in squares.iter_mut() {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

fn count(board: &Board, player: Player) -> usize {
    board
        .squares()
        .iter()
        .filter(|s| **s == Square::Occupied(player))
        .count()
}

#[test]
fn test_no_winner_before_fifth_mark() {
    let reachable_early = all_boards().filter(|board| {
        let (x, o) = (count(board, Player::X), count(board, Player::O));
        (x == o || x == o + 1) && board.occupied() < 5
    });

    for board in reachable_early {
        assert_eq!(check_winner(&board), None, "{}", board.display());
    }
}

fn owner(board: &Board, line: [Position; 3]) -> Option<Player> {
    let [a, b, c] = line.map(|pos| board.get(pos));
    (a == b && b == c).then(|| a.player()).flatten()
}

#[test]
fn test_every_line_wins_regardless_of_other_squares() {
    for line in LINES {
        let others: Vec<Position> = Position::ALL
            .iter()
            .copied()
            .filter(|pos| !line.contains(pos))
            .collect();

        for player in [Player::X, Player::O] {
            // Remaining six squares take every combination of empty / X / O.
            for mut code in 0..3usize.pow(others.len() as u32) {
                let mut board = line
                    .iter()
                    .fold(Board::new(), |board, pos| board.with_mark(*pos, player));
                for pos in &others {
                    board = match code % 3 {
                        0 => board,
                        1 => board.with_mark(*pos, Player::X),
                        _ => board.with_mark(*pos, Player::O),
                    };
                    code /= 3;
                }

                // First complete line in evaluation order decides the result.
                let expected = LINES.into_iter().find_map(|l| owner(&board, l));
                assert_eq!(check_winner(&board), expected, "{}", board.display());

                let opponent_has_line = LINES
                    .into_iter()
                    .any(|l| owner(&board, l) == Some(player.opponent()));
                if !opponent_has_line {
                    assert_eq!(check_winner(&board), Some(player), "{}", board.display());
                }
            }
        }
    }
}

#[test]
fn test_both_players_complete_a_line_first_line_wins() {
    // X holds the top row, O the bottom row: rows are checked top to bottom.
    let board = [Position::TopLeft, Position::TopCenter, Position::TopRight]
        .into_iter()
        .fold(Board::new(), |board, pos| board.with_mark(pos, Player::X));
    let board = [Position::BottomLeft, Position::BottomCenter, Position::BottomRight]
        .into_iter()
        .fold(board, |board, pos| board.with_mark(pos, Player::O));
    assert_eq!(check_winner(&board), Some(Player::X));

    // O's left column comes before X's right column.
    let board = [Position::TopRight, Position::MiddleRight, Position::BottomRight]
        .into_iter()
        .fold(Board::new(), |board, pos| board.with_mark(pos, Player::X));
    let board = [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
        .into_iter()
        .fold(board, |board, pos| board.with_mark(pos, Player::O));
    assert_eq!(check_winner(&board), Some(Player::O));
}

#[test]
fn test_line_with_opponent_elsewhere() {
    // O fills the middle column, X scattered where it completes nothing.
    let board = Board::new()
        .with_mark(Position::TopCenter, Player::O)
        .with_mark(Position::Center, Player::O)
        .with_mark(Position::BottomCenter, Player::O)
        .with_mark(Position::TopLeft, Player::X)
        .with_mark(Position::MiddleRight, Player::X)
        .with_mark(Position::BottomLeft, Player::X);
    assert_eq!(check_winner(&board), Some(Player::O));
}

#[test]
fn test_draw_reports_no_winner() {
    use Player::{O, X};
    // X O X / X O O / O X X
    let board = Position::ALL
        .iter()
        .zip([X, O, X, X, O, O, O, X, X])
        .fold(Board::new(), |board, (pos, player)| board.with_mark(*pos, player));

    assert!(is_full(&board));
    assert_eq!(check_winner(&board), None);
    assert!(is_draw(&board));
}

#[test]
fn test_evaluation_is_deterministic() {
    let board = Board::new()
        .with_mark(Position::TopLeft, Player::X)
        .with_mark(Position::Center, Player::X)
        .with_mark(Position::BottomRight, Player::X);
    let first = check_winner(&board);
    for _ in 0..10 {
        assert_eq!(check_winner(&board), first);
    }
}
