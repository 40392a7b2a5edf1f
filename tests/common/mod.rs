#![allow(dead_code)]

use gambit::{Board, Color, Move, Role, Square};

/// Builds a board from tokens like `Ke1 pd7`, uppercase for White. White is
/// to move and no piece has moved yet.
pub fn setup(pieces: &str) -> Board {
    let mut board = Board::empty();
    for token in pieces.split_whitespace() {
        let mut chars = token.chars();
        let letter = chars.next().expect("piece letter");
        let role = Role::from_char(letter).expect("valid piece letter");
        let color = Color::from_white(letter.is_ascii_uppercase());
        let square: Square = chars.as_str().parse().expect("valid square");
        board.add_piece(color, role, square).expect("empty square");
    }
    board
}

/// Finds the valid move given in coordinate notation, e.g. `e2e4` or `a7a8q`.
pub fn find(board: &mut Board, uci: &str) -> Option<Move> {
    let from: Square = uci[0..2].parse().expect("from square");
    let to: Square = uci[2..4].parse().expect("to square");
    let promotion = uci[4..].chars().next().map(|ch| Role::from_char(ch).expect("promotion"));
    board.find_move(from, to, promotion)
}

pub fn play_line(board: &mut Board, line: &str) {
    for uci in line.split_whitespace() {
        let m = find(board, uci).unwrap_or_else(|| panic!("{uci} is not a valid move"));
        board.play(m).expect("valid move plays");
    }
}

pub fn after(line: &str) -> Board {
    let mut board = Board::new();
    play_line(&mut board, line);
    board
}
