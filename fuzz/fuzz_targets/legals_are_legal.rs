#![no_main]

use arbitrary::Arbitrary;
use gambit::{Board, Color, Role, Square};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Data {
    pieces: Vec<(Color, Role, Square)>,
}

fuzz_target!(|data: Data| {
    let mut board = Board::empty();
    for (color, role, square) in data.pieces.into_iter().take(8) {
        let _ = board.add_piece(color, role, square);
    }

    let turn = board.turn();
    let legals = board.legal_moves();
    for m in board.possible_moves(turn).collect::<Vec<_>>() {
        assert_eq!(legals.contains(&m), board.is_valid(m));
    }
    for m in legals {
        let before = board.clone();
        board.play(m).expect("legal move plays");
        assert!(!board.check(turn));
        board.undo_move().expect("undo");
        assert_eq!(board, before);
    }
});
