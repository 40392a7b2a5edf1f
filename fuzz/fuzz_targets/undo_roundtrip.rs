#![no_main]

use gambit::Board;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|choices: Vec<u8>| {
    let mut board = Board::new();
    let mut snapshots = Vec::new();

    for choice in choices.into_iter().take(64) {
        let legals = board.legal_moves();
        if legals.is_empty() {
            break;
        }
        snapshots.push(board.clone());
        let m = legals[usize::from(choice) % legals.len()];
        board.play(m).expect("legal move plays");
    }

    while let Some(snapshot) = snapshots.pop() {
        board.undo_move().expect("undo");
        assert_eq!(board, snapshot);
    }
});
