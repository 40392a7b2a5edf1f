mod common;

use gambit::{Board, Color};
use serde::Deserialize;
use serde_with::{formats::SpaceSeparator, serde_as, StringWithSeparator};

#[serde_as]
#[derive(Deserialize)]
struct Record {
    #[serde_as(as = "StringWithSeparator<SpaceSeparator, String>")]
    moves: Vec<String>,
    check: bool,
    draw: bool,
    checkmate: bool,
    white: u32,
    black: u32,
}

#[test]
fn test_games() {
    let mut reader = csv::Reader::from_path("tests/games.csv").expect("reader");

    for (i, record) in reader.deserialize().enumerate() {
        let record: Record = record.expect("record");

        let mut board = Board::new();
        for uci in &record.moves {
            let m = common::find(&mut board, uci)
                .unwrap_or_else(|| panic!("line {}: {} is not valid", i + 1, uci));
            board.play(m).expect("valid move plays");
        }

        let status = board.status();
        assert_eq!(status.is_check(), record.check, "line {}", i + 1);
        assert_eq!(status.is_draw(), record.draw, "line {}", i + 1);
        assert_eq!(status.is_checkmate(), record.checkmate, "line {}", i + 1);
        assert_eq!(board.score(Color::White), record.white, "line {}", i + 1);
        assert_eq!(board.score(Color::Black), record.black, "line {}", i + 1);

        assert!(!(status.is_draw() && status.is_checkmate()));

        for _ in &record.moves {
            board.undo_move().expect("undo");
        }
        assert_eq!(board, Board::new(), "line {}", i + 1);
    }
}
