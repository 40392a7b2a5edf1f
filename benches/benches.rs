use gambit::{perft, Board, Color, Move, Role, Square};
use iai::black_box;
use rand::{rngs::StdRng, SeedableRng};

fn setup(pieces: &str) -> Board {
    let mut board = Board::empty();
    for token in pieces.split_whitespace() {
        let letter = token.chars().next().expect("piece letter");
        let role = Role::from_char(letter).expect("valid piece letter");
        let square: Square = token[1..].parse().expect("valid square");
        board
            .add_piece(Color::from_white(letter.is_ascii_uppercase()), role, square)
            .expect("empty square");
    }
    board
}

fn bench_shallow_perft() {
    let mut board = Board::new();
    assert_eq!(black_box(perft(black_box(&mut board), 3)), 8902);
}

fn bench_deep_perft() {
    let mut board = Board::new();
    assert_eq!(perft(black_box(&mut board), 4), 197_281);
}

fn bench_kiwipete() {
    let mut board = setup(
        "Ra1 Ke1 Rh1 Pa2 Pb2 Pc2 Bd2 Be2 Pf2 Pg2 Ph2 Nc3 Qf3 ph3 pb4 Pe4 Pd5 Ne5 \
         pe6 nb6 nf6 pg6 pa7 pc7 pd7 qe7 pf7 bg7 ra8 ke8 rh8 ba6",
    );
    assert_eq!(perft(black_box(&mut board), 3), 97_862);
}

fn bench_generate_moves() {
    let mut board = Board::new();
    assert_eq!(black_box(&mut board).legal_moves().len(), 20);
}

fn bench_play_undo() -> Board {
    let mut board = black_box(Board::new());
    let m = board
        .find_move(Square::G1, Square::F3, None)
        .expect("legal move");
    for _ in 0..100 {
        board.play(black_box(m)).expect("playable");
        board.undo_move().expect("undoable");
    }
    board
}

fn bench_recommended_move() -> Option<Move> {
    let mut board = black_box(Board::new());
    let mut rng = StdRng::seed_from_u64(0);
    board.recommended_move(2, &mut rng)
}

iai::main!(
    bench_shallow_perft,
    bench_deep_perft,
    bench_kiwipete,
    bench_generate_moves,
    bench_play_undo,
    bench_recommended_move,
);
