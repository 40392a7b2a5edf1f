use rand::{seq::SliceRandom, Rng};

use crate::{
    m::{Move, MoveList},
    search::{alphabeta, Game, SCORE_DRAW, SCORE_INFINITY, SCORE_MATE},
    Board, Color,
};

impl Game for Board {
    type Player = Color;
    type Move = Move;
    type Moves = MoveList;

    fn current_player(&self) -> Color {
        self.turn()
    }

    fn is_game_over(&mut self) -> bool {
        self.status().is_game_over()
    }

    /// Mates score `SCORE_MATE - depth`, positive for the mating side, so
    /// that quicker mates are preferred. Otherwise the material balance.
    fn heuristic_value(&mut self, player: Color, depth: u32) -> i32 {
        let status = self.status();
        if status.is_checkmate() {
            let mate = SCORE_MATE - depth as i32;
            if self.turn() == player {
                -mate
            } else {
                mate
            }
        } else if status.is_draw() {
            SCORE_DRAW
        } else {
            self.score(player) as i32 - self.score(!player) as i32
        }
    }

    fn legal_moves(&mut self) -> MoveList {
        Board::legal_moves(self)
    }

    fn apply_move(&mut self, m: Move) {
        self.play(m).expect("searched moves fit the board");
    }

    fn undo_move(&mut self) {
        Board::undo_move(self).expect("searched moves can be undone");
    }
}

impl Board {
    /// Searches `max_depth` plies ahead with alpha-beta pruning and picks
    /// one of the best moves for the side to move at random. The board is
    /// not changed.
    ///
    /// Returns `None` if the game is over.
    ///
    /// # Examples
    ///
    /// ```
    /// use gambit::{Board, Square};
    /// use rand::thread_rng;
    ///
    /// let mut board = Board::new();
    /// for (from, to) in [(Square::F2, Square::F3), (Square::E7, Square::E5), (Square::G2, Square::G4)] {
    ///     let m = board.find_move(from, to, None).expect("legal");
    ///     board.play(m)?;
    /// }
    ///
    /// let m = board.recommended_move(1, &mut thread_rng()).expect("black to move");
    /// assert_eq!((m.from(), m.to()), (Square::D8, Square::H4));
    /// # Ok::<_, gambit::PlayError>(())
    /// ```
    pub fn recommended_move<R>(&mut self, max_depth: u32, rng: &mut R) -> Option<Move>
    where
        R: Rng + ?Sized,
    {
        let player = self.turn();
        let evaluation = alphabeta(self, player, 0, max_depth, -SCORE_INFINITY, SCORE_INFINITY);
        evaluation.moves.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{search::minimax, Role, Square};

    #[test]
    fn test_heuristic_material() {
        let mut board = Board::empty();
        board.add_piece(Color::White, Role::King, Square::E1).unwrap();
        board.add_piece(Color::Black, Role::King, Square::E8).unwrap();
        let rook = board.add_piece(Color::Black, Role::Rook, Square::A8).unwrap();
        board.capture_piece(rook);
        assert_eq!(board.heuristic_value(Color::White, 0), 5);
        assert_eq!(board.heuristic_value(Color::Black, 3), -5);
    }

    #[test]
    fn test_heuristic_mate_depth() {
        let mut board = Board::empty();
        board.add_piece(Color::White, Role::King, Square::H1).unwrap();
        board.add_piece(Color::Black, Role::Rook, Square::A1).unwrap();
        board.add_piece(Color::Black, Role::Rook, Square::B2).unwrap();
        board.add_piece(Color::Black, Role::King, Square::H8).unwrap();
        assert!(board.status().is_checkmate());
        assert_eq!(board.heuristic_value(Color::White, 2), -(SCORE_MATE - 2));
        assert_eq!(board.heuristic_value(Color::Black, 2), SCORE_MATE - 2);
        assert!(board.is_game_over());
    }

    #[test]
    fn test_prefers_winning_material() {
        let mut board = Board::empty();
        board.add_piece(Color::White, Role::King, Square::A1).unwrap();
        board.add_piece(Color::White, Role::Rook, Square::D1).unwrap();
        board.add_piece(Color::Black, Role::Queen, Square::D5).unwrap();
        board.add_piece(Color::Black, Role::King, Square::H8).unwrap();
        let before = board.clone();

        let mut rng = StdRng::seed_from_u64(0);
        let m = board.recommended_move(0, &mut rng).expect("white to move");
        assert_eq!((m.from(), m.to()), (Square::D1, Square::D5));
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_equivalence_on_board() {
        let mut board = Board::new();
        for uci in [(Square::E2, Square::E4), (Square::D7, Square::D5)] {
            let m = board.find_move(uci.0, uci.1, None).unwrap();
            board.play(m).unwrap();
        }
        let full = minimax(&mut board, Color::White, 0, 1);
        let pruned = alphabeta(&mut board, Color::White, 0, 1, -SCORE_INFINITY, SCORE_INFINITY);
        assert_eq!(full, pruned);
        assert_eq!(full.score, 0);
    }
}
