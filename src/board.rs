use std::fmt;

use rand::{seq::SliceRandom, Rng};

use crate::{
    errors::{OccupiedSquare, PlayError, PlayErrorKind, UndoError},
    m::{Move, MoveList},
    piece::{Piece, PieceId},
    status::{Outcome, Status},
    Bitboard, Color, File, Role, Square,
};

/// The game state: pieces, side to move and move history.
///
/// Every piece ever put on the board gets a [`PieceId`] in the board's
/// registry. Live pieces are exactly those referenced by the occupancy
/// table. Captured pieces and pawns that were promoted away are kept in the
/// registry, so that [`Board::undo_move()`] can bring them back unchanged.
///
/// # Examples
///
/// ```
/// use gambit::{Board, Color, Square};
///
/// let mut board = Board::new();
/// let m = board.find_move(Square::E2, Square::E4, None).expect("legal");
/// board.play(m)?;
/// assert_eq!(board.turn(), Color::Black);
///
/// board.undo_move()?;
/// assert_eq!(board, Board::new());
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    registry: Vec<Piece>,
    occupancy: [Option<PieceId>; 64],
    captured: Vec<PieceId>,
    retired: Vec<PieceId>,
    history: Vec<Move>,
    turn: Color,
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

const BACKRANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

impl Board {
    /// The standard starting position, White to move.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, role) in File::ALL.into_iter().zip(BACKRANK) {
                board.register(color, role, Square::from_coords(file, color.backrank()));
            }
            for file in File::ALL {
                board.register(color, Role::Pawn, Square::from_coords(file, color.pawn_rank()));
            }
        }
        board
    }

    /// A board without any pieces, White to move.
    pub fn empty() -> Board {
        Board {
            registry: Vec::new(),
            occupancy: [None; 64],
            captured: Vec::new(),
            retired: Vec::new(),
            history: Vec::new(),
            turn: Color::White,
        }
    }

    fn register(&mut self, color: Color, role: Role, square: Square) -> PieceId {
        let id = PieceId::new(self.registry.len() as u32);
        self.registry.push(Piece::new(id, color, role, square));
        self.occupancy[square.to_usize()] = Some(id);
        id
    }

    /// Puts a new piece on the board.
    ///
    /// # Errors
    ///
    /// Returns [`OccupiedSquare`] if `square` is not empty.
    pub fn add_piece(
        &mut self,
        color: Color,
        role: Role,
        square: Square,
    ) -> Result<PieceId, OccupiedSquare> {
        if self.occupancy[square.to_usize()].is_some() {
            return Err(OccupiedSquare { square });
        }
        Ok(self.register(color, role, square))
    }

    /// Takes a live piece off the board and appends it to the captured
    /// pieces. The piece keeps its last square.
    ///
    /// Does nothing if the piece is not live.
    pub fn capture_piece(&mut self, id: PieceId) {
        let Some(square) = self.live_square(id) else {
            return;
        };
        self.occupancy[square.to_usize()] = None;
        self.captured.push(id);
    }

    /// Puts the most recently captured piece back on its square.
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::Inconsistent`] if `id` is not the most recently
    /// captured piece or its square has been taken meanwhile.
    pub fn undo_capture_piece(&mut self, id: PieceId) -> Result<(), UndoError> {
        let square = self.registry.get(id.index()).map_or(Square::A1, |p| p.square);
        if self.captured.last() != Some(&id) || self.occupancy[square.to_usize()].is_some() {
            return Err(UndoError::Inconsistent { square });
        }
        self.captured.pop();
        self.occupancy[square.to_usize()] = Some(id);
        Ok(())
    }

    /// Relocates a live piece and counts the move.
    ///
    /// # Errors
    ///
    /// Returns [`PlayErrorKind::OccupiedSquare`] if `to` is not empty, or
    /// [`PlayErrorKind::MissingPiece`] if `id` is not a live piece.
    pub fn move_piece(&mut self, id: PieceId, to: Square) -> Result<(), PlayErrorKind> {
        if self.occupancy[to.to_usize()].is_some() {
            return Err(PlayErrorKind::OccupiedSquare(to));
        }
        let from = self.live_square(id).ok_or_else(|| {
            PlayErrorKind::MissingPiece(self.registry.get(id.index()).map_or(to, |p| p.square))
        })?;
        self.step(id, from, to);
        Ok(())
    }

    /// Relocates a live piece back to `to` and uncounts the move.
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::Inconsistent`] if the piece is not live, has no
    /// moves to uncount, or `to` is occupied.
    pub fn undo_move_piece(&mut self, id: PieceId, to: Square) -> Result<(), UndoError> {
        let from = self
            .live_square(id)
            .ok_or(UndoError::Inconsistent { square: to })?;
        if self.occupancy[to.to_usize()].is_some() || !self.registry[id.index()].has_moved() {
            return Err(UndoError::Inconsistent { square: to });
        }
        self.relocate(id, from, to);
        self.registry[id.index()].moves -= 1;
        Ok(())
    }

    fn relocate(&mut self, id: PieceId, from: Square, to: Square) {
        self.occupancy[from.to_usize()] = None;
        self.occupancy[to.to_usize()] = Some(id);
        self.registry[id.index()].square = to;
    }

    /// Replaces a live pawn by a newly registered piece of the given role on
    /// the same square. The pawn is retired.
    ///
    /// Returns `None` if `pawn` is not live.
    pub fn promote_pawn(&mut self, pawn: PieceId, role: Role) -> Option<PieceId> {
        let square = self.live_square(pawn)?;
        let color = self.registry[pawn.index()].color;
        self.occupancy[square.to_usize()] = None;
        self.retired.push(pawn);
        Some(self.register(color, role, square))
    }

    /// Reverts [`Board::promote_pawn()`]: discards the promoted piece and
    /// reinstates the pawn.
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::Inconsistent`] unless `promoted` is the most
    /// recently registered piece, is live, and `pawn` is the most recently
    /// retired piece.
    pub fn undo_promote_pawn(&mut self, pawn: PieceId, promoted: PieceId) -> Result<(), UndoError> {
        let square = self.live_square(promoted).ok_or(UndoError::Inconsistent {
            square: self.registry.get(pawn.index()).map_or(Square::A1, |p| p.square),
        })?;
        if promoted.index() + 1 != self.registry.len() || self.retired.last() != Some(&pawn) {
            return Err(UndoError::Inconsistent { square });
        }
        self.registry.pop();
        self.retired.pop();
        self.occupancy[square.to_usize()] = Some(pawn);
        self.registry[pawn.index()].square = square;
        Ok(())
    }

    fn live_square(&self, id: PieceId) -> Option<Square> {
        let square = self.registry.get(id.index())?.square;
        (self.occupancy[square.to_usize()] == Some(id)).then_some(square)
    }

    /// Plays a move, without checking that it is legal.
    ///
    /// Moves should come from [`Board::valid_moves()`] or
    /// [`Board::possible_moves()`] of this board.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if the move does not fit the board, for
    /// example because the moving piece is not on its origin square. The
    /// board is not modified in that case.
    pub fn play(&mut self, m: Move) -> Result<(), PlayError> {
        self.check_playable(m)
            .map_err(|kind| PlayError { m, kind })?;

        match m {
            Move::Normal {
                piece,
                from,
                to,
                capture,
                ..
            } => {
                if let Some(capture) = capture {
                    self.capture_piece(capture);
                }
                self.step(piece, from, to);
            }
            Move::Castle {
                king,
                rook,
                from,
                to,
                rook_from,
                rook_to,
                ..
            } => {
                self.step(king, from, to);
                self.step(rook, rook_from, rook_to);
            }
            Move::EnPassant {
                piece,
                from,
                to,
                capture,
            } => {
                self.capture_piece(capture);
                self.step(piece, from, to);
            }
            Move::Promotion {
                piece,
                from,
                to,
                capture,
                promotion,
            } => {
                if let Some(capture) = capture {
                    self.capture_piece(capture);
                }
                self.step(piece, from, to);
                self.promote_pawn(piece, promotion);
            }
        }

        self.history.push(m);
        self.turn = !self.turn;
        Ok(())
    }

    fn step(&mut self, id: PieceId, from: Square, to: Square) {
        self.relocate(id, from, to);
        self.registry[id.index()].moves += 1;
    }

    fn check_playable(&self, m: Move) -> Result<(), PlayErrorKind> {
        let occupant = |sq: Square| self.occupancy[sq.to_usize()];

        if occupant(m.from()) != Some(m.piece()) {
            return Err(PlayErrorKind::MissingPiece(m.from()));
        }

        match m {
            Move::Normal { to, capture, .. } | Move::Promotion { to, capture, .. } => {
                match (capture, occupant(to)) {
                    (None, None) => Ok(()),
                    (Some(expected), Some(found)) if expected == found => Ok(()),
                    (None, Some(_)) => Err(PlayErrorKind::OccupiedSquare(to)),
                    (Some(_), _) => Err(PlayErrorKind::MissingPiece(to)),
                }
            }
            Move::Castle {
                rook,
                to,
                rook_from,
                rook_to,
                ..
            } => {
                if occupant(rook_from) != Some(rook) {
                    return Err(PlayErrorKind::MissingPiece(rook_from));
                }
                for sq in [to, rook_to] {
                    if occupant(sq).is_some() {
                        return Err(PlayErrorKind::OccupiedSquare(sq));
                    }
                }
                Ok(())
            }
            Move::EnPassant { to, capture, .. } => {
                if self.live_square(capture).is_none() {
                    return Err(PlayErrorKind::MissingPiece(to));
                }
                if occupant(to).is_some() {
                    return Err(PlayErrorKind::OccupiedSquare(to));
                }
                Ok(())
            }
        }
    }

    /// Takes back the last move and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::NothingToUndo`] if no move has been played, or
    /// [`UndoError::Inconsistent`] if the board was changed behind the
    /// history's back, e.g. through the piece primitives.
    pub fn undo_move(&mut self) -> Result<Move, UndoError> {
        let m = *self.history.last().ok_or(UndoError::NothingToUndo)?;

        match m {
            Move::Normal {
                piece,
                from,
                capture,
                ..
            } => {
                self.undo_move_piece(piece, from)?;
                if let Some(capture) = capture {
                    self.undo_capture_piece(capture)?;
                }
            }
            Move::Castle {
                king,
                rook,
                from,
                rook_from,
                ..
            } => {
                self.undo_move_piece(rook, rook_from)?;
                self.undo_move_piece(king, from)?;
            }
            Move::EnPassant {
                piece,
                from,
                capture,
                ..
            } => {
                self.undo_move_piece(piece, from)?;
                self.undo_capture_piece(capture)?;
            }
            Move::Promotion {
                piece,
                from,
                to,
                capture,
                ..
            } => {
                let promoted = self.occupancy[to.to_usize()]
                    .ok_or(UndoError::Inconsistent { square: to })?;
                self.undo_promote_pawn(piece, promoted)?;
                self.undo_move_piece(piece, from)?;
                if let Some(capture) = capture {
                    self.undo_capture_piece(capture)?;
                }
            }
        }

        self.history.pop();
        self.turn = !self.turn;
        Ok(m)
    }

    /// Pseudo-legal moves of all live pieces of `color`, ordered by the
    /// square of the moving piece. May include moves that leave the own
    /// king in check.
    pub fn possible_moves(&self, color: Color) -> impl Iterator<Item = Move> + '_ {
        self.pieces(color).flat_map(move |piece| piece.moves(self))
    }

    /// Checks if a pseudo-legal move can be played without leaving the own
    /// king in check. For castling, the king must also not start on or pass
    /// over an attacked square.
    ///
    /// The board is left as it was found.
    pub fn is_valid(&mut self, m: Move) -> bool {
        let Some(color) = self.registry.get(m.piece().index()).map(|p| p.color) else {
            return false;
        };

        if let Move::Castle { from, side, .. } = m {
            let attacked = self.attacked_squares(!color);
            if attacked.contains(from) || attacked.contains(side.passed(color)) {
                return false;
            }
        }

        if self.play(m).is_err() {
            return false;
        }
        let in_check = self.check(color);
        self.undo_move()
            .expect("move that was just played can be undone");
        !in_check
    }

    /// Valid moves of `color`, checked one at a time as the iterator
    /// advances.
    pub fn valid_moves(&mut self, color: Color) -> ValidMoves<'_> {
        let candidates: MoveList = self.possible_moves(color).collect();
        ValidMoves {
            board: self,
            candidates: candidates.into_iter(),
        }
    }

    /// All valid moves of the side to move.
    pub fn legal_moves(&mut self) -> MoveList {
        let turn = self.turn;
        self.valid_moves(turn).collect()
    }

    pub fn has_valid_move(&mut self, color: Color) -> bool {
        self.valid_moves(color).next().is_some()
    }

    /// Finds the valid move of the side to move with the given squares.
    /// `promotion` must match for pawn moves to the last rank.
    ///
    /// Castling is found by the king's squares, e.g. `e1` to `g1`.
    pub fn find_move(&mut self, from: Square, to: Square, promotion: Option<Role>) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|m| m.from() == from && m.to() == to && m.promotion() == promotion)
    }

    /// Squares attacked by any live piece of `color`.
    pub fn attacked_squares(&self, color: Color) -> Bitboard {
        self.pieces(color)
            .fold(Bitboard::EMPTY, |acc, piece| acc | piece.attacks(self))
    }

    /// Checks if the king of `color` is attacked. A side without a king is
    /// never in check.
    pub fn check(&self, color: Color) -> bool {
        self.king_of(color)
            .map_or(false, |king| self.check_at(color, king.square))
    }

    /// Checks if `square` is attacked by the opponent of `color`.
    pub fn check_at(&self, color: Color, square: Square) -> bool {
        self.attacked_squares(!color).contains(square)
    }

    /// Check, draw and checkmate flags for the side to move.
    pub fn status(&mut self) -> Status {
        let turn = self.turn;
        let check = self.check(turn);
        let has_valid_move = self.has_valid_move(turn);
        Status::from_parts(check, has_valid_move)
    }

    pub fn outcome(&mut self) -> Option<Outcome> {
        let status = self.status();
        Outcome::from_status(status, self.turn)
    }

    /// Material captured by `color`, i.e. the summed value of the opponent's
    /// captured pieces.
    pub fn score(&self, color: Color) -> u32 {
        self.captured()
            .filter(|piece| piece.color != color)
            .map(Piece::value)
            .sum()
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Looks up a piece by its handle, whether it is live, captured or
    /// retired.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this board.
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.registry[id.index()]
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.occupancy[square.to_usize()].map(|id| &self.registry[id.index()])
    }

    /// The piece on `square`, if it belongs to `color`.
    pub fn piece_of(&self, square: Square, color: Color) -> Option<&Piece> {
        self.piece_at(square).filter(|piece| piece.color == color)
    }

    /// Live pieces of `color`, ordered by square.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.occupancy
            .iter()
            .flatten()
            .map(|id| &self.registry[id.index()])
            .filter(move |piece| piece.color == color)
    }

    pub fn king_of(&self, color: Color) -> Option<&Piece> {
        self.pieces(color).find(|piece| piece.role == Role::King)
    }

    /// Captured pieces, in the order they were captured.
    pub fn captured(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.captured.iter().map(|id| &self.registry[id.index()])
    }

    /// Pawns that were promoted away, in the order they were promoted.
    pub fn retired(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.retired.iter().map(|id| &self.registry[id.index()])
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Plays a valid move of the side to move, chosen uniformly at random.
    /// Returns `None` if there is none.
    pub fn random_move<R>(&mut self, rng: &mut R) -> Option<Move>
    where
        R: Rng + ?Sized,
    {
        let m = *self.legal_moves().choose(rng)?;
        self.play(m).ok()?;
        Some(m)
    }
}

/// Iterator over valid moves, created by [`Board::valid_moves()`].
///
/// Candidates are generated up front. Each one is checked for legality only
/// when the iterator reaches it.
pub struct ValidMoves<'a> {
    board: &'a mut Board,
    candidates: std::vec::IntoIter<Move>,
}

impl fmt::Debug for ValidMoves<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidMoves")
            .field("candidates", &self.candidates.as_slice())
            .finish_non_exhaustive()
    }
}

impl Iterator for ValidMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        let board = &mut *self.board;
        self.candidates.find(|&m| board.is_valid(m))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.candidates.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn play(board: &mut Board, moves: &str) {
        for uci in moves.split_whitespace() {
            let from: Square = uci[0..2].parse().expect("from square");
            let to: Square = uci[2..4].parse().expect("to square");
            let promotion = uci[4..].chars().next().and_then(Role::from_char);
            let m = board
                .find_move(from, to, promotion)
                .unwrap_or_else(|| panic!("{uci} is not valid"));
            board.play(m).expect("valid move");
        }
    }

    #[test]
    fn test_starting_position() {
        let mut board = Board::new();
        assert_eq!(board.pieces(Color::White).count(), 16);
        assert_eq!(board.pieces(Color::Black).count(), 16);
        assert_eq!(board.king_of(Color::Black).map(Piece::square), Some(Square::E8));
        assert_eq!(board.piece_at(Square::D1).map(Piece::role), Some(Role::Queen));
        assert_eq!(board.legal_moves().len(), 20);
        assert_eq!(board.possible_moves(Color::Black).count(), 20);
        assert_eq!(board.status(), Status::empty());
        assert_eq!(board.outcome(), None);
    }

    #[test]
    fn test_add_piece_occupied() {
        let mut board = Board::empty();
        board.add_piece(Color::White, Role::King, Square::E1).unwrap();
        assert_eq!(
            board.add_piece(Color::Black, Role::King, Square::E1),
            Err(OccupiedSquare { square: Square::E1 })
        );
    }

    #[test]
    fn test_capture_primitives() {
        let mut board = Board::empty();
        let a = board.add_piece(Color::White, Role::Rook, Square::A1).unwrap();
        let b = board.add_piece(Color::White, Role::Knight, Square::B1).unwrap();
        let before = board.clone();

        board.capture_piece(a);
        board.capture_piece(b);
        assert!(board.piece_at(Square::A1).is_none());
        assert_eq!(board.captured().count(), 2);

        assert_eq!(
            board.undo_capture_piece(a),
            Err(UndoError::Inconsistent { square: Square::A1 })
        );
        board.undo_capture_piece(b).unwrap();
        board.undo_capture_piece(a).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_primitives() {
        let mut board = Board::empty();
        let rook = board.add_piece(Color::White, Role::Rook, Square::A1).unwrap();
        board.add_piece(Color::White, Role::King, Square::E1).unwrap();

        assert_eq!(
            board.move_piece(rook, Square::E1),
            Err(PlayErrorKind::OccupiedSquare(Square::E1))
        );
        assert_eq!(
            board.undo_move_piece(rook, Square::A2),
            Err(UndoError::Inconsistent { square: Square::A2 })
        );

        board.move_piece(rook, Square::A4).unwrap();
        assert_eq!(board.piece(rook).move_count(), 1);
        assert_eq!(board.piece(rook).square(), Square::A4);
        board.undo_move_piece(rook, Square::A1).unwrap();
        assert!(!board.piece(rook).has_moved());
        assert_eq!(board.piece_at(Square::A1).map(Piece::id), Some(rook));
    }

    #[test]
    fn test_promote_primitives() {
        let mut board = Board::empty();
        let pawn = board.add_piece(Color::Black, Role::Pawn, Square::C1).unwrap();
        let before = board.clone();

        let queen = board.promote_pawn(pawn, Role::Queen).unwrap();
        assert_eq!(board.piece_at(Square::C1).map(Piece::id), Some(queen));
        assert_eq!(board.piece(queen).color(), Color::Black);
        assert_eq!(board.retired().map(Piece::id).collect::<Vec<_>>(), [pawn]);

        assert!(board.undo_promote_pawn(queen, pawn).is_err());
        board.undo_promote_pawn(pawn, queen).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_play_rejects_without_mutation() {
        let mut board = Board::new();
        let knight = board.piece_at(Square::G1).unwrap().id();
        let m = Move::Normal {
            piece: knight,
            role: Role::Knight,
            from: Square::G1,
            to: Square::E2,
            capture: None,
        };
        let before = board.clone();
        assert_eq!(
            board.play(m),
            Err(PlayError {
                m,
                kind: PlayErrorKind::OccupiedSquare(Square::E2)
            })
        );
        assert_eq!(board, before);

        let ghost = Move::Normal {
            piece: knight,
            role: Role::Knight,
            from: Square::F3,
            to: Square::E5,
            capture: None,
        };
        assert_eq!(
            board.play(ghost).map_err(|err| err.kind),
            Err(PlayErrorKind::MissingPiece(Square::F3))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_round_trip() {
        let mut board = Board::new();
        play(&mut board, "e2e4 d7d5 e4d5 g8f6 f1b5 c7c6 g1f3");
        let turn = board.turn();
        for m in board.possible_moves(turn).collect::<Vec<_>>() {
            let before = board.clone();
            board.play(m).unwrap();
            assert_eq!(board.undo_move(), Ok(m));
            assert_eq!(board, before, "round trip of {m}");
        }
        assert_eq!(Board::empty().undo_move(), Err(UndoError::NothingToUndo));
    }

    #[test]
    fn test_pinned_piece() {
        let mut board = Board::empty();
        board.add_piece(Color::White, Role::King, Square::E1).unwrap();
        let bishop = board.add_piece(Color::White, Role::Bishop, Square::E2).unwrap();
        board.add_piece(Color::Black, Role::Rook, Square::E8).unwrap();
        board.add_piece(Color::Black, Role::King, Square::A8).unwrap();

        assert!(board.possible_moves(Color::White).any(|m| m.piece() == bishop));
        assert!(board.legal_moves().iter().all(|m| m.piece() != bishop));
        assert!(!board.check(Color::White));
        assert!(board.check_at(Color::White, Square::E3));
    }

    #[test]
    fn test_castling_through_check() {
        let mut board = Board::empty();
        board.add_piece(Color::White, Role::King, Square::E1).unwrap();
        board.add_piece(Color::White, Role::Rook, Square::H1).unwrap();
        board.add_piece(Color::White, Role::Rook, Square::A1).unwrap();
        board.add_piece(Color::Black, Role::King, Square::E8).unwrap();
        board.add_piece(Color::Black, Role::Rook, Square::F8).unwrap();

        let sides: Vec<_> = board
            .legal_moves()
            .iter()
            .filter_map(|m| m.castling_side())
            .collect();
        assert_eq!(sides, [crate::CastlingSide::QueenSide]);
    }

    #[test]
    fn test_no_king_no_check() {
        let mut board = Board::empty();
        board.add_piece(Color::Black, Role::Queen, Square::D8).unwrap();
        assert!(!board.check(Color::White));
        assert!(board.king_of(Color::White).is_none());
    }

    #[test]
    fn test_random_move() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut board = Board::new();
        for _ in 0..4 {
            let m = board.random_move(&mut rng).expect("moves available");
            assert_eq!(board.last_move(), Some(m));
        }
        assert_eq!(board.history().len(), 4);
        assert_eq!(board.turn(), Color::White);
    }
}
