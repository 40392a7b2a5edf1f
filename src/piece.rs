use std::fmt;

use arrayvec::ArrayVec;

use crate::{Bitboard, Board, CastlingSide, Color, File, Move, Role, Square};

/// Stable handle of a piece within the [`Board`] that registered it.
///
/// Handles are never reused while the piece is referenced by the board's
/// history, so undoing a capture brings back the very same piece.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct PieceId(u32);

impl PieceId {
    #[inline]
    pub const fn new(index: u32) -> PieceId {
        PieceId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece with its owner, position and move counter.
///
/// Pieces do not know their board. Move generation takes the board as an
/// argument instead.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Piece {
    pub(crate) id: PieceId,
    pub(crate) color: Color,
    pub(crate) role: Role,
    pub(crate) square: Square,
    pub(crate) moves: u32,
}

impl Piece {
    pub(crate) const fn new(id: PieceId, color: Color, role: Role, square: Square) -> Piece {
        Piece {
            id,
            color,
            role,
            square,
            moves: 0,
        }
    }

    #[inline]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// The square the piece stands on, or stood on when it was captured or
    /// promoted.
    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// Number of moves made by this piece that have not been undone.
    #[inline]
    pub const fn move_count(&self) -> u32 {
        self.moves
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.moves > 0
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.role.value()
    }

    pub const fn char(&self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }

    /// Squares attacked by this piece on `board`.
    ///
    /// Squares held by own pieces are never attacked. A pawn attacks both
    /// forward diagonals, whether or not an opponent stands there.
    pub fn attacks(&self, board: &Board) -> Bitboard {
        let mut result = Bitboard::EMPTY;

        if self.role == Role::Pawn {
            for df in [-1, 1] {
                if let Some(to) = self.square.offset(self.color.pawn_direction(), df) {
                    if board.piece_of(to, self.color).is_none() {
                        result.add(to);
                    }
                }
            }
            return result;
        }

        let movement = self.role.movement();
        for &(dr, df) in movement.offsets {
            let mut sq = self.square;
            while let Some(to) = sq.offset(dr, df) {
                match board.piece_at(to) {
                    Some(other) => {
                        if other.color != self.color {
                            result.add(to);
                        }
                        break;
                    }
                    None => result.add(to),
                }
                if !movement.sliding {
                    break;
                }
                sq = to;
            }
        }

        result
    }

    /// Pseudo-legal moves of this piece on `board`. Moves that leave the own
    /// king in check are included.
    pub fn moves(&self, board: &Board) -> ArrayVec<Move, 32> {
        let mut moves = ArrayVec::new();

        match self.role {
            Role::Pawn => self.push_pawn_moves(board, &mut moves),
            role => {
                for to in self.attacks(board) {
                    moves.push(Move::Normal {
                        piece: self.id,
                        role,
                        from: self.square,
                        to,
                        capture: board.piece_at(to).map(Piece::id),
                    });
                }
                if role == Role::King {
                    self.push_castles(board, &mut moves);
                }
            }
        }

        moves
    }

    fn push_pawn_moves(&self, board: &Board, moves: &mut ArrayVec<Move, 32>) {
        let dir = self.color.pawn_direction();

        for df in [-1, 1] {
            if let Some(to) = self.square.offset(dir, df) {
                if let Some(victim) = board.piece_of(to, !self.color) {
                    self.push_pawn_move(moves, to, Some(victim.id));
                }
            }
        }

        if let Some(to) = self.square.offset(dir, 0) {
            if board.piece_at(to).is_none() {
                self.push_pawn_move(moves, to, None);

                if !self.has_moved() && self.square.rank() == self.color.pawn_rank() {
                    if let Some(double) = to.offset(dir, 0) {
                        if board.piece_at(double).is_none() {
                            moves.push(Move::Normal {
                                piece: self.id,
                                role: Role::Pawn,
                                from: self.square,
                                to: double,
                                capture: None,
                            });
                        }
                    }
                }
            }
        }

        if let Some(Move::Normal {
            piece: victim,
            role: Role::Pawn,
            from,
            to: beside,
            ..
        }) = board.last_move()
        {
            let double_push = (from.rank() as i32 - beside.rank() as i32).abs() == 2;
            let adjacent = beside.rank() == self.square.rank()
                && (beside.file() as i32 - self.square.file() as i32).abs() == 1;
            let opponent = board.piece_of(beside, !self.color).map(Piece::id) == Some(victim);
            if double_push && adjacent && opponent {
                if let Some(to) = beside.offset(dir, 0) {
                    if board.piece_at(to).is_none() {
                        moves.push(Move::EnPassant {
                            piece: self.id,
                            from: self.square,
                            to,
                            capture: victim,
                        });
                    }
                }
            }
        }
    }

    fn push_pawn_move(&self, moves: &mut ArrayVec<Move, 32>, to: Square, capture: Option<PieceId>) {
        if to.rank() == self.color.other().backrank() {
            for promotion in Role::PROMOTIONS {
                moves.push(Move::Promotion {
                    piece: self.id,
                    from: self.square,
                    to,
                    capture,
                    promotion,
                });
            }
        } else {
            moves.push(Move::Normal {
                piece: self.id,
                role: Role::Pawn,
                from: self.square,
                to,
                capture,
            });
        }
    }

    fn push_castles(&self, board: &Board, moves: &mut ArrayVec<Move, 32>) {
        let home = Square::from_coords(File::E, self.color.backrank());
        if self.has_moved() || self.square != home {
            return;
        }

        for side in CastlingSide::ALL {
            let rook_from = side.rook_from(self.color);
            let Some(rook) = board.piece_of(rook_from, self.color) else {
                continue;
            };
            if rook.role != Role::Rook || rook.has_moved() {
                continue;
            }

            let (lo, hi) = if side.is_king_side() {
                (home.file(), rook_from.file())
            } else {
                (rook_from.file(), home.file())
            };
            let blocked = File::ALL
                .into_iter()
                .filter(|&file| lo < file && file < hi)
                .any(|file| {
                    board
                        .piece_at(Square::from_coords(file, home.rank()))
                        .is_some()
                });
            if blocked {
                continue;
            }

            moves.push(Move::Castle {
                king: self.id,
                rook: rook.id,
                side,
                from: home,
                to: side.king_to(self.color),
                rook_from,
                rook_to: side.rook_to(self.color),
            });
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.char(), self.square)
    }
}
