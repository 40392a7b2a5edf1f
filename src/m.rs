use std::{
    fmt,
    fmt::{Display, Write as _},
};

use crate::{CastlingSide, PieceId, Role, Square};

/// Information about a move.
///
/// Pieces are referred to by their [`PieceId`] on the [`Board`](crate::Board)
/// that generated the move, so a move is only meaningful for the board it
/// came from.
///
/// # Display
///
/// `Move` implements [`Display`] using long algebraic notation, e.g.
/// `Ng1-f3`, `e5xd6`, `a7xb8=Q` or `O-O`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Move {
    /// A normal move, e.g., `Bd3xh7`.
    Normal {
        piece: PieceId,
        role: Role,
        from: Square,
        to: Square,
        capture: Option<PieceId>,
    },
    /// A castling move, `O-O` or `O-O-O`. Both the king and the rook move.
    Castle {
        king: PieceId,
        rook: PieceId,
        side: CastlingSide,
        from: Square,
        to: Square,
        rook_from: Square,
        rook_to: Square,
    },
    /// An en passant capture, e.g., `e5xd6`. The captured pawn stands beside
    /// `from`, not on `to`.
    EnPassant {
        piece: PieceId,
        from: Square,
        to: Square,
        capture: PieceId,
    },
    /// A pawn move to the last rank, e.g., `a7xb8=Q`.
    Promotion {
        piece: PieceId,
        from: Square,
        to: Square,
        capture: Option<PieceId>,
        promotion: Role,
    },
}

impl Move {
    /// Gets the moving piece. For castling moves this is the king.
    pub const fn piece(self) -> PieceId {
        match self {
            Move::Normal { piece, .. }
            | Move::EnPassant { piece, .. }
            | Move::Promotion { piece, .. } => piece,
            Move::Castle { king, .. } => king,
        }
    }

    /// Gets the role of the moving piece.
    pub const fn role(self) -> Role {
        match self {
            Move::Normal { role, .. } => role,
            Move::EnPassant { .. } | Move::Promotion { .. } => Role::Pawn,
            Move::Castle { .. } => Role::King,
        }
    }

    /// Gets the origin square. For castling moves this is the king's square.
    pub const fn from(self) -> Square {
        match self {
            Move::Normal { from, .. }
            | Move::Castle { from, .. }
            | Move::EnPassant { from, .. }
            | Move::Promotion { from, .. } => from,
        }
    }

    /// Gets the target square. For castling moves this is where the king
    /// lands.
    pub const fn to(self) -> Square {
        match self {
            Move::Normal { to, .. }
            | Move::Castle { to, .. }
            | Move::EnPassant { to, .. }
            | Move::Promotion { to, .. } => to,
        }
    }

    /// Gets the captured piece, if any.
    pub const fn capture(self) -> Option<PieceId> {
        match self {
            Move::Normal { capture, .. } | Move::Promotion { capture, .. } => capture,
            Move::EnPassant { capture, .. } => Some(capture),
            Move::Castle { .. } => None,
        }
    }

    /// Checks if the move is a capture.
    pub const fn is_capture(self) -> bool {
        self.capture().is_some()
    }

    /// Checks if the move is en passant.
    pub const fn is_en_passant(self) -> bool {
        matches!(self, Move::EnPassant { .. })
    }

    /// Gets the castling side.
    pub const fn castling_side(self) -> Option<CastlingSide> {
        match self {
            Move::Castle { side, .. } => Some(side),
            _ => None,
        }
    }

    /// Checks if the move is a castling move.
    pub const fn is_castle(self) -> bool {
        matches!(self, Move::Castle { .. })
    }

    /// Gets the promotion role.
    pub const fn promotion(self) -> Option<Role> {
        match self {
            Move::Promotion { promotion, .. } => Some(promotion),
            _ => None,
        }
    }

    /// Checks if the move is a promotion.
    pub const fn is_promotion(self) -> bool {
        matches!(self, Move::Promotion { .. })
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Castle { side, .. } => write!(f, "{side}"),
            m => {
                if m.role() != Role::Pawn {
                    f.write_char(m.role().upper_char())?;
                }

                write!(
                    f,
                    "{}{}{}",
                    m.from(),
                    if m.is_capture() { 'x' } else { '-' },
                    m.to()
                )?;

                if let Some(p) = m.promotion() {
                    write!(f, "={}", p.upper_char())?;
                }

                Ok(())
            }
        }
    }
}

/// A list of moves.
///
/// Heap allocated, since boards built with
/// [`Board::add_piece()`](crate::Board::add_piece) are not limited to the
/// material of a real game.
pub type MoveList = Vec<Move>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let m = Move::EnPassant {
            piece: PieceId::new(3),
            from: Square::A5,
            to: Square::B6,
            capture: PieceId::new(7),
        };
        assert_eq!(m.role(), Role::Pawn);
        assert_eq!(m.capture(), Some(PieceId::new(7)));
        assert!(m.is_en_passant());
        assert!(!m.is_castle());
        assert_eq!(m.promotion(), None);
        assert_eq!(m.to_string(), "a5xb6");
    }

    #[test]
    fn test_display() {
        let normal = Move::Normal {
            piece: PieceId::new(1),
            role: Role::Knight,
            from: Square::G1,
            to: Square::F3,
            capture: None,
        };
        assert_eq!(normal.to_string(), "Ng1-f3");

        let promotion = Move::Promotion {
            piece: PieceId::new(2),
            from: Square::A7,
            to: Square::B8,
            capture: Some(PieceId::new(9)),
            promotion: Role::Queen,
        };
        assert_eq!(promotion.to_string(), "a7xb8=Q");

        let castle = Move::Castle {
            king: PieceId::new(4),
            rook: PieceId::new(5),
            side: CastlingSide::QueenSide,
            from: Square::E8,
            to: Square::C8,
            rook_from: Square::A8,
            rook_to: Square::D8,
        };
        assert_eq!(castle.to_string(), "O-O-O");
        assert_eq!(castle.role(), Role::King);
        assert_eq!(castle.piece(), PieceId::new(4));
    }

    #[test]
    fn test_structural_equality() {
        let a = Move::Normal {
            piece: PieceId::new(1),
            role: Role::Rook,
            from: Square::A1,
            to: Square::A5,
            capture: None,
        };
        let b = Move::Normal {
            piece: PieceId::new(1),
            role: Role::Rook,
            from: Square::A1,
            to: Square::A5,
            capture: Some(PieceId::new(20)),
        };
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
