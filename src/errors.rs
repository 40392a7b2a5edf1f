use std::{error::Error, fmt};

use crate::{Move, Square};

/// Error when placing or relocating a piece onto a square that is already
/// occupied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OccupiedSquare {
    pub square: Square,
}

impl fmt::Display for OccupiedSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "square {} is occupied", self.square)
    }
}

impl Error for OccupiedSquare {}

/// Error when taking back a move or one of its steps.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UndoError {
    /// The move history is empty.
    NothingToUndo,
    /// The board does not match the state the step expects to revert,
    /// e.g. because primitives were undone out of order.
    Inconsistent { square: Square },
}

impl fmt::Display for UndoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            UndoError::NothingToUndo => f.write_str("no move to undo"),
            UndoError::Inconsistent { square } => {
                write!(f, "cannot undo: unexpected board state at {square}")
            }
        }
    }
}

impl Error for UndoError {}

/// Reason a move cannot be played on a board.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PlayErrorKind {
    /// A square the move needs to be empty, or to hold the declared
    /// capture, holds another piece.
    OccupiedSquare(Square),
    /// A piece the move refers to is not where the move expects it.
    MissingPiece(Square),
}

/// Error when playing a move that does not fit the board. The board is left
/// untouched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlayError {
    pub m: Move,
    pub kind: PlayErrorKind,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PlayErrorKind::OccupiedSquare(square) => {
                write!(f, "cannot play {}: {} is occupied", self.m, square)
            }
            PlayErrorKind::MissingPiece(square) => {
                write!(f, "cannot play {}: expected piece missing on {}", self.m, square)
            }
        }
    }
}

impl Error for PlayError {}
