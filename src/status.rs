use std::fmt;

use bitflags::bitflags;

use crate::Color;

bitflags! {
    /// Check, draw and checkmate flags of a position, from the point of
    /// view of the side to move.
    ///
    /// `DRAW` and `CHECKMATE` are never set together. `CHECKMATE` always
    /// comes with `CHECK`.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Status: u8 {
        const CHECK = 1;
        const DRAW = 2;
        const CHECKMATE = 4;
    }
}

impl Status {
    /// Derives the flags from whether the side to move is in check and
    /// whether it has any valid move.
    pub const fn from_parts(check: bool, has_valid_move: bool) -> Status {
        let mut bits = 0;
        if check {
            bits |= Status::CHECK.bits();
        }
        if !has_valid_move {
            bits |= if check {
                Status::CHECKMATE.bits()
            } else {
                Status::DRAW.bits()
            };
        }
        Status::from_bits_truncate(bits)
    }

    #[inline]
    pub const fn is_check(self) -> bool {
        self.contains(Status::CHECK)
    }

    #[inline]
    pub const fn is_draw(self) -> bool {
        self.contains(Status::DRAW)
    }

    #[inline]
    pub const fn is_checkmate(self) -> bool {
        self.contains(Status::CHECKMATE)
    }

    #[inline]
    pub const fn is_game_over(self) -> bool {
        self.intersects(Status::DRAW.union(Status::CHECKMATE))
    }
}

/// Outcome of a finished game.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Outcome {
    Decisive { winner: Color },
    Draw,
}

impl Outcome {
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Decisive { winner } => Some(winner),
            Outcome::Draw => None,
        }
    }

    /// The outcome of a position with the given status, where `turn` is the
    /// side to move.
    pub const fn from_status(status: Status, turn: Color) -> Option<Outcome> {
        if status.is_checkmate() {
            Some(Outcome::Decisive {
                winner: turn.other(),
            })
        } else if status.is_draw() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Outcome::Decisive {
                winner: Color::White,
            } => "1-0",
            Outcome::Decisive {
                winner: Color::Black,
            } => "0-1",
            Outcome::Draw => "1/2-1/2",
        })
    }
}
