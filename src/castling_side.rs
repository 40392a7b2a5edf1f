use std::{error::Error, fmt};

use crate::{Color, File, Square};

/// `KingSide` (O-O) or `QueenSide` (O-O-O).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    #[inline]
    pub const fn is_king_side(self) -> bool {
        matches!(self, CastlingSide::KingSide)
    }

    /// Recognizes the side of a castling move from the king's origin and
    /// destination.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalCastleSide`] unless the king steps exactly two files
    /// along its rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use gambit::{CastlingSide, Square};
    ///
    /// assert_eq!(
    ///     CastlingSide::from_king_move(Square::E1, Square::G1),
    ///     Ok(CastlingSide::KingSide)
    /// );
    /// assert!(CastlingSide::from_king_move(Square::E1, Square::F1).is_err());
    /// ```
    pub fn from_king_move(from: Square, to: Square) -> Result<CastlingSide, IllegalCastleSide> {
        if from.rank() != to.rank() {
            return Err(IllegalCastleSide { from, to });
        }
        match to.file() as i32 - from.file() as i32 {
            2 => Ok(CastlingSide::KingSide),
            -2 => Ok(CastlingSide::QueenSide),
            _ => Err(IllegalCastleSide { from, to }),
        }
    }

    /// File of the rook before castling.
    pub const fn rook_from_file(self) -> File {
        match self {
            CastlingSide::KingSide => File::H,
            CastlingSide::QueenSide => File::A,
        }
    }

    pub const fn king_to_file(self) -> File {
        match self {
            CastlingSide::KingSide => File::G,
            CastlingSide::QueenSide => File::C,
        }
    }

    pub const fn rook_to_file(self) -> File {
        match self {
            CastlingSide::KingSide => File::F,
            CastlingSide::QueenSide => File::D,
        }
    }

    /// The single file the king crosses between its origin and destination.
    pub const fn passed_file(self) -> File {
        match self {
            CastlingSide::KingSide => File::F,
            CastlingSide::QueenSide => File::D,
        }
    }

    pub const fn rook_from(self, color: Color) -> Square {
        Square::from_coords(self.rook_from_file(), color.backrank())
    }

    pub const fn king_to(self, color: Color) -> Square {
        Square::from_coords(self.king_to_file(), color.backrank())
    }

    pub const fn rook_to(self, color: Color) -> Square {
        Square::from_coords(self.rook_to_file(), color.backrank())
    }

    pub const fn passed(self, color: Color) -> Square {
        Square::from_coords(self.passed_file(), color.backrank())
    }

    #[must_use]
    /// `KingSide` and `QueenSide`, in this order.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];
}

impl fmt::Display for CastlingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CastlingSide::KingSide => "O-O",
            CastlingSide::QueenSide => "O-O-O",
        })
    }
}

/// Error when a king move cannot be read as castling to either side.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IllegalCastleSide {
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for IllegalCastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "king move {}-{} is not castling", self.from, self.to)
    }
}

impl Error for IllegalCastleSide {}

#[cfg(feature = "serde")]
impl serde::Serialize for CastlingSide {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CastlingSide {
    fn deserialize<D>(deserializer: D) -> Result<CastlingSide, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct CastlingSideVisitor;

        impl serde::de::Visitor<'_> for CastlingSideVisitor {
            type Value = CastlingSide;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("O-O or O-O-O")
            }

            fn visit_str<E>(self, value: &str) -> Result<CastlingSide, E>
            where
                E: serde::de::Error,
            {
                match value {
                    "O-O" => Ok(CastlingSide::KingSide),
                    "O-O-O" => Ok(CastlingSide::QueenSide),
                    _ => Err(E::custom("invalid castling side")),
                }
            }
        }

        deserializer.deserialize_str(CastlingSideVisitor)
    }
}
