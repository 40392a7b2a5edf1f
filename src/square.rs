use std::{error::Error, fmt, str::FromStr};

use crate::color::Color;

/// Error when a file, rank or square index is outside the 8x8 board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidCoordinate;

impl fmt::Display for InvalidCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("coordinate is not on the board")
    }
}

impl Error for InvalidCoordinate {}

/// A file of the chessboard, `A` to `H`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    pub const fn from_char(ch: char) -> Option<File> {
        match ch {
            'a'..='h' => Some(File::ALL[ch as usize - 'a' as usize]),
            _ => None,
        }
    }

    pub const fn char(self) -> char {
        (b'a' + self as u8) as char
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self as u32
    }

    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];
}

impl TryFrom<i32> for File {
    type Error = InvalidCoordinate;

    fn try_from(index: i32) -> Result<File, InvalidCoordinate> {
        usize::try_from(index)
            .ok()
            .and_then(|index| File::ALL.get(index).copied())
            .ok_or(InvalidCoordinate)
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.char())
    }
}

/// A rank of the chessboard, `First` to `Eighth`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum Rank {
    First = 0,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

impl Rank {
    pub const fn from_char(ch: char) -> Option<Rank> {
        match ch {
            '1'..='8' => Some(Rank::ALL[ch as usize - '1' as usize]),
            _ => None,
        }
    }

    pub const fn char(self) -> char {
        (b'1' + self as u8) as char
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self as u32
    }

    pub const ALL: [Rank; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];
}

impl TryFrom<i32> for Rank {
    type Error = InvalidCoordinate;

    fn try_from(index: i32) -> Result<Rank, InvalidCoordinate> {
        usize::try_from(index)
            .ok()
            .and_then(|index| Rank::ALL.get(index).copied())
            .ok_or(InvalidCoordinate)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.char())
    }
}

/// A square of the chessboard.
///
/// Squares are indexed `file + 8 * rank`, so `A1` is 0 and `H8` is 63.
///
/// # Examples
///
/// ```
/// use gambit::{File, Rank, Square};
///
/// let sq = Square::from_coords(File::E, Rank::Fourth);
/// assert_eq!(sq, Square::E4);
/// assert_eq!(sq.to_string(), "e4");
/// assert_eq!(sq.offset(1, -1), Some(Square::D5));
/// assert_eq!(Square::H8.offset(1, 0), None);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    #[inline]
    pub const fn from_coords(file: File, rank: Rank) -> Square {
        Square(file as u8 | (rank as u8) << 3)
    }

    /// Builds a square from 0-based file and rank numbers.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCoordinate`] if either number is outside `0..8`.
    pub fn try_from_coords(file: i32, rank: i32) -> Result<Square, InvalidCoordinate> {
        Ok(Square::from_coords(
            File::try_from(file)?,
            Rank::try_from(rank)?,
        ))
    }

    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 & 7) as usize]
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 >> 3) as usize]
    }

    #[inline]
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }

    /// Shifts the square by `dr` ranks and `df` files, or `None` if that
    /// leaves the board.
    #[inline]
    pub fn offset(self, dr: i32, df: i32) -> Option<Square> {
        Square::try_from_coords(self.file() as i32 + df, self.rank() as i32 + dr).ok()
    }

    /// Shade of the square. `A1` is dark.
    #[inline]
    pub const fn color(self) -> Color {
        if (self.file() as u8 + self.rank() as u8) % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    #[inline]
    pub const fn is_light(self) -> bool {
        self.color().is_white()
    }

    #[inline]
    pub const fn is_dark(self) -> bool {
        self.color().is_black()
    }

    /// All squares, `A1` to `H8`.
    pub const ALL: [Square; 64] = {
        let mut all = [Square(0); 64];
        let mut i = 0;
        while i < 64 {
            all[i] = Square(i as u8);
            i += 1;
        }
        all
    };
}

macro_rules! square_consts {
    ($($name:ident = $index:expr,)+) => {
        #[allow(missing_docs)]
        impl Square {
            $(pub const $name: Square = Square($index);)+
        }
    }
}

square_consts! {
    A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7,
    A2 = 8, B2 = 9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
    A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
    A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
    A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
    A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
    A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
    A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
}

impl TryFrom<u32> for Square {
    type Error = InvalidCoordinate;

    fn try_from(index: u32) -> Result<Square, InvalidCoordinate> {
        if index < 64 {
            Ok(Square(index as u8))
        } else {
            Err(InvalidCoordinate)
        }
    }
}

impl From<(File, Rank)> for Square {
    #[inline]
    fn from((file, rank): (File, Rank)) -> Square {
        Square::from_coords(file, rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().char(), self.rank().char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.file().char().to_ascii_uppercase(),
            self.rank().char()
        )
    }
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => match (File::from_char(file), Rank::from_char(rank)) {
                (Some(file), Some(rank)) => Ok(Square::from_coords(file, rank)),
                _ => Err(ParseSquareError),
            },
            _ => Err(ParseSquareError),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Square, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SquareVisitor;

        impl serde::de::Visitor<'_> for SquareVisitor {
            type Value = Square;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("square name")
            }

            fn visit_str<E>(self, value: &str) -> Result<Square, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(SquareVisitor)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Square> {
        Ok(Square(u.int_in_range(0..=63)?))
    }

    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        (1, Some(1))
    }
}
