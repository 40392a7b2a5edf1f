use std::fmt;

/// Piece types: `Pawn`, `Knight`, `Bishop`, `Rook`, `Queen`, `King`.
///
/// # Examples
///
/// ```
/// use gambit::Role;
///
/// assert_eq!(Role::Queen.value(), 9);
/// assert_eq!(Role::King.value(), 0);
/// assert!(Role::Bishop.movement().sliding);
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Role {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

/// How a piece type moves: a list of `(rank, file)` offsets, each either
/// taken once or repeated until blocked.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Movement {
    pub offsets: &'static [(i32, i32)],
    pub sliding: bool,
}

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, 1),
    (-2, -1),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (1, 2),
    (1, -2),
];

const BISHOP_OFFSETS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const ROOK_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Role {
    /// Gets the piece type from its English letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use gambit::Role;
    ///
    /// assert_eq!(Role::from_char('K'), Some(Role::King));
    /// assert_eq!(Role::from_char('n'), Some(Role::Knight));
    ///
    /// assert_eq!(Role::from_char('X'), None);
    /// ```
    pub const fn from_char(ch: char) -> Option<Role> {
        match ch {
            'P' | 'p' => Some(Role::Pawn),
            'N' | 'n' => Some(Role::Knight),
            'B' | 'b' => Some(Role::Bishop),
            'R' | 'r' => Some(Role::Rook),
            'Q' | 'q' => Some(Role::Queen),
            'K' | 'k' => Some(Role::King),
            _ => None,
        }
    }

    /// Gets the English letter for the piece type.
    pub const fn char(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        }
    }

    /// Gets the uppercase English letter for the piece type.
    pub const fn upper_char(self) -> char {
        match self {
            Role::Pawn => 'P',
            Role::Knight => 'N',
            Role::Bishop => 'B',
            Role::Rook => 'R',
            Role::Queen => 'Q',
            Role::King => 'K',
        }
    }

    /// Material value, counted by [`Board::score()`](crate::Board::score).
    pub const fn value(self) -> u32 {
        match self {
            Role::Pawn => 1,
            Role::Knight | Role::Bishop => 3,
            Role::Rook => 5,
            Role::Queen => 9,
            Role::King => 0,
        }
    }

    /// Movement descriptor. Pawns have no offsets; their pushes and
    /// captures are generated separately.
    pub fn movement(self) -> Movement {
        match self {
            Role::Pawn => Movement {
                offsets: &[],
                sliding: false,
            },
            Role::Knight => Movement {
                offsets: &KNIGHT_OFFSETS,
                sliding: false,
            },
            Role::Bishop => Movement {
                offsets: &BISHOP_OFFSETS,
                sliding: true,
            },
            Role::Rook => Movement {
                offsets: &ROOK_OFFSETS,
                sliding: true,
            },
            Role::Queen => Movement {
                offsets: &KING_OFFSETS,
                sliding: true,
            },
            Role::King => Movement {
                offsets: &KING_OFFSETS,
                sliding: false,
            },
        }
    }

    /// `Pawn`, `Knight`, `Bishop`, `Rook`, `Queen`, and `King`, in this order.
    pub const ALL: [Role; 6] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];

    /// Pawn promotion choices, in the order they are generated.
    pub const PROMOTIONS: [Role; 4] = [Role::Queen, Role::Rook, Role::Bishop, Role::Knight];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Pawn => "pawn",
            Role::Knight => "knight",
            Role::Bishop => "bishop",
            Role::Rook => "rook",
            Role::Queen => "queen",
            Role::King => "king",
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.char())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Role, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RoleVisitor;

        impl serde::de::Visitor<'_> for RoleVisitor {
            type Value = Role;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("piece letter")
            }

            fn visit_char<E>(self, value: char) -> Result<Role, E>
            where
                E: serde::de::Error,
            {
                Role::from_char(value).ok_or_else(|| E::custom("invalid piece letter"))
            }

            fn visit_str<E>(self, value: &str) -> Result<Role, E>
            where
                E: serde::de::Error,
            {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => self.visit_char(ch),
                    _ => Err(E::custom("invalid piece letter")),
                }
            }
        }

        deserializer.deserialize_char(RoleVisitor)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Role {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Role> {
        u.choose(&Role::ALL).copied()
    }

    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        (1, Some(1))
    }
}
