//! Chess rules with reversible move application, and a generic minimax
//! search that plays them.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use gambit::Board;
//!
//! let mut board = Board::new();
//! let legals = board.legal_moves();
//! assert_eq!(legals.len(), 20);
//! ```
//!
//! Play moves, and take them back:
//!
//! ```
//! use gambit::{Board, Square};
//!
//! let mut board = Board::new();
//!
//! // 1. e4
//! let m = board.find_move(Square::E2, Square::E4, None).expect("legal");
//! board.play(m)?;
//! assert_eq!(board.last_move(), Some(m));
//!
//! board.undo_move()?;
//! assert_eq!(board, Board::new());
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! use gambit::Board;
//!
//! let mut board = Board::new();
//! let status = board.status();
//! assert!(!status.is_check());
//! assert!(!status.is_checkmate());
//! assert!(!status.is_draw());
//! assert_eq!(board.outcome(), None); // no winner yet
//! ```
//!
//! Ask for a move:
//!
//! ```
//! use gambit::Board;
//! use rand::thread_rng;
//!
//! let mut board = Board::new();
//! let m = board.recommended_move(1, &mut thread_rng());
//! assert!(m.is_some());
//! ```
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for plain value types, for fuzzing.

#![doc(html_root_url = "https://docs.rs/gambit/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod castling_side;
mod color;
mod engine;
mod errors;
mod m;
mod perft;
mod piece;
mod role;
mod square;
mod status;

pub mod bitboard;
pub mod board;
pub mod search;

pub use bitboard::Bitboard;
pub use board::{Board, ValidMoves};
pub use castling_side::{CastlingSide, IllegalCastleSide};
pub use color::{Color, ParseColorError};
pub use errors::{OccupiedSquare, PlayError, PlayErrorKind, UndoError};
pub use m::{Move, MoveList};
pub use perft::{debug_perft, perft};
pub use piece::{Piece, PieceId};
pub use role::{Movement, Role};
pub use square::{File, InvalidCoordinate, ParseSquareError, Rank, Square};
pub use status::{Outcome, Status};

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for File {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Rank {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for PieceId {}
