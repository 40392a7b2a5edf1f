//! Count legal move paths.
//!
//! # Examples
//!
//! ```
//! use gambit::{perft, Board};
//!
//! let mut board = Board::new();
//! assert_eq!(perft(&mut board, 1), 20);
//! assert_eq!(perft(&mut board, 2), 400);
//! assert_eq!(perft(&mut board, 3), 8902);
//! ```

use crate::{search::Applied, Board};

/// Counts legal move paths of a given length.
///
/// Paths with mate or stalemate are not counted unless it occurs in the final
/// position. Useful for comparing, testing and debugging move generation
/// correctness and performance.
///
/// Moves are played and taken back on `board`, which ends up unchanged.
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth < 1 {
        1
    } else {
        let moves = board.legal_moves();

        if depth == 1 {
            moves.len() as u64
        } else {
            moves
                .into_iter()
                .map(|m| {
                    let mut child = Applied::new(&mut *board, m);
                    perft(&mut child, depth - 1)
                })
                .sum()
        }
    }
}

/// Like [`perft()`], but also prints the count of each child for debugging.
pub fn debug_perft(board: &mut Board, depth: u32) -> u64 {
    if depth < 1 {
        1
    } else {
        let moves = board.legal_moves();

        moves
            .into_iter()
            .map(|m| {
                let mut child = Applied::new(&mut *board, m);
                let nodes = perft(&mut child, depth - 1);
                println!("{} {}: {}", m, depth - 1, nodes);
                nodes
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_perft_matches() {
        let mut board = Board::new();
        assert_eq!(debug_perft(&mut board, 2), perft(&mut board, 2));
        assert_eq!(board, Board::new());
    }
}
