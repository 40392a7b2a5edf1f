//! Minimax and alpha-beta search over any two-player game.
//!
//! The search mutates the game in place, applying a move before descending
//! and undoing it afterwards. [`Applied`] ties the undo to a scope, so the
//! game is restored on every path out of a node.
//!
//! # Examples
//!
//! ```
//! use gambit::{
//!     search::{alphabeta, minimax, SCORE_INFINITY},
//!     Board, Color,
//! };
//!
//! let mut board = Board::new();
//! let full = minimax(&mut board, Color::White, 0, 1);
//! let pruned = alphabeta(&mut board, Color::White, 0, 1, -SCORE_INFINITY, SCORE_INFINITY);
//! assert_eq!(full.score, pruned.score);
//! assert_eq!(full.moves.len(), 20);
//! assert_eq!(board, Board::new());
//! ```

use std::ops::{Deref, DerefMut};

/// Bound larger than any score a search can report.
pub const SCORE_INFINITY: i32 = 32_000;
/// Score of a checkmate at the root. Mates found deeper score lower.
pub const SCORE_MATE: i32 = 31_000;
pub const SCORE_DRAW: i32 = 0;

/// A two-player, turn-based game that can be searched.
pub trait Game {
    type Player: Copy + Eq;
    type Move: Copy;
    /// Must own its moves. The game is mutated while they are visited.
    type Moves: IntoIterator<Item = Self::Move>;

    /// The player to move.
    fn current_player(&self) -> Self::Player;

    fn is_game_over(&mut self) -> bool;

    /// Static value of the current state from the point of view of
    /// `player`, `depth` plies below the root of the search.
    fn heuristic_value(&mut self, player: Self::Player, depth: u32) -> i32;

    fn legal_moves(&mut self) -> Self::Moves;

    /// Plays a move from [`Game::legal_moves()`].
    fn apply_move(&mut self, m: Self::Move);

    /// Takes back the last applied move.
    fn undo_move(&mut self);
}

/// A game with one move applied. The move is undone when the guard is
/// dropped.
#[derive(Debug)]
pub struct Applied<'a, G: Game + ?Sized> {
    game: &'a mut G,
}

impl<'a, G: Game + ?Sized> Applied<'a, G> {
    pub fn new(game: &'a mut G, m: G::Move) -> Applied<'a, G> {
        game.apply_move(m);
        Applied { game }
    }
}

impl<G: Game + ?Sized> Deref for Applied<'_, G> {
    type Target = G;

    fn deref(&self) -> &G {
        self.game
    }
}

impl<G: Game + ?Sized> DerefMut for Applied<'_, G> {
    fn deref_mut(&mut self) -> &mut G {
        self.game
    }
}

impl<G: Game + ?Sized> Drop for Applied<'_, G> {
    fn drop(&mut self) {
        self.game.undo_move();
    }
}

/// Result of a search: the score of the node and every move that achieves
/// it, in generation order. Leaves have no moves.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Evaluation<M> {
    pub score: i32,
    pub moves: Vec<M>,
}

impl<M> Evaluation<M> {
    fn leaf(score: i32) -> Evaluation<M> {
        Evaluation {
            score,
            moves: Vec::new(),
        }
    }

    fn consider(&mut self, m: M, score: i32, maximizing: bool) {
        let better = if maximizing {
            score > self.score
        } else {
            score < self.score
        };
        if better {
            self.score = score;
            self.moves.clear();
            self.moves.push(m);
        } else if score == self.score {
            self.moves.push(m);
        }
    }
}

fn is_leaf<G: Game + ?Sized>(game: &mut G, depth: u32, max_depth: u32) -> bool {
    depth > max_depth || game.is_game_over()
}

/// Plain minimax from the point of view of `player`. Nodes where `player`
/// is to move maximize.
///
/// Searching starts at `depth` and stops at nodes deeper than `max_depth`
/// or where the game is over.
pub fn minimax<G: Game + ?Sized>(
    game: &mut G,
    player: G::Player,
    depth: u32,
    max_depth: u32,
) -> Evaluation<G::Move> {
    if is_leaf(game, depth, max_depth) {
        return Evaluation::leaf(game.heuristic_value(player, depth));
    }

    let maximizing = game.current_player() == player;
    let mut best = Evaluation::leaf(if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    });

    for m in game.legal_moves() {
        let score = {
            let mut child = Applied::new(game, m);
            minimax(&mut *child, player, depth + 1, max_depth).score
        };
        best.consider(m, score, maximizing);
    }

    best
}

/// Minimax with alpha-beta pruning (fail-soft).
///
/// Called with the full window `(-SCORE_INFINITY, SCORE_INFINITY)`, the
/// score and the moves are the same as those of [`minimax()`].
pub fn alphabeta<G: Game + ?Sized>(
    game: &mut G,
    player: G::Player,
    depth: u32,
    max_depth: u32,
    mut alpha: i32,
    mut beta: i32,
) -> Evaluation<G::Move> {
    if is_leaf(game, depth, max_depth) {
        return Evaluation::leaf(game.heuristic_value(player, depth));
    }

    let maximizing = game.current_player() == player;
    let mut best = Evaluation::leaf(if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    });

    for m in game.legal_moves() {
        // Children get a window one wider, so a reply that ties the best
        // score is searched exactly instead of being cut off at the bound.
        let score = {
            let mut child = Applied::new(game, m);
            if maximizing {
                alphabeta(&mut *child, player, depth + 1, max_depth, alpha - 1, beta).score
            } else {
                alphabeta(&mut *child, player, depth + 1, max_depth, alpha, beta + 1).score
            }
        };
        best.consider(m, score, maximizing);

        if maximizing {
            alpha = alpha.max(best.score);
        } else {
            beta = beta.min(best.score);
        }
        if alpha >= beta {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    /// Uniform game tree with pseudo-random values at every node.
    struct Tree {
        branching: usize,
        height: usize,
        values: Vec<i32>,
        path: Vec<usize>,
        undone: usize,
    }

    impl Tree {
        fn random(rng: &mut StdRng, branching: usize, height: usize) -> Tree {
            Tree {
                branching,
                height,
                values: (0..97).map(|_| rng.gen_range(-5..=5)).collect(),
                path: Vec::new(),
                undone: 0,
            }
        }

        fn node(&self) -> usize {
            self.path
                .iter()
                .fold(1, |acc, &i| acc * (self.branching + 1) + i)
        }
    }

    impl Game for Tree {
        type Player = bool;
        type Move = usize;
        type Moves = std::ops::Range<usize>;

        fn current_player(&self) -> bool {
            self.path.len() % 2 == 0
        }

        fn is_game_over(&mut self) -> bool {
            self.path.len() >= self.height
        }

        fn heuristic_value(&mut self, player: bool, _depth: u32) -> i32 {
            let value = self.values[self.node() % self.values.len()];
            if player {
                value
            } else {
                -value
            }
        }

        fn legal_moves(&mut self) -> std::ops::Range<usize> {
            0..self.branching
        }

        fn apply_move(&mut self, m: usize) {
            self.path.push(m);
        }

        fn undo_move(&mut self) {
            self.path.pop().expect("move to undo");
            self.undone += 1;
        }
    }

    #[test]
    fn test_alphabeta_matches_minimax() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let branching = rng.gen_range(1..=4);
            let height = rng.gen_range(1..=5);
            let mut tree = Tree::random(&mut rng, branching, height);
            for player in [true, false] {
                for max_depth in 0..4 {
                    let full = minimax(&mut tree, player, 0, max_depth);
                    let pruned = alphabeta(
                        &mut tree,
                        player,
                        0,
                        max_depth,
                        -SCORE_INFINITY,
                        SCORE_INFINITY,
                    );
                    assert_eq!(full, pruned);
                    assert!(tree.path.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_leaf() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut tree = Tree::random(&mut rng, 3, 0);
        let eval = minimax(&mut tree, true, 0, 5);
        assert!(eval.moves.is_empty());
        assert_eq!(eval.score, tree.heuristic_value(true, 0));
    }

    #[test]
    fn test_pruning_undoes_every_move() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut tree = Tree::random(&mut rng, 4, 4);
        let full = minimax(&mut tree, true, 0, 4);
        let visited = tree.undone;
        tree.undone = 0;
        let pruned = alphabeta(&mut tree, true, 0, 4, -SCORE_INFINITY, SCORE_INFINITY);
        assert_eq!(full.score, pruned.score);
        assert!(tree.undone <= visited);
        assert!(tree.path.is_empty());
    }
}
