//! A game-agnostic view of a two player, perfect information position
//!
//! The search engine only ever talks to a position through [`Board`], so any
//! turn based game can be searched by implementing this trait.

use std::fmt::Debug;

use crate::error::Result;

/// A position of a deterministic, turn based, two player game
///
/// Implementations are immutable: [`Board::play`] returns a new position and
/// leaves the receiver untouched.
pub trait Board: Sized {
    /// Identifies a player (and whose turn it is)
    type Piece: Copy + Eq + Debug;
    /// A transition from one position to the next
    type Move: Copy + Eq + Debug;

    /// The player to move next
    fn turn(&self) -> Self::Piece;

    /// All moves playable from this position, in a fixed order.
    ///
    /// The order is part of the contract: the search explores moves in this
    /// order, so it decides which of several equal moves is found first.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Returns a new position with `mv` played by the current player.
    ///
    /// `mv` must be one of [`Board::legal_moves`]; what happens otherwise is
    /// up to the implementation, but it must not corrupt either position.
    fn play(&self, mv: Self::Move) -> Result<Self>;

    /// Whether either player has a winning configuration
    fn is_win(&self) -> bool;

    /// Heuristic score of the position from `player`'s point of view, higher
    /// is better. Only comparable with other scores of the same function.
    fn evaluate(&self, player: Self::Piece) -> f64;

    /// Preference order used when every candidate move scores the same
    fn tie_break_order(&self) -> Vec<Self::Move> {
        self.legal_moves()
    }
}

/// Properties derived from [`Board`], identical for every game.
///
/// Implemented for all boards and cannot be overridden.
pub trait BoardExt: Board {
    /// No win and no move left
    fn is_draw(&self) -> bool {
        !self.is_win() && self.legal_moves().is_empty()
    }

    /// The game has ended, no further move may be played
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_draw()
    }
}

impl<B: Board> BoardExt for B {}
