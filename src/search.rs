//! Depth-limited adversarial search over any [`Board`]
//!
//! # Scoring
//! Every score is the heuristic [`Board::evaluate`] of a leaf position, taken
//! from the point of view of the player who asked for the search (the
//! `original_player`), no matter whose turn it is at the leaf. The maximizing
//! flag alternates with each ply.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    board::{Board, BoardExt},
    error::{GameError, Result},
};

/// Runs minimax and alpha-beta searches, counting the positions visited
#[derive(Clone, Debug, Default)]
pub struct Searcher {
    /// The number of positions visited by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    pub fn new() -> Self {
        Self { node_count: 0 }
    }

    /// Plain minimax, exploring every legal move down to `max_depth`
    pub fn minimax<B: Board>(
        &mut self,
        board: &B,
        maximizing: bool,
        original_player: B::Piece,
        max_depth: usize,
    ) -> Result<f64> {
        self.node_count += 1;

        if board.is_win() || board.is_draw() || max_depth == 0 {
            return Ok(board.evaluate(original_player));
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for mv in board.legal_moves() {
            let next = board.play(mv)?;
            let score = self.minimax(&next, !maximizing, original_player, max_depth - 1)?;
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        Ok(best)
    }

    /// Minimax with alpha-beta pruning
    ///
    /// Returns the same score as [`Searcher::minimax`] when called with the
    /// full window (`-inf`, `+inf`); siblings are skipped once `beta <= alpha`
    /// as the opponent would never allow this branch.
    pub fn alphabeta<B: Board>(
        &mut self,
        board: &B,
        maximizing: bool,
        original_player: B::Piece,
        max_depth: usize,
        mut alpha: f64,
        mut beta: f64,
    ) -> Result<f64> {
        self.node_count += 1;

        if board.is_win() || board.is_draw() || max_depth == 0 {
            return Ok(board.evaluate(original_player));
        }

        for mv in board.legal_moves() {
            let next = board.play(mv)?;
            let score =
                self.alphabeta(&next, !maximizing, original_player, max_depth - 1, alpha, beta)?;
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        Ok(if maximizing { alpha } else { beta })
    }

    /// Scores a single move from the root, for the player to move at the root
    fn score_root_move<B: Board>(&mut self, board: &B, mv: B::Move, max_depth: usize) -> Result<f64> {
        let next = board.play(mv)?;
        self.alphabeta(
            &next,
            true,
            board.turn(),
            max_depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
        )
    }

    /// Searches every legal move of `board` and picks the best one for the
    /// player to move, see [`find_best_move`]
    pub fn find_best_move<B: Board>(&mut self, board: &B, max_depth: usize) -> Result<B::Move> {
        if board.is_terminal() {
            return Err(GameError::NoLegalMove);
        }
        let moves = board.legal_moves();
        let scores = moves
            .iter()
            .map(|&mv| self.score_root_move(board, mv, max_depth))
            .collect::<Result<Vec<_>>>()?;

        let best_move = select_move(board, &moves, &scores)?;
        debug!(
            ?moves,
            ?scores,
            ?best_move,
            nodes = self.node_count,
            "root search finished"
        );
        Ok(best_move)
    }
}

/// Picks a move given the root scores of `moves`, in exploration order
///
/// The first score only sets the bar. A later move is recorded as best only
/// when it beats the bar strictly, and every move matching the best score
/// joins the tie set. When no move ever beat the first one, the first move of
/// [`Board::tie_break_order`] that is legal and tied is returned instead.
pub(crate) fn select_move<B: Board>(
    board: &B,
    moves: &[B::Move],
    scores: &[f64],
) -> Result<B::Move> {
    let mut best_score: Option<f64> = None;
    let mut best_move = None;
    let mut ties = Vec::new();

    for (&mv, &score) in moves.iter().zip(scores) {
        let bar = *best_score.get_or_insert(score);
        if score > bar {
            best_score = Some(score);
            best_move = Some(mv);
            ties.clear();
        }
        if best_score == Some(score) {
            ties.push(mv);
        }
    }

    match best_move {
        Some(mv) => Ok(mv),
        None => {
            trace!(?ties, "no move beat the first score, using tie-break order");
            board
                .tie_break_order()
                .into_iter()
                .find(|mv| moves.contains(mv) && ties.contains(mv))
                .or_else(|| ties.first().copied())
                .ok_or(GameError::NoLegalMove)
        }
    }
}

/// Evaluates `board` with plain minimax, see [`Searcher::minimax`]
pub fn minimax<B: Board>(
    board: &B,
    maximizing: bool,
    original_player: B::Piece,
    max_depth: usize,
) -> Result<f64> {
    Searcher::new().minimax(board, maximizing, original_player, max_depth)
}

/// Evaluates `board` with alpha-beta pruning, see [`Searcher::alphabeta`]
pub fn alphabeta<B: Board>(
    board: &B,
    maximizing: bool,
    original_player: B::Piece,
    max_depth: usize,
    alpha: f64,
    beta: f64,
) -> Result<f64> {
    Searcher::new().alphabeta(board, maximizing, original_player, max_depth, alpha, beta)
}

/// Finds the best move for the player to move in `board`, looking
/// `max_depth` plies past each candidate move
///
/// Moves are explored in [`Board::legal_moves`] order. Returns
/// [`GameError::NoLegalMove`] on a won or drawn game; check
/// [`BoardExt::is_terminal`] first.
pub fn find_best_move<B: Board>(board: &B, max_depth: usize) -> Result<B::Move> {
    Searcher::new().find_best_move(board, max_depth)
}

/// Same as [`find_best_move`], with every root move searched on the rayon
/// thread pool
///
/// Root branches share nothing, so the result is identical to the sequential
/// search.
pub fn find_best_move_parallel<B>(board: &B, max_depth: usize) -> Result<B::Move>
where
    B: Board + Sync,
    B::Move: Send + Sync,
{
    if board.is_terminal() {
        return Err(GameError::NoLegalMove);
    }
    let moves = board.legal_moves();
    let results = moves
        .par_iter()
        .map(|&mv| -> Result<(f64, usize)> {
            let mut searcher = Searcher::new();
            let score = searcher.score_root_move(board, mv, max_depth)?;
            Ok((score, searcher.node_count))
        })
        .collect::<Result<Vec<(f64, usize)>>>()?;

    let scores: Vec<f64> = results.iter().map(|&(score, _)| score).collect();
    let nodes: usize = results.iter().map(|&(_, nodes)| nodes).sum();

    let best_move = select_move(board, &moves, &scores)?;
    debug!(
        ?moves,
        ?scores,
        ?best_move,
        nodes,
        "parallel root search finished"
    );
    Ok(best_move)
}
