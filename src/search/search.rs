//! Minimax and alpha-beta search.
//!
//! The searching color is the maximizing side. Every node is searched as
//! either a `Max` node (the searching color to move) or a `Min` node (its
//! opponent to move), and all values are from the searching color's
//! perspective.
//!
//! A side without a legal move passes: the node takes the value of the same
//! board searched as the other kind of node, one ply deeper. A node where
//! neither side can move is a finished game and is scored with the
//! evaluator's terminal value.

use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Color, Move};
use crate::error::Result;
use crate::eval::Evaluator;
use crate::rules::{has_moves, legal_moves, play_move, MoveList};

use super::config::{Algorithm, SearchConfig};
use super::ordering::order_successors;
use super::stats::SearchStats;
use super::tt::{Bound, NodeKind, TranspositionTable, UNLIMITED_DEPTH};

/// Outcome of a search from one position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best move for the searching color, `None` if it has no legal move.
    pub best_move: Option<Move>,

    /// Root value from the searching color's perspective.
    pub value: f64,

    pub stats: SearchStats,
}

// What a node does after its cache lookup.
enum Expansion {
    Leaf(f64),
    Pass,
    Moves(MoveList),
}

/// Game tree searcher.
///
/// Owns its configuration, evaluator and transposition table. By default the
/// table is emptied at the start of every search.
pub struct Searcher {
    config: SearchConfig,
    evaluator: Box<dyn Evaluator>,
    table: TranspositionTable,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher, rejecting invalid configurations.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let capacity = if config.caching { config.tt_capacity } else { 1 };
        Ok(Self {
            evaluator: config.evaluator.build(),
            table: TranspositionTable::new(capacity),
            stats: SearchStats::default(),
            config,
        })
    }

    /// Replace the configured evaluator.
    pub fn with_evaluator<E: Evaluator + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Choose a move for `color`, or `None` if it has no legal move.
    pub fn select_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        self.search(board, color).best_move
    }

    /// Search `board` for `color` and report the move, value and statistics.
    pub fn search(&mut self, board: &Board, color: Color) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();

        if self.config.persist_cache {
            self.table.new_generation();
        } else {
            self.table.clear();
        }

        let depth = self.config.depth_limit.unwrap_or(UNLIMITED_DEPTH);
        let (best_move, value) = match self.config.algorithm {
            Algorithm::Minimax => self.minimax(board, color, NodeKind::Max, depth, 0),
            Algorithm::AlphaBeta => self.alphabeta(
                board,
                color,
                NodeKind::Max,
                f64::NEG_INFINITY,
                f64::INFINITY,
                depth,
                0,
            ),
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "{} search for {color}: move={} value={value} {}",
            self.config.algorithm,
            best_move.map_or_else(|| "none".to_string(), |m| m.to_string()),
            self.stats
        );

        SearchResult {
            best_move,
            value,
            stats: self.stats.clone(),
        }
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    fn minimax(
        &mut self,
        board: &Board,
        color: Color,
        kind: NodeKind,
        depth: u32,
        ply: u32,
    ) -> (Option<Move>, f64) {
        self.enter(ply);
        if let Some(value) = self.cached(board, color, kind, depth, ply, f64::NEG_INFINITY, f64::INFINITY) {
            return (None, value);
        }

        let result = match self.expand(board, color, kind, depth) {
            Expansion::Leaf(value) => (None, value),
            Expansion::Pass => {
                let (_, value) = self.minimax(board, color, kind.other(), child_depth(depth), ply + 1);
                (None, value)
            }
            Expansion::Moves(moves) => {
                let mut best_move = None;
                let mut best = worst_value(kind);
                for (mv, next) in successors(board, kind.mover(color), &moves) {
                    let (_, value) = self.minimax(&next, color, kind.other(), child_depth(depth), ply + 1);
                    if improves(kind, value, best) {
                        best = value;
                        best_move = Some(mv);
                    }
                }
                (best_move, best)
            }
        };

        if self.config.caching {
            self.table.store(board, color, kind, depth, result.1, Bound::Exact);
        }
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn alphabeta(
        &mut self,
        board: &Board,
        color: Color,
        kind: NodeKind,
        mut alpha: f64,
        mut beta: f64,
        depth: u32,
        ply: u32,
    ) -> (Option<Move>, f64) {
        self.enter(ply);
        if let Some(value) = self.cached(board, color, kind, depth, ply, alpha, beta) {
            return (None, value);
        }
        let (alpha0, beta0) = (alpha, beta);

        let result = match self.expand(board, color, kind, depth) {
            Expansion::Leaf(value) => (None, value),
            Expansion::Pass => {
                let (_, value) =
                    self.alphabeta(board, color, kind.other(), alpha, beta, child_depth(depth), ply + 1);
                (None, value)
            }
            Expansion::Moves(moves) => {
                let mut list = successors(board, kind.mover(color), &moves);
                if self.config.ordering {
                    order_successors(&mut list, color, kind);
                }

                let mut best_move = None;
                let mut best = worst_value(kind);
                for (mv, next) in list {
                    let (_, value) =
                        self.alphabeta(&next, color, kind.other(), alpha, beta, child_depth(depth), ply + 1);
                    if improves(kind, value, best) {
                        best = value;
                        best_move = Some(mv);
                    }

                    match kind {
                        NodeKind::Max => {
                            if best >= beta {
                                self.stats.cutoffs += 1;
                                break;
                            }
                            alpha = alpha.max(best);
                        }
                        NodeKind::Min => {
                            if best <= alpha {
                                self.stats.cutoffs += 1;
                                break;
                            }
                            beta = beta.min(best);
                        }
                    }
                }
                (best_move, best)
            }
        };

        if self.config.caching {
            let bound = Bound::classify(result.1, alpha0, beta0);
            self.table.store(board, color, kind, depth, result.1, bound);
        }
        result
    }

    fn enter(&mut self, ply: u32) {
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);
    }

    // The root is never answered from the table: it must produce a move.
    #[allow(clippy::too_many_arguments)]
    fn cached(
        &mut self,
        board: &Board,
        color: Color,
        kind: NodeKind,
        depth: u32,
        ply: u32,
        alpha: f64,
        beta: f64,
    ) -> Option<f64> {
        if !self.config.caching || ply == 0 {
            return None;
        }
        let entry = self.table.lookup(board, color, kind, depth, alpha, beta)?;
        self.stats.cache_hits += 1;
        Some(entry.value)
    }

    fn expand(&mut self, board: &Board, color: Color, kind: NodeKind, depth: u32) -> Expansion {
        let mover = kind.mover(color);
        let moves = legal_moves(board, mover);

        if moves.is_empty() && !has_moves(board, mover.opponent()) {
            self.stats.leaf_evaluations += 1;
            return Expansion::Leaf(self.evaluator.terminal(board, color));
        }
        if depth == 0 {
            self.stats.leaf_evaluations += 1;
            return Expansion::Leaf(self.evaluator.evaluate(board, color));
        }
        if moves.is_empty() {
            self.stats.passes += 1;
            return Expansion::Pass;
        }
        Expansion::Moves(moves)
    }
}

fn successors(board: &Board, mover: Color, moves: &MoveList) -> Vec<(Move, Board)> {
    moves
        .iter()
        .filter_map(|&mv| play_move(board, mover, mv).ok().map(|next| (mv, next)))
        .collect()
}

fn child_depth(depth: u32) -> u32 {
    if depth == UNLIMITED_DEPTH {
        depth
    } else {
        depth - 1
    }
}

fn worst_value(kind: NodeKind) -> f64 {
    match kind {
        NodeKind::Max => f64::NEG_INFINITY,
        NodeKind::Min => f64::INFINITY,
    }
}

// Strict comparison: the first of equally valued moves is kept.
fn improves(kind: NodeKind, value: f64, best: f64) -> bool {
    match kind {
        NodeKind::Max => value > best,
        NodeKind::Min => value < best,
    }
}
