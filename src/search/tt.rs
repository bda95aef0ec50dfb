//! Transposition table.
//!
//! Caches node values keyed on the board, the searching color and the kind of
//! node (maximizing or minimizing) it was searched as. Values are scored from
//! the searching color's side, so entries written for one color never answer
//! a search for the other. Values are only reused at the same remaining depth,
//! so a cached answer is always the answer the search would have computed.
//!
//! The table has a fixed number of slots. A key hashes (FxHash) to exactly
//! one slot; on collision the deeper entry of the current generation wins.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Color};

/// Remaining depth used for unlimited searches.
pub const UNLIMITED_DEPTH: u32 = u32::MAX;

/// Whether a node maximizes or minimizes the searching color's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Max,
    Min,
}

impl NodeKind {
    #[must_use]
    pub const fn other(self) -> NodeKind {
        match self {
            NodeKind::Max => NodeKind::Min,
            NodeKind::Min => NodeKind::Max,
        }
    }

    /// The side to move at this kind of node when `color` is searching.
    #[must_use]
    pub const fn mover(self, color: Color) -> Color {
        match self {
            NodeKind::Max => color,
            NodeKind::Min => color.opponent(),
        }
    }
}

/// How a stored value relates to the node's true value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bound {
    Exact,
    /// True value is at least the stored value (the search failed high).
    Lower,
    /// True value is at most the stored value (the search failed low).
    Upper,
}

impl Bound {
    /// Classify a fail-soft result against the window it was searched with.
    #[must_use]
    pub fn classify(value: f64, alpha: f64, beta: f64) -> Bound {
        if value <= alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

/// A cached node value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry {
    pub value: f64,
    pub depth: u32,
    pub bound: Bound,
    generation: u16,
}

impl Entry {
    /// Check if this entry settles a node searched with `(alpha, beta)`.
    #[must_use]
    pub fn decides(&self, alpha: f64, beta: f64) -> bool {
        match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.value >= beta,
            Bound::Upper => self.value <= alpha,
        }
    }
}

/// Table usage counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    pub lookups: u64,
    /// Lookups answered by an entry that settled the node.
    pub hits: u64,
    pub stores: u64,
    /// Stores that evicted an entry for a different position.
    pub replacements: u64,
}

#[derive(Clone, Debug)]
struct Slot {
    board: Board,
    color: Color,
    kind: NodeKind,
    entry: Entry,
}

/// Fixed-size transposition table with depth-preferred replacement.
#[derive(Clone, Debug)]
pub struct TranspositionTable {
    slots: Vec<Option<Slot>>,
    len: usize,
    generation: u16,
    stats: TableStats,
}

impl TranspositionTable {
    /// Create a table with `capacity` slots (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity.max(1)],
            len: 0,
            generation: 0,
            stats: TableStats::default(),
        }
    }

    /// Look up a node searched at exactly `depth` plies remaining.
    ///
    /// Returns the entry only if it settles the `(alpha, beta)` window.
    pub fn lookup(
        &mut self,
        board: &Board,
        color: Color,
        kind: NodeKind,
        depth: u32,
        alpha: f64,
        beta: f64,
    ) -> Option<Entry> {
        self.stats.lookups += 1;
        let index = self.index(board, color, kind);
        let slot = self.slots[index].as_ref()?;
        let matches = slot.color == color
            && slot.kind == kind
            && slot.entry.depth == depth
            && slot.board == *board;
        if matches && slot.entry.decides(alpha, beta) {
            self.stats.hits += 1;
            Some(slot.entry)
        } else {
            None
        }
    }

    /// Store a node value.
    ///
    /// An occupied slot keeps its entry only if that entry was written in the
    /// current generation and is strictly deeper than the new one.
    pub fn store(
        &mut self,
        board: &Board,
        color: Color,
        kind: NodeKind,
        depth: u32,
        value: f64,
        bound: Bound,
    ) {
        let index = self.index(board, color, kind);
        let entry = Entry {
            value,
            depth,
            bound,
            generation: self.generation,
        };

        match &mut self.slots[index] {
            Some(slot) => {
                if slot.entry.generation == self.generation && slot.entry.depth > depth {
                    return;
                }
                if slot.color != color || slot.kind != kind || slot.board != *board {
                    self.stats.replacements += 1;
                    slot.board = board.clone();
                    slot.color = color;
                    slot.kind = kind;
                }
                slot.entry = entry;
            }
            empty @ None => {
                *empty = Some(Slot {
                    board: board.clone(),
                    color,
                    kind,
                    entry,
                });
                self.len += 1;
            }
        }
        self.stats.stores += 1;
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    /// Start a new generation. Older entries stay readable but no longer
    /// resist replacement.
    pub fn new_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn stats(&self) -> &TableStats {
        &self.stats
    }

    fn index(&self, board: &Board, color: Color, kind: NodeKind) -> usize {
        let mut hasher = FxHasher::default();
        board.hash(&mut hasher);
        color.hash(&mut hasher);
        kind.hash(&mut hasher);
        (hasher.finish() % self.slots.len() as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DARK: Color = Color::Dark;

    fn board() -> Board {
        Board::new(8).unwrap()
    }

    fn get(tt: &mut TranspositionTable, board: &Board, color: Color, kind: NodeKind, depth: u32) -> Option<Entry> {
        tt.lookup(board, color, kind, depth, f64::NEG_INFINITY, f64::INFINITY)
    }

    #[test]
    fn test_store_and_lookup() {
        let mut tt = TranspositionTable::new(64);
        assert!(get(&mut tt, &board(), DARK, NodeKind::Max, 3).is_none());

        tt.store(&board(), DARK, NodeKind::Max, 3, 12.0, Bound::Exact);
        let entry = get(&mut tt, &board(), DARK, NodeKind::Max, 3).unwrap();
        assert_eq!(entry.value, 12.0);
        assert_eq!(entry.bound, Bound::Exact);
        assert_eq!(tt.len(), 1);
        assert_eq!(tt.stats().hits, 1);
        assert_eq!(tt.stats().lookups, 2);
    }

    #[test]
    fn test_lookup_requires_same_kind_and_depth() {
        let mut tt = TranspositionTable::new(64);
        tt.store(&board(), DARK, NodeKind::Max, 3, 12.0, Bound::Exact);

        assert!(get(&mut tt, &board(), DARK, NodeKind::Min, 3).is_none());
        assert!(get(&mut tt, &board(), DARK, NodeKind::Max, 2).is_none());
        assert!(get(&mut tt, &board(), DARK, NodeKind::Max, 4).is_none());
    }

    #[test]
    fn test_entries_are_per_searching_color() {
        let mut tt = TranspositionTable::new(64);
        tt.store(&board(), Color::Dark, NodeKind::Min, 1, 1.0, Bound::Exact);
        assert!(get(&mut tt, &board(), Color::Light, NodeKind::Min, 1).is_none());
        assert_eq!(get(&mut tt, &board(), Color::Dark, NodeKind::Min, 1).unwrap().value, 1.0);

        tt.store(&board(), Color::Light, NodeKind::Min, 1, -1.0, Bound::Exact);
        assert_eq!(get(&mut tt, &board(), Color::Light, NodeKind::Min, 1).unwrap().value, -1.0);
    }

    #[test]
    fn test_hits_count_only_deciding_entries() {
        let mut tt = TranspositionTable::new(64);
        tt.store(&board(), DARK, NodeKind::Max, 2, 6.0, Bound::Lower);

        // A lower bound of 6 says nothing about a window reaching past it.
        assert!(tt.lookup(&board(), DARK, NodeKind::Max, 2, 0.0, 7.0).is_none());
        assert_eq!(tt.stats().hits, 0);

        let entry = tt.lookup(&board(), DARK, NodeKind::Max, 2, 0.0, 5.0).unwrap();
        assert_eq!(entry.value, 6.0);
        assert_eq!(tt.stats().hits, 1);
        assert_eq!(tt.stats().lookups, 2);
    }

    #[test]
    fn test_depth_preferred_replacement() {
        // A single slot forces every key to collide.
        let mut tt = TranspositionTable::new(1);
        let other = Board::new(6).unwrap();

        tt.store(&board(), DARK, NodeKind::Max, 5, 1.0, Bound::Exact);
        tt.store(&other, DARK, NodeKind::Max, 2, 2.0, Bound::Exact);
        assert!(get(&mut tt, &other, DARK, NodeKind::Max, 2).is_none());
        assert!(get(&mut tt, &board(), DARK, NodeKind::Max, 5).is_some());

        tt.store(&other, DARK, NodeKind::Max, 5, 2.0, Bound::Exact);
        assert!(get(&mut tt, &other, DARK, NodeKind::Max, 5).is_some());
        assert_eq!(tt.stats().replacements, 1);
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_new_generation_allows_replacement() {
        let mut tt = TranspositionTable::new(1);
        let other = Board::new(6).unwrap();

        tt.store(&board(), DARK, NodeKind::Max, 5, 1.0, Bound::Exact);
        tt.new_generation();
        tt.store(&other, Color::Light, NodeKind::Min, 1, 2.0, Bound::Upper);

        let entry = tt.lookup(&other, Color::Light, NodeKind::Min, 1, 3.0, 5.0).unwrap();
        assert_eq!(entry.bound, Bound::Upper);
        assert_eq!(tt.stats().replacements, 1);
    }

    #[test]
    fn test_clear() {
        let mut tt = TranspositionTable::new(16);
        tt.store(&board(), DARK, NodeKind::Max, 1, 0.0, Bound::Exact);
        tt.clear();
        assert!(tt.is_empty());
        assert!(get(&mut tt, &board(), DARK, NodeKind::Max, 1).is_none());
        assert_eq!(tt.capacity(), 16);
    }

    #[test]
    fn test_bound_classify_and_decides() {
        assert_eq!(Bound::classify(1.0, 1.0, 5.0), Bound::Upper);
        assert_eq!(Bound::classify(5.0, 1.0, 5.0), Bound::Lower);
        assert_eq!(Bound::classify(3.0, 1.0, 5.0), Bound::Exact);

        let lower = Entry { value: 6.0, depth: 1, bound: Bound::Lower, generation: 0 };
        assert!(lower.decides(0.0, 5.0));
        assert!(!lower.decides(0.0, 7.0));

        let upper = Entry { value: -1.0, depth: 1, bound: Bound::Upper, generation: 0 };
        assert!(upper.decides(0.0, 5.0));
        assert!(!upper.decides(-2.0, 5.0));
    }

    #[test]
    fn test_node_kind() {
        assert_eq!(NodeKind::Max.other(), NodeKind::Min);
        assert_eq!(NodeKind::Max.mover(Color::Light), Color::Light);
        assert_eq!(NodeKind::Min.mover(Color::Light), Color::Dark);
    }
}
