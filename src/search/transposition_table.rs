//! Fixed-size transposition cache keyed by Zobrist hash.
//!
//! Direct-indexed slots with depth-preferred replacement and generation aging.
//! The table belongs to one `Searcher`; capacity is fixed at construction.

use crate::search::board_scoring::Score;

/// How a stored score relates to the true minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// True value is at least `score` (search failed high).
    Lower,
    /// True value is at most `score` (search failed low).
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    pub depth: u8,
    pub score: Score,
    pub bound: Bound,
}

impl TTEntry {
    /// Whether this entry settles a search of `depth` in the window
    /// `(alpha, beta)`.
    #[inline]
    pub fn usable(&self, depth: u8, alpha: Score, beta: Score) -> bool {
        if self.depth < depth {
            return false;
        }
        match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.score >= beta,
            Bound::Upper => self.score <= alpha,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    generations: Vec<u8>,
    current_generation: u8,
    stats: TTStats,
}

impl TranspositionTable {
    const AGE_REPLACE_THRESHOLD: u8 = 4;
    const DEPTH_REPLACE_MARGIN: u8 = 2;

    pub fn new_with_mb(size_mb: usize) -> Self {
        let bytes = size_mb.max(1) * 1024 * 1024;
        let entry_size = std::mem::size_of::<Option<TTEntry>>().max(1);
        Self::with_capacity((bytes / entry_size).max(1))
    }

    pub fn with_capacity(count: usize) -> Self {
        let count = count.max(1);
        Self {
            entries: vec![None; count],
            generations: vec![0; count],
            current_generation: 0,
            stats: TTStats::default(),
        }
    }

    /// Advance the generation, once per root search.
    #[inline]
    pub fn new_generation(&mut self) {
        self.current_generation = self.current_generation.wrapping_add(1);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.generations.fill(0);
        self.current_generation = 0;
        self.stats = TTStats::default();
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }

    #[inline]
    pub fn stats(&self) -> TTStats {
        self.stats
    }

    #[inline]
    fn idx(&self, key: u64) -> usize {
        (key % self.entries.len() as u64) as usize
    }

    pub fn probe(&mut self, key: u64) -> Option<TTEntry> {
        self.stats.probes += 1;
        let idx = self.idx(key);
        let hit = self.entries[idx].filter(|e| e.key == key);
        if hit.is_some() {
            self.stats.hits += 1;
            self.generations[idx] = self.current_generation;
        }
        hit
    }

    pub fn store(&mut self, entry: TTEntry) {
        self.stats.stores += 1;
        let idx = self.idx(entry.key);
        match self.entries[idx] {
            None => {
                self.entries[idx] = Some(entry);
                self.generations[idx] = self.current_generation;
            }
            Some(existing) => {
                let same_key = existing.key == entry.key;
                let age = self.current_generation.wrapping_sub(self.generations[idx]);
                let stale = age >= Self::AGE_REPLACE_THRESHOLD;

                let replace = if same_key {
                    entry.depth >= existing.depth
                } else {
                    stale
                        || entry.depth.saturating_add(Self::DEPTH_REPLACE_MARGIN) >= existing.depth
                };

                if replace {
                    self.entries[idx] = Some(entry);
                    self.generations[idx] = self.current_generation;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Bound, TTEntry, TTStats, TranspositionTable};

    fn entry(key: u64, depth: u8, score: i32, bound: Bound) -> TTEntry {
        TTEntry {
            key,
            depth,
            score,
            bound,
        }
    }

    #[test]
    fn store_and_probe_round_trip() {
        let mut tt = TranspositionTable::new_with_mb(1);
        let stored = entry(123, 5, 42, Bound::Exact);
        tt.store(stored);
        assert_eq!(tt.probe(123), Some(stored));
        assert_eq!(tt.probe(124), None);
        assert_eq!(
            tt.stats(),
            TTStats {
                probes: 2,
                hits: 1,
                stores: 1,
            }
        );
    }

    #[test]
    fn depth_preferred_replacement() {
        let mut tt = TranspositionTable::new_with_mb(1);
        let key = 555;
        tt.store(entry(key, 2, 1, Bound::Upper));
        tt.store(entry(key, 1, 9, Bound::Exact));
        assert_eq!(tt.probe(key).expect("exists").score, 1);

        tt.store(entry(key, 6, 3, Bound::Lower));
        let got = tt.probe(key).expect("exists");
        assert_eq!(got.depth, 6);
        assert_eq!(got.score, 3);
    }

    #[test]
    fn colliding_keys_evict_shallow_entries_only_when_stale() {
        let mut tt = TranspositionTable::with_capacity(1);
        tt.store(entry(1, 6, 10, Bound::Exact));
        tt.store(entry(2, 1, 20, Bound::Exact));
        assert_eq!(tt.probe(1).map(|e| e.score), Some(10));

        for _ in 0..4 {
            tt.new_generation();
        }
        tt.store(entry(2, 1, 20, Bound::Exact));
        assert_eq!(tt.probe(1), None);
        assert_eq!(tt.probe(2).map(|e| e.score), Some(20));
    }

    #[test]
    fn bounds_gate_usability() {
        let exact = entry(1, 2, 50, Bound::Exact);
        assert!(exact.usable(2, -100, 100));
        assert!(!exact.usable(3, -100, 100));

        let lower = entry(1, 2, 150, Bound::Lower);
        assert!(lower.usable(1, -100, 100));
        assert!(!lower.usable(1, -100, 200));

        let upper = entry(1, 2, -150, Bound::Upper);
        assert!(upper.usable(1, -100, 100));
        assert!(!upper.usable(1, -200, 100));
    }

    #[test]
    fn clear_empties_the_table() {
        let mut tt = TranspositionTable::with_capacity(8);
        tt.store(entry(3, 1, 0, Bound::Exact));
        assert!(!tt.is_empty());
        tt.clear();
        assert!(tt.is_empty());
        assert_eq!(tt.stats(), TTStats::default());
    }
}
