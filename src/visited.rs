//! Sets of boards that have already been expanded.
//!
//! Two interchangeable backends sit behind [`VisitedIndex`]: a hash set over the
//! canonical key and a fixed-depth trie with one level per cell.

use rustc_hash::FxHashSet;

use crate::board::BoardKey;

/// Membership index keyed by [`BoardKey`].
///
/// A key is seen iff it was inserted earlier in the same session, whatever path
/// produced the board.
pub trait VisitedIndex {
    fn contains(&self, key: &BoardKey) -> bool;

    /// Records `key`. Returns `false` if it was already present.
    fn insert(&mut self, key: BoardKey) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
pub struct HashVisited {
    seen: FxHashSet<BoardKey>,
}

impl HashVisited {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VisitedIndex for HashVisited {
    fn contains(&self, key: &BoardKey) -> bool {
        self.seen.contains(key)
    }

    fn insert(&mut self, key: BoardKey) -> bool {
        self.seen.insert(key)
    }

    fn len(&self) -> usize {
        self.seen.len()
    }
}

#[derive(Debug, Default)]
struct TrieNode {
    /// `(cell value, index of child node)`. At most one entry per alphabet symbol.
    children: Vec<(u8, u32)>,
}

impl TrieNode {
    fn child(&self, value: u8) -> Option<u32> {
        self.children
            .iter()
            .find(|&&(v, _)| v == value)
            .map(|&(_, idx)| idx)
    }
}

/// Trie over the flattened cells. Every stored key has the same length, so a
/// full-depth walk that never misses means the key is present.
#[derive(Debug)]
pub struct TrieVisited {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for TrieVisited {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }
}

impl TrieVisited {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of trie nodes allocated, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl VisitedIndex for TrieVisited {
    fn contains(&self, key: &BoardKey) -> bool {
        let mut current = 0usize;
        for &value in key.as_slice() {
            match self.nodes[current].child(value) {
                Some(next) => current = next as usize,
                None => return false,
            }
        }
        true
    }

    fn insert(&mut self, key: BoardKey) -> bool {
        let mut current = 0usize;
        let mut created = false;
        for &value in key.as_slice() {
            current = match self.nodes[current].child(value) {
                Some(next) => next as usize,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.push((value, next as u32));
                    created = true;
                    next
                }
            };
        }
        if created {
            self.len += 1;
        }
        created
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Move};

    fn keys() -> Vec<BoardKey> {
        let goal = Board::goal(3);
        let right = goal.apply_move(Move::Right).unwrap();
        let down = goal.apply_move(Move::Down).unwrap();
        let right_down = right.apply_move(Move::Down).unwrap();
        [goal, right, down, right_down]
            .iter()
            .map(Board::canonical_key)
            .collect()
    }

    fn exercise<V: VisitedIndex>(mut index: V) {
        let keys = keys();
        assert!(index.is_empty());
        for key in &keys {
            assert!(!index.contains(key));
        }

        assert!(index.insert(keys[0].clone()));
        assert!(index.insert(keys[2].clone()));
        assert!(!index.insert(keys[0].clone()));
        assert_eq!(index.len(), 2);

        assert!(index.contains(&keys[0]));
        assert!(!index.contains(&keys[1]));
        assert!(index.contains(&keys[2]));
        assert!(!index.contains(&keys[3]));
    }

    #[test]
    fn hash_backend_tracks_membership() {
        exercise(HashVisited::new());
    }

    #[test]
    fn trie_backend_tracks_membership() {
        exercise(TrieVisited::new());
    }

    #[test]
    fn trie_shares_common_prefixes() {
        let mut trie = TrieVisited::new();
        let a = Board::from_cells(2, vec![0, 1, 2, 3]).unwrap();
        let b = Board::from_cells(2, vec![0, 1, 3, 2]).unwrap();
        trie.insert(a.canonical_key());
        assert_eq!(trie.node_count(), 5);
        trie.insert(b.canonical_key());
        // Only the last two levels branch.
        assert_eq!(trie.node_count(), 7);
        assert_eq!(trie.len(), 2);
    }
}
