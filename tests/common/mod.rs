//! Helpers shared by the integration tests.

#![allow(dead_code)]

use npuzzle::{Board, BoardKey, HashVisited, Move, VisitedIndex};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::{HashMap, VecDeque};

/// Visited index that panics if the search ever inserts a key twice.
#[derive(Default)]
pub struct StrictVisited {
    inner: HashVisited,
}

impl VisitedIndex for StrictVisited {
    fn contains(&self, key: &BoardKey) -> bool {
        self.inner.contains(key)
    }

    fn insert(&mut self, key: BoardKey) -> bool {
        assert!(
            !self.inner.contains(&key),
            "board {:?} expanded twice",
            key.as_slice()
        );
        self.inner.insert(key)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Board reached from the goal by `steps` random legal blank moves.
pub fn scrambled(size: usize, steps: usize, seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::goal(size);
    let mut taken = 0;
    while taken < steps {
        let mv = Move::ALL[rng.gen_range(0..4)];
        if let Some(next) = board.apply_move(mv) {
            board = next;
            taken += 1;
        }
    }
    board
}

/// Whether `b` is `a` with the blank swapped into one orthogonal neighbour.
pub fn is_legal_step(a: &Board, b: &Board) -> bool {
    Move::ALL.iter().any(|&mv| a.apply_move(mv).as_ref() == Some(b))
}

/// Independent distance table: plain BFS outward from the goal. Moves are
/// reversible, so the distance from the goal equals the distance to it.
pub fn distances_from_goal(size: usize) -> HashMap<Board, usize> {
    let goal = Board::goal(size);
    let mut dist = HashMap::from([(goal.clone(), 0)]);
    let mut queue = VecDeque::from([goal]);
    while let Some(board) = queue.pop_front() {
        let d = dist[&board];
        for mv in Move::ALL {
            if let Some(next) = board.apply_move(mv) {
                if !dist.contains_key(&next) {
                    dist.insert(next.clone(), d + 1);
                    queue.push_back(next);
                }
            }
        }
    }
    dist
}
