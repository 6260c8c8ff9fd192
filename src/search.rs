//! Breadth-first search driver.
//!
//! A session owns its node arena, frontier and visited index. Nodes are popped
//! in FIFO order; a goal is reported as soon as it is popped, a board whose key
//! was already expanded is dropped, and anything else is marked visited and
//! expanded. Children are queued without a visited check, so the frontier may
//! hold duplicates until they are popped.

use std::time::{Duration, Instant};

use crate::board::Board;
use crate::config::{Budget, SearchConfig, VisitedBackend};
use crate::error::PuzzleError;
use crate::frontier::Frontier;
use crate::moves::children;
use crate::node::{Node, NodeArena, NodeId};
use crate::path::{reconstruct, Solution};
use crate::visited::{HashVisited, TrieVisited, VisitedIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Found(NodeId),
    /// Every reachable board was expanded without meeting the goal.
    Exhausted,
    /// The configured [`Budget`] ran out first.
    BudgetExceeded,
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SearchState::Running)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes handed to the move generator.
    pub expanded: usize,
    /// Children pushed onto the frontier.
    pub generated: usize,
    /// Popped nodes dropped because their board was already expanded.
    pub discarded: usize,
    pub max_frontier: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(Solution),
    Exhausted,
    BudgetExceeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: Outcome,
    pub stats: SearchStats,
}

pub struct Search<V: VisitedIndex = HashVisited> {
    arena: NodeArena,
    frontier: Frontier,
    visited: V,
    budget: Budget,
    stats: SearchStats,
    started: Instant,
    state: SearchState,
}

impl Search<HashVisited> {
    pub fn with_hash_index(start: Board, budget: Budget) -> Result<Self, PuzzleError> {
        Self::new(start, budget, HashVisited::new())
    }
}

impl<V: VisitedIndex> Search<V> {
    /// Starts a session at `start`. The board must be a permutation of `0..N²`.
    pub fn new(start: Board, budget: Budget, visited: V) -> Result<Self, PuzzleError> {
        start.validate()?;
        start.zero_position()?;

        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();
        frontier.push(arena.push(Node::root(start)));

        Ok(Self {
            arena,
            frontier,
            visited,
            budget,
            stats: SearchStats {
                max_frontier: 1,
                ..SearchStats::default()
            },
            started: Instant::now(),
            state: SearchState::Running,
        })
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn visited(&self) -> &V {
        &self.visited
    }

    pub fn stats(&self) -> SearchStats {
        if self.state.is_terminal() {
            self.stats
        } else {
            SearchStats {
                elapsed: self.started.elapsed(),
                ..self.stats
            }
        }
    }

    /// Pops one node and acts on it. Terminal states are sticky.
    pub fn step(&mut self) -> Result<SearchState, PuzzleError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let Some(id) = self.frontier.pop() else {
            return Ok(self.finish(SearchState::Exhausted));
        };

        let node = self.arena.get(id);
        if node.board().is_goal() {
            return Ok(self.finish(SearchState::Found(id)));
        }
        if self.budget.is_spent(self.stats.expanded, self.started) {
            return Ok(self.finish(SearchState::BudgetExceeded));
        }

        let key = node.board().canonical_key();
        if self.visited.contains(&key) {
            self.stats.discarded += 1;
            return Ok(self.state);
        }
        self.visited.insert(key);

        let kids = children(&self.arena, id)?;
        self.stats.expanded += 1;
        self.stats.generated += kids.len();
        for child in kids {
            let child_id = self.arena.push(child);
            self.frontier.push(child_id);
        }
        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());

        Ok(self.state)
    }

    /// Steps until the search reaches a terminal state.
    pub fn run(&mut self) -> Result<SearchState, PuzzleError> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        Ok(self.state)
    }

    /// Path to the goal, once one has been found.
    pub fn solution(&self) -> Option<Solution> {
        match self.state {
            SearchState::Found(id) => Some(reconstruct(&self.arena, id)),
            _ => None,
        }
    }

    /// Runs to completion and packages the result.
    pub fn into_report(mut self) -> Result<SearchReport, PuzzleError> {
        let outcome = loop {
            match self.step()? {
                SearchState::Running => continue,
                SearchState::Found(id) => break Outcome::Found(reconstruct(&self.arena, id)),
                SearchState::Exhausted => break Outcome::Exhausted,
                SearchState::BudgetExceeded => break Outcome::BudgetExceeded,
            }
        };
        Ok(SearchReport {
            outcome,
            stats: self.stats,
        })
    }

    fn finish(&mut self, state: SearchState) -> SearchState {
        self.stats.elapsed = self.started.elapsed();
        self.state = state;
        state
    }
}

/// Runs one search session for `start` under `config`.
pub fn solve(start: Board, config: &SearchConfig) -> Result<SearchReport, PuzzleError> {
    config.validate()?;
    if start.size() != config.size {
        return Err(PuzzleError::SizeMismatch {
            expected: config.size,
            found: start.size(),
        });
    }
    start.validate()?;

    if config.parity_precheck && !start.is_solvable() {
        return Ok(SearchReport {
            outcome: Outcome::Exhausted,
            stats: SearchStats::default(),
        });
    }

    match config.visited {
        VisitedBackend::Hash => Search::new(start, config.budget, HashVisited::new())?.into_report(),
        VisitedBackend::Trie => Search::new(start, config.budget, TrieVisited::new())?.into_report(),
    }
}
