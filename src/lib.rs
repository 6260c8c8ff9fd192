//! Breadth-first shortest-path solver for the N-puzzle.
//!
//! A [`Search`] session owns a node arena, a FIFO [`Frontier`] and a
//! [`VisitedIndex`]; [`solve`] wires them together from a [`SearchConfig`].

pub mod board;
pub mod config;
pub mod error;
pub mod frontier;
pub mod moves;
pub mod node;
pub mod path;
pub mod search;
pub mod text;
pub mod visited;

pub use board::{Board, BoardKey, Move, Position, MAX_SIZE};
pub use config::{Budget, SearchConfig, VisitedBackend, DEFAULT_SIZE};
pub use error::{ParseError, PuzzleError};
pub use frontier::Frontier;
pub use node::{Node, NodeArena, NodeId};
pub use path::{reconstruct, Solution};
pub use search::{solve, Outcome, Search, SearchReport, SearchState, SearchStats};
pub use visited::{HashVisited, TrieVisited, VisitedIndex};
