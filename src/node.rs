//! Search tree nodes and the arena that owns them.

use crate::board::{Board, Move};

/// Index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// An immutable board snapshot plus the link back to the node it was generated from.
///
/// The parent link records discovery, not ownership: every node is owned by the
/// arena and released with it.
#[derive(Debug, Clone)]
pub struct Node {
    board: Board,
    parent: Option<NodeId>,
    via: Option<Move>,
    depth: usize,
}

impl Node {
    pub fn root(board: Board) -> Self {
        Self {
            board,
            parent: None,
            via: None,
            depth: 0,
        }
    }

    pub fn child(board: Board, parent: NodeId, via: Move, parent_depth: usize) -> Self {
        Self {
            board,
            parent: Some(parent),
            via: Some(via),
            depth: parent_depth + 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Move that produced this node from its parent.
    pub fn via(&self) -> Option<Move> {
        self.via
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Append-only storage for every node built during one search session.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Ids are only handed out by `push`, so lookups cannot miss.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
