use std::collections::VecDeque;

use crate::node::NodeId;

/// First-in first-out queue of nodes waiting to be examined.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<NodeId>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: NodeId) {
        self.queue.push_back(id);
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
