use crate::board::{Board, Move};
use crate::node::{NodeArena, NodeId};

/// Ordered path from the start board to the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    boards: Vec<Board>,
    moves: Vec<Move>,
}

impl Solution {
    /// Boards from start to goal. Never empty.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Blank moves between consecutive boards.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves. Zero when the start board is already solved.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn start(&self) -> &Board {
        &self.boards[0]
    }

    pub fn goal(&self) -> &Board {
        &self.boards[self.boards.len() - 1]
    }
}

/// Walks parent links from `goal` back to the root and reverses the result.
pub fn reconstruct(arena: &NodeArena, goal: NodeId) -> Solution {
    let mut boards = Vec::with_capacity(arena.get(goal).depth() + 1);
    let mut moves = Vec::with_capacity(arena.get(goal).depth());

    let mut current = Some(goal);
    while let Some(id) = current {
        let node = arena.get(id);
        boards.push(node.board().clone());
        if let Some(mv) = node.via() {
            moves.push(mv);
        }
        current = node.parent();
    }

    boards.reverse();
    moves.reverse();
    Solution { boards, moves }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn root_alone_is_a_zero_move_path() {
        let mut arena = NodeArena::new();
        let root = arena.push(Node::root(Board::goal(3)));
        let solution = reconstruct(&arena, root);
        assert_eq!(solution.len(), 0);
        assert!(solution.is_empty());
        assert_eq!(solution.boards(), &[Board::goal(3)]);
        assert_eq!(solution.start(), solution.goal());
    }

    #[test]
    fn path_runs_from_root_to_goal() {
        let goal = Board::goal(3);
        let one = goal.apply_move(Move::Right).unwrap();
        let two = one.apply_move(Move::Down).unwrap();

        // Built from the far end so that the tree runs two -> one -> goal.
        let mut arena = NodeArena::new();
        let root = arena.push(Node::root(two.clone()));
        let mid = arena.push(Node::child(one.clone(), root, Move::Up, 0));
        let end = arena.push(Node::child(goal.clone(), mid, Move::Left, 1));
        // Unrelated sibling must not show up.
        arena.push(Node::child(goal.clone(), root, Move::Down, 0));

        let solution = reconstruct(&arena, end);
        assert_eq!(solution.boards(), &[two, one, goal]);
        assert_eq!(solution.moves(), &[Move::Up, Move::Left]);
        assert_eq!(solution.len(), 2);
    }
}
