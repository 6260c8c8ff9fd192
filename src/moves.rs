use crate::board::Move;
use crate::error::PuzzleError;
use crate::node::{Node, NodeArena, NodeId};

/// Every state one legal move away from node `id`, in [`Move::ALL`] order.
///
/// Each child owns a fresh board and points back at `id`.
pub fn children(arena: &NodeArena, id: NodeId) -> Result<Vec<Node>, PuzzleError> {
    let parent = arena.get(id);
    let board = parent.board();
    let blank = board.zero_position()?;

    let mut children = Vec::with_capacity(4);
    for mv in Move::ALL {
        if let Some(target) = blank.step(mv, board.size()) {
            children.push(Node::child(
                board.copy_with_swap(blank, target),
                id,
                mv,
                parent.depth(),
            ));
        }
    }
    Ok(children)
}
