//! The canonical successor tree over the 12 quarter turns.
//!
//! A naive depth-first search tries all 12 moves at every node, but most
//! sibling orderings are redundant: applying the same face twice in
//! opposite directions cancels out, and turning two opposite faces of the
//! same axis commutes, so trying both orders just duplicates work. This
//! module builds a tree, rooted once and shared for the life of the
//! process, where each node only lists the moves that can possibly lead
//! to a new canonical path.
//!
//! The pruning rule, traced against a reference search tree's own test
//! assertions:
//!   - A move can never immediately follow its own inverse on the same
//!     face (R then R' is a no-op).
//!   - Of the two faces on one axis (U/D, L/R, F/B), `Face::is_secondary`
//!     marks one as secondary; a primary-face move may be followed by a
//!     same-axis opposite-face move, but not the reverse order, since the
//!     two turns commute and trying both orders would just double the
//!     branching factor for identical reachable states.
//!   - Any other pair of moves is unconstrained.

use std::sync::OnceLock;

use crate::moves::{Move, QUARTER_MOVES};

/// Whether `next` may directly follow `prev` (`None` for the root, where
/// every quarter turn is a legal first move).
pub fn allowed_after(prev: Option<Move>, next: Move) -> bool {
    let Some(prev) = prev else {
        return true;
    };
    if next.face == prev.face {
        next.turn != crate::moves::CanReverse::reverse(&prev).turn
    } else if next.face == prev.face.axis_opposite() {
        !prev.face.is_secondary()
    } else {
        true
    }
}

/// One node of the canonical tree: the move it represents, and the list
/// of children (by index into `QUARTER_MOVES`) legal to follow it with.
pub struct Node {
    pub mv: Move,
    pub children: Vec<usize>,
}

/// The canonical tree's root layer: all 12 quarter turns, each carrying
/// its own (possibly empty) child list.
pub struct MoveTree {
    pub nodes: Vec<Node>,
}

impl MoveTree {
    fn build() -> MoveTree {
        let nodes = QUARTER_MOVES
            .iter()
            .map(|&mv| Node {
                mv,
                children: children_of(Some(mv)),
            })
            .collect();
        MoveTree { nodes }
    }

    pub fn roots(&self) -> &[usize] {
        ROOTS.get_or_init(|| (0..QUARTER_MOVES.len()).collect())
    }

    pub fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }
}

fn children_of(prev: Option<Move>) -> Vec<usize> {
    QUARTER_MOVES
        .iter()
        .enumerate()
        .filter(|&(_, &next)| allowed_after(prev, next))
        .map(|(i, _)| i)
        .collect()
}

static TREE: OnceLock<MoveTree> = OnceLock::new();
static ROOTS: OnceLock<Vec<usize>> = OnceLock::new();

/// The shared canonical move tree, built once on first use.
pub fn tree() -> &'static MoveTree {
    TREE.get_or_init(MoveTree::build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{Face, Turn};

    fn idx_of(face: Face, turn: Turn) -> usize {
        QUARTER_MOVES
            .iter()
            .position(|m| m.face == face && m.turn == turn)
            .unwrap()
    }

    fn has_child(from: usize, to: usize) -> bool {
        tree().node(from).children.contains(&to)
    }

    #[test]
    fn same_face_inverse_is_pruned() {
        let l = idx_of(Face::L, Turn::Cw);
        let l_inv = idx_of(Face::L, Turn::Ccw);
        assert!(!has_child(l, l_inv));
        assert!(!has_child(l_inv, l));
    }

    #[test]
    fn same_face_same_turn_is_kept() {
        let l = idx_of(Face::L, Turn::Cw);
        assert!(has_child(l, l));
    }

    #[test]
    fn primary_before_secondary_is_kept_both_ways() {
        let r = idx_of(Face::R, Turn::Cw);
        let l = idx_of(Face::L, Turn::Cw);
        let l_inv = idx_of(Face::L, Turn::Ccw);
        assert!(has_child(r, l));
        assert!(has_child(r, l_inv));
    }

    #[test]
    fn secondary_before_primary_is_pruned() {
        let l = idx_of(Face::L, Turn::Cw);
        let r = idx_of(Face::R, Turn::Cw);
        let r_inv = idx_of(Face::R, Turn::Ccw);
        assert!(!has_child(l, r));
        assert!(!has_child(l, r_inv));
    }

    #[test]
    fn depth_two_paths_reach_distinct_states() {
        let mut seen = Vec::new();
        for &a in tree().roots() {
            let node_a = tree().node(a);
            for &b in &node_a.children {
                let node_b = tree().node(b);
                let result = node_a.mv.cube().compose(&node_b.mv.cube());
                assert!(
                    !seen.contains(&result),
                    "duplicate length-2 canonical path collapsing to the same state"
                );
                seen.push(result);
            }
        }
    }
}
