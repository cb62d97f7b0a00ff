//! The single depth-bounded search pass: given a starting position and a
//! maximum depth, either find a solution of at most that many moves or
//! report that none exists at that depth.
//!
//! This is deliberately not an iterative-deepening loop itself — callers
//! that want IDA*'s outer loop (try depth 0, 1, 2, ... until a solution
//! turns up) call `search` repeatedly with increasing `max_depth`, or use
//! `search_iterative`, a thin convenience wrapper built from the same
//! primitive. Keeping the two concerns apart means a caller that already
//! knows a tight depth bound (a known scramble length, say) can skip
//! straight to it.

use crate::heuristic;
use crate::move_tree::tree;
use crate::moves::Move;
use crate::state::Cube;

/// The result of a single depth-bounded `search` call: whether a solution
/// was found within the requested bound, and if so, the move path (empty
/// otherwise). Depth exhaustion is an ordinary value here, not an error —
/// only parsing can fail (`crate::errors::CubeError`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchOutcome {
    pub found: bool,
    pub path: Vec<Move>,
}

impl SearchOutcome {
    fn found(path: Vec<Move>) -> Self {
        SearchOutcome { found: true, path }
    }

    fn not_found() -> Self {
        SearchOutcome {
            found: false,
            path: Vec::new(),
        }
    }
}

/// Searches for a sequence of at most `max_depth` quarter turns taking
/// `start` to solved.
pub fn search(start: Cube, max_depth: usize) -> SearchOutcome {
    let bound = heuristic::lower_bound(&start);
    if bound as usize > max_depth {
        return SearchOutcome::not_found();
    }
    let mut path = Vec::new();
    let roots = tree().roots();
    if dfs(start, max_depth, roots, &mut path) {
        SearchOutcome::found(path)
    } else {
        SearchOutcome::not_found()
    }
}

/// Calls `search` with depth 0, 1, 2, ... up to (and including) `max_depth`,
/// returning the first success. Equivalent to, but cheaper than, calling
/// `search(start, max_depth)` alone when the caller has no prior estimate of
/// the solution length: each shallower attempt re-explores only the nodes
/// the pattern-database bound hasn't already pruned, so the repeated work
/// across depths is small next to the deepest iteration.
pub fn search_iterative(start: Cube, max_depth: usize) -> SearchOutcome {
    for depth in 0..=max_depth {
        let outcome = search(start, depth);
        if outcome.found {
            return outcome;
        }
    }
    SearchOutcome::not_found()
}

/// `candidates` is the list of tree-node indices legal to try next: the
/// root layer on the first call, or the previous node's `children`
/// thereafter.
fn dfs(pos: Cube, remaining: usize, candidates: &[usize], path: &mut Vec<Move>) -> bool {
    if pos == Cube::SOLVED {
        return true;
    }
    if remaining == 0 {
        return false;
    }
    if heuristic::lower_bound(&pos) as usize > remaining {
        return false;
    }
    let t = tree();
    for &idx in candidates {
        let node = t.node(idx);
        let next = pos.compose(&node.mv.cube());
        path.push(node.mv);
        if dfs(next, remaining - 1, &node.children, path) {
            return true;
        }
        path.pop();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{CanReverse, Face, Turn};

    #[test]
    fn solved_cube_solves_at_depth_zero() {
        let outcome = search(Cube::SOLVED, 0);
        assert!(outcome.found);
        assert!(outcome.path.is_empty());
    }

    #[test]
    fn single_move_scramble_solves_in_one() {
        let r = Move::new(Face::R, Turn::Cw);
        let scrambled = Cube::SOLVED.compose(&r.cube());
        let outcome = search(scrambled, 1);
        assert!(outcome.found);
        assert_eq!(outcome.path.len(), 1);
        assert_eq!(outcome.path[0].reverse(), r);
    }

    #[test]
    fn solution_path_actually_solves_the_cube() {
        let u = Move::new(Face::U, Turn::Cw);
        let r = Move::new(Face::R, Turn::Cw);
        let scrambled = Cube::SOLVED.compose(&u.cube()).compose(&r.cube());
        let outcome = search(scrambled, 4);
        assert!(outcome.found);
        let mut replay = scrambled;
        for mv in &outcome.path {
            replay = replay.compose(&mv.cube());
        }
        assert_eq!(replay, Cube::SOLVED);
    }

    #[test]
    fn depth_too_small_reports_no_solution() {
        let u = Move::new(Face::U, Turn::Cw);
        let r = Move::new(Face::R, Turn::Cw);
        let f = Move::new(Face::F, Turn::Cw);
        let scrambled = Cube::SOLVED
            .compose(&u.cube())
            .compose(&r.cube())
            .compose(&f.cube());
        let outcome = search(scrambled, 0);
        assert!(!outcome.found);
        assert!(outcome.path.is_empty());
    }

    #[test]
    fn superflip_is_not_found_within_four_moves() {
        let superflip = crate::algorithm::parse_algorithm(
            "U R2 F B R B2 R U2 L B2 R U' D' R2 F R' L B2 U2 F2",
        )
        .unwrap();
        let outcome = search(superflip, 4);
        assert!(!outcome.found);
    }

    #[test]
    fn r_u_at_depth_two_finds_canonical_two_move_undo() {
        let scrambled = crate::algorithm::parse_algorithm("R U").unwrap();
        let outcome = search(scrambled, 2);
        assert!(outcome.found);
        assert_eq!(outcome.path.len(), 2);
        let text = crate::algorithm::format_algorithm(&outcome.path).unwrap();
        assert_eq!(text, "U' R'");
    }

    #[test]
    fn search_iterative_finds_the_shortest_depth_first() {
        let r = Move::new(Face::R, Turn::Cw);
        let scrambled = Cube::SOLVED.compose(&r.cube());
        let outcome = search_iterative(scrambled, 5);
        assert!(outcome.found);
        assert_eq!(outcome.path.len(), 1);
    }
}
