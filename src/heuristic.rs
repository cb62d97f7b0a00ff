//! The admissible lower bound the search uses to prune: the pattern
//! database tables in `crate::tables`, strengthened by maximizing over
//! the whole-cube symmetry conjugates in `crate::symmetry`.
//!
//! Each symmetry `s` relabels which physical slot is "slot 0"/"slot 1"
//! without changing how far a position is from solved, so
//! `quad01_bound(s⁻¹ · pos · s)` is exactly as admissible as
//! `quad01_bound(pos)` itself for every `s` — taking the max over all of
//! them (plus the identity) only ever tightens the bound.
//!
//! The tables answer "how far is the cubie that belongs in slot N from
//! being there", which is a question about where that cubie currently
//! *is*, not about whatever cubie currently occupies slot N. `pos.edge(0)`
//! reads the latter (slot occupancy); the former is `pos.invert().edge(0)`
//! (cubie 0's current slot and orientation, read off the inverse
//! permutation). Every table lookup here and in `crate::tables` is keyed
//! on the inverted position for exactly this reason.

use crate::state::Cube;
use crate::{symmetry, tables};

/// An admissible lower bound on the quarter-turn distance from `pos` to
/// solved: the pattern-database bound over edge-slots {0,1} and
/// corner-slots {0,1} jointly, maximized over every whole-cube symmetry
/// conjugate this crate knows about.
pub fn lower_bound(pos: &Cube) -> i32 {
    let mut best = quad01_bound(pos);
    for sym in symmetry::symmetries() {
        let conjugated = sym.invert().compose(pos).compose(sym);
        best = best.max(quad01_bound(&conjugated));
    }
    best
}

fn quad01_bound(pos: &Cube) -> i32 {
    let inv = pos.invert();
    let bound = tables::quad01_dist(inv.edge(0), inv.edge(1), inv.corner(0), inv.corner(1));
    // Re-derive the same distance by direct search rather than table
    // lookup. Bounding the search at `bound` itself (rather than some
    // fixed worst case) keeps this cheap when the bound is small, which it
    // almost always is, while still catching any mismatch between the
    // table's build convention and this function's query convention. Skip
    // the cross-check when the table claims the goal is unreachable (-1):
    // confirming that would need searching out to the build's own depth
    // cap, which defeats the point of keeping this cheap.
    if bound >= 0 {
        debug_assert_eq!(
            bound,
            tables::prefix_search_dist(pos, bound),
            "quad01 bound disagrees with the canonical prefix search for {pos:?}"
        );
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_cube_has_zero_bound() {
        assert_eq!(lower_bound(&Cube::SOLVED), 0);
    }

    #[test]
    fn single_move_has_bound_of_at_most_one() {
        let r = crate::moves::Move::new(crate::moves::Face::R, crate::moves::Turn::Cw).cube();
        assert!(lower_bound(&r) <= 1);
    }

    #[test]
    fn bound_never_exceeds_a_known_upper_bound() {
        // Three arbitrary quarter turns can always be undone by the same
        // three moves reversed, so the true distance is at most 3; an
        // admissible heuristic must never claim more.
        let u = crate::moves::Move::new(crate::moves::Face::U, crate::moves::Turn::Cw).cube();
        let r = crate::moves::Move::new(crate::moves::Face::R, crate::moves::Turn::Cw).cube();
        let f = crate::moves::Move::new(crate::moves::Face::F, crate::moves::Turn::Cw).cube();
        let scrambled = u.compose(&r).compose(&f);
        assert!(lower_bound(&scrambled) <= 3);
    }
}
