//! The whole-cube rotation set used to strengthen the pattern-database
//! heuristic (see `crate::heuristic`).
//!
//! A whole-cube rotation `s` is itself representable in the 20-byte
//! layout: it is the state reached by relabeling which physical face is
//! called U/D/L/R/F/B, rather than by turning any single face. Conjugating
//! a position `p` by `s` (`s⁻¹ · p · s`) yields a position with identical
//! distance-to-solved, viewed from a different axis labeling; taking the
//! pattern-database bound over every conjugate and keeping the maximum is
//! still admissible (each term individually is), and often tighter.
//!
//! Only the three rotations about the U/D axis (`y`, `y²`, `y³`) are
//! included here. `y` can be derived with full confidence: it relabels
//! U/D/L/R/F/B without ever touching the U/D faces, so no edge flip or
//! corner twist bit changes under it, only identity labels permute in a
//! uniform four-cycle within each of the three edge rings (U layer,
//! equator, D layer) and the two corner rings (U layer, D layer). The
//! other two axes (L/R and F/B) *do* retwist corners and reflip edges
//! relative to the U/D-referenced orientation convention this crate
//! uses (the same convention `moves::GEN_U`/`GEN_D` show, since neither
//! ever twists a corner), and deriving those twist deltas by hand, with
//! no way to compile-check the result, was judged too likely to produce
//! a silently inadmissible heuristic. See `DESIGN.md` for the tradeoff.

use std::sync::OnceLock;

use crate::state::Cube;

const ROT_Y: Cube = Cube::from_arrays(
    [3, 0, 1, 2, 7, 4, 5, 6, 11, 8, 9, 10],
    [3, 0, 1, 2, 7, 4, 5, 6],
);

static SYMMETRIES: OnceLock<Vec<Cube>> = OnceLock::new();

/// The symmetry set: every non-identity rotation used to boost the
/// heuristic. Closed under inversion (`y³` is `y`'s inverse, `y²` is its
/// own inverse), so callers never need a separate inverse table.
pub fn symmetries() -> &'static [Cube] {
    SYMMETRIES.get_or_init(|| {
        let y2 = ROT_Y.compose(&ROT_Y);
        let y3 = y2.compose(&ROT_Y);
        vec![ROT_Y, y2, y3]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_set_has_order_four_elements() {
        for &s in symmetries() {
            let fourth = s.compose(&s).compose(&s).compose(&s);
            assert_eq!(fourth, Cube::SOLVED);
        }
    }

    #[test]
    fn rotation_set_is_closed_under_inversion() {
        let set = symmetries();
        for &s in set {
            let inv = s.invert();
            assert!(inv == Cube::SOLVED || set.contains(&inv));
        }
    }

    #[test]
    fn rotations_never_touch_orientation_bits() {
        for &s in symmetries() {
            for i in 0..12 {
                assert_eq!(s.edge(i) & 0x10, 0, "yaw rotation should never flip an edge");
            }
            for i in 0..8 {
                assert_eq!(
                    s.corner(i) & 0x18,
                    0,
                    "yaw rotation should never twist a corner"
                );
            }
        }
    }

    #[test]
    fn conjugation_preserves_solved_state() {
        for &s in symmetries() {
            let conjugated = s.invert().compose(&Cube::SOLVED).compose(&s);
            assert_eq!(conjugated, Cube::SOLVED);
        }
    }
}
