//! The six faces, the 12 quarter-turn generators, and the 18 named moves.
//!
//! Generator byte arrays are hand-authored constants (ported from the
//! corpus this crate is distilled from), not derived at runtime: they are
//! an external contract, testable by the face-order and inverse identities
//! in the unit tests below.

use std::fmt;

use enum_iterator::Sequence;

use crate::state::Cube;

pub trait CanReverse: Sized {
    fn reverse(&self) -> Self;
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Sequence)]
pub enum Face {
    U,
    D,
    L,
    R,
    F,
    B,
}

impl Face {
    /// The opposite face of the same axis (U/D, L/R, F/B).
    pub fn axis_opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::R => Face::L,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }

    /// R, D, and B are the canonicalization's primary faces; L, U, F are
    /// secondary (see `crate::move_tree`).
    pub fn is_secondary(self) -> bool {
        matches!(self, Face::L | Face::U | Face::F)
    }

    fn generator(self) -> &'static Cube {
        match self {
            Face::U => &GEN_U,
            Face::D => &GEN_D,
            Face::L => &GEN_L,
            Face::R => &GEN_R,
            Face::F => &GEN_F,
            Face::B => &GEN_B,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::L => 'L',
            Face::R => 'R',
            Face::F => 'F',
            Face::B => 'B',
        };
        write!(f, "{c}")
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Sequence)]
pub enum Turn {
    Cw,
    Ccw,
    Double,
}

impl Turn {
    fn opposite(self) -> Turn {
        match self {
            Turn::Cw => Turn::Ccw,
            Turn::Ccw => Turn::Cw,
            Turn::Double => Turn::Double,
        }
    }
}

/// A single named move: one of the 18 face/turn combinations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Sequence)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    pub fn new(face: Face, turn: Turn) -> Self {
        Move { face, turn }
    }

    const fn new_const(face: Face, turn: Turn) -> Self {
        Move { face, turn }
    }

    /// The state this move produces when applied to the solved cube.
    pub fn cube(&self) -> Cube {
        let gen = self.face.generator();
        match self.turn {
            Turn::Cw => *gen,
            Turn::Ccw => gen.invert(),
            Turn::Double => gen.compose(gen),
        }
    }

    /// Whether this move is one of the 12 quarter turns the search tree
    /// explores; half turns never appear as tree edges.
    pub fn is_quarter(&self) -> bool {
        !matches!(self.turn, Turn::Double)
    }
}

impl CanReverse for Move {
    /// The move that undoes this one: R' undoes R, R undoes R', R2 undoes
    /// itself.
    fn reverse(&self) -> Move {
        Move::new(self.face, self.turn.opposite())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.turn {
            Turn::Cw => write!(f, "{}", self.face),
            Turn::Ccw => write!(f, "{}'", self.face),
            Turn::Double => write!(f, "{}2", self.face),
        }
    }
}

/// The 12 quarter turns, in a fixed, stable order used to index the
/// canonical successor tree.
pub const QUARTER_MOVES: [Move; 12] = [
    Move::new_const(Face::U, Turn::Cw),
    Move::new_const(Face::U, Turn::Ccw),
    Move::new_const(Face::D, Turn::Cw),
    Move::new_const(Face::D, Turn::Ccw),
    Move::new_const(Face::L, Turn::Cw),
    Move::new_const(Face::L, Turn::Ccw),
    Move::new_const(Face::R, Turn::Cw),
    Move::new_const(Face::R, Turn::Ccw),
    Move::new_const(Face::F, Turn::Cw),
    Move::new_const(Face::F, Turn::Ccw),
    Move::new_const(Face::B, Turn::Cw),
    Move::new_const(Face::B, Turn::Ccw),
];

/// All 18 named moves (12 quarter turns plus the 6 derived half turns).
pub fn all_moves() -> [Move; 18] {
    let mut out = [QUARTER_MOVES[0]; 18];
    for (face_idx, face) in enum_iterator::all::<Face>().enumerate() {
        out[face_idx * 3] = Move::new(face, Turn::Cw);
        out[face_idx * 3 + 1] = Move::new(face, Turn::Ccw);
        out[face_idx * 3 + 2] = Move::new(face, Turn::Double);
    }
    out
}

// Generator constants. Ported from the byte layout this crate uses (edge
// flip at bit 0x10, corner twist re-encoded from a 0x30/shift-4 source
// layout into this crate's 0x18/shift-3 layout) and cross-checked by the
// order-4 and inverse tests below.
const GEN_U: Cube = Cube::from_arrays(
    [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
    [3, 0, 1, 2, 4, 5, 6, 7],
);
const GEN_D: Cube = Cube::from_arrays(
    [0, 1, 2, 3, 4, 5, 6, 7, 9, 10, 11, 8],
    [0, 1, 2, 3, 5, 6, 7, 4],
);
const GEN_L: Cube = Cube::from_arrays(
    [4, 1, 2, 3, 8, 5, 6, 0, 7, 9, 10, 11],
    [12, 1, 2, 16, 23, 5, 6, 11],
);
const GEN_R: Cube = Cube::from_arrays(
    [0, 1, 22, 3, 4, 18, 26, 7, 8, 9, 21, 11],
    [0, 18, 14, 3, 4, 9, 21, 7],
);
const GEN_F: Cube = Cube::from_arrays(
    [0, 1, 2, 23, 4, 5, 3, 27, 8, 9, 10, 6],
    [0, 1, 19, 15, 4, 5, 10, 22],
);
const GEN_B: Cube = Cube::from_arrays(
    [0, 5, 2, 3, 17, 9, 6, 7, 8, 20, 10, 11],
    [17, 13, 2, 3, 8, 20, 6, 7],
);

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter_turns() -> Vec<Move> {
        let mut out = Vec::new();
        for face in enum_iterator::all::<Face>() {
            out.push(Move::new(face, Turn::Cw));
            out.push(Move::new(face, Turn::Ccw));
        }
        out
    }

    #[test]
    fn quarter_turn_is_order_four() {
        for m in quarter_turns() {
            let c = m.cube();
            let twice = c.compose(&c);
            let four = twice.compose(&twice);
            assert_eq!(four, Cube::SOLVED, "{m} to the 4th should be solved");
        }
    }

    #[test]
    fn quarter_turn_composes_with_inverse_to_solved() {
        for m in quarter_turns() {
            let c = m.cube();
            assert_eq!(c.compose(&c.invert()), Cube::SOLVED);
            assert_eq!(c.invert().compose(&c), Cube::SOLVED);
        }
    }

    #[test]
    fn double_equals_twice_applied() {
        for face in enum_iterator::all::<Face>() {
            let cw = Move::new(face, Turn::Cw).cube();
            let double = Move::new(face, Turn::Double).cube();
            assert_eq!(double, cw.compose(&cw));
        }
    }

    #[test]
    fn reverse_is_involutive_on_quarter_turns() {
        for m in quarter_turns() {
            assert_eq!(m.reverse().reverse(), m);
        }
    }

    #[test]
    fn solved_composes_identity_on_either_side() {
        for m in quarter_turns() {
            let c = m.cube();
            assert_eq!(Cube::SOLVED.compose(&c), c);
            assert_eq!(c.compose(&Cube::SOLVED), c);
        }
    }

    #[test]
    fn display_matches_algebra_notation() {
        assert_eq!(Move::new(Face::R, Turn::Cw).to_string(), "R");
        assert_eq!(Move::new(Face::R, Turn::Ccw).to_string(), "R'");
        assert_eq!(Move::new(Face::R, Turn::Double).to_string(), "R2");
    }

    #[test]
    fn quarter_moves_table_matches_all_moves_quarter_subset() {
        let from_all: Vec<Move> = all_moves().into_iter().filter(Move::is_quarter).collect();
        assert_eq!(from_all.len(), 12);
        for m in QUARTER_MOVES {
            assert!(from_all.contains(&m));
        }
    }
}
