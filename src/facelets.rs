//! Facelet-string notation: a 54-character reading of every sticker, laid
//! out as a cross net — U's 3x3 grid (0..9), then three rows of the F, R,
//! B, L band read left to right (9..45), then D's 3x3 grid (45..54).
//!
//! ```text
//!       0  1  2
//!       3  4  5
//!       6  7  8
//!  9 10 11 12 13 14 15 16 17
//! 18 19 20 21 22 23 24 25 26
//! 27 28 29 30 31 32 33 34 35
//!      36 37 38
//!      39 40 41
//!      42 43 44
//! ```
//!
//! (the band row above is drawn in one line per row of 12; see the index
//! tables below for which quarter of each row belongs to which face.)
//!
//! The other boundary collaborator, alongside `crate::algorithm`.

use crate::errors::CubeError;
use crate::moves::Face;
use crate::state::{Cube, CORNER_PERM_MASK, EDGE_PERM_MASK};

fn face_color(face: Face) -> char {
    match face {
        Face::U => 'W',
        Face::D => 'Y',
        Face::F => 'G',
        Face::B => 'B',
        Face::R => 'R',
        Face::L => 'O',
    }
}

fn color_face(c: char) -> Option<Face> {
    match c {
        'W' => Some(Face::U),
        'Y' => Some(Face::D),
        'G' => Some(Face::F),
        'B' => Some(Face::B),
        'R' => Some(Face::R),
        'O' => Some(Face::L),
        _ => None,
    }
}

const CENTERS: [(usize, Face); 6] = [
    (4, Face::U),
    (22, Face::F),
    (25, Face::R),
    (28, Face::B),
    (31, Face::L),
    (49, Face::D),
];

/// `(identity, pos0, pos1, face0, face1)`: the two facelet positions of
/// each edge cubie and which face each belongs to when solved. Derived by
/// unfolding the net above and tracing every edge and corner to a unique
/// pair (or triple) of positions; see `DESIGN.md`.
const EDGE_TABLE: [(u8, usize, usize, Face, Face); 12] = [
    (0, 3, 19, Face::U, Face::L),
    (1, 1, 16, Face::U, Face::B),
    (2, 5, 13, Face::U, Face::R),
    (3, 7, 10, Face::U, Face::F),
    (4, 29, 30, Face::B, Face::L),
    (5, 27, 26, Face::B, Face::R),
    (6, 23, 24, Face::F, Face::R),
    (7, 21, 32, Face::F, Face::L),
    (8, 48, 43, Face::D, Face::L),
    (9, 46, 40, Face::D, Face::B),
    (10, 50, 37, Face::D, Face::R),
    (11, 52, 34, Face::D, Face::F),
];

/// `(identity, pos0, pos1, pos2, face0, face1, face2)`: the three facelet
/// positions of each corner cubie, in a fixed cyclic order.
const CORNER_TABLE: [(u8, usize, usize, usize, Face, Face, Face); 8] = [
    (0, 0, 18, 17, Face::U, Face::L, Face::B),
    (1, 2, 15, 14, Face::U, Face::B, Face::R),
    (2, 8, 12, 11, Face::U, Face::R, Face::F),
    (3, 6, 9, 20, Face::U, Face::F, Face::L),
    (4, 45, 42, 41, Face::D, Face::L, Face::B),
    (5, 47, 39, 38, Face::D, Face::B, Face::R),
    (6, 53, 36, 35, Face::D, Face::R, Face::F),
    (7, 51, 33, 44, Face::D, Face::F, Face::L),
];

/// Parses a 54-character facelet string into the state it represents.
pub fn parse_facelets(s: &str) -> Result<Cube, CubeError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != 54 {
        return Err(CubeError::WrongFaceletLength(chars.len()));
    }
    for &c in &chars {
        if color_face(c).is_none() {
            return Err(CubeError::UnknownColor(c));
        }
    }
    for &(pos, face) in &CENTERS {
        let expected = face_color(face);
        if chars[pos] != expected {
            return Err(CubeError::MismatchedCenter(pos, expected, chars[pos]));
        }
    }

    // Each slot's two (or three) facelet positions tell us the colors of
    // whatever cubie is *currently* sitting there, which may not be that
    // slot's own home cubie — so the identity has to be recovered by
    // matching those colors against every cubie's home colors, not just
    // the slot's own.
    let mut edges = [0u8; 12];
    for &(slot, pos0, pos1, _, _) in &EDGE_TABLE {
        let c0 = chars[pos0];
        let c1 = chars[pos1];
        let (occupant, flipped) = find_edge(c0, c1).ok_or(CubeError::UnknownEdge(c0, c1))?;
        edges[slot as usize] = occupant | if flipped { 0x10 } else { 0 };
    }

    let mut corners = [0u8; 8];
    for &(slot, pos0, pos1, pos2, _, _, _) in &CORNER_TABLE {
        let (c0, c1, c2) = (chars[pos0], chars[pos1], chars[pos2]);
        let (occupant, orient) =
            find_corner(c0, c1, c2).ok_or(CubeError::UnknownCorner(c0, c1, c2))?;
        corners[slot as usize] = (orient << 3) | occupant;
    }

    Ok(Cube::from_arrays(edges, corners))
}

/// Identifies which edge cubie shows colors `(c0, c1)` (in the reading
/// order of some slot's two facelet positions) and whether that's its
/// flipped orientation, by checking every cubie's home colors in turn.
fn find_edge(c0: char, c1: char) -> Option<(u8, bool)> {
    EDGE_TABLE.iter().find_map(|&(id, _, _, face0, face1)| {
        let (a, b) = (face_color(face0), face_color(face1));
        if c0 == a && c1 == b {
            Some((id, false))
        } else if c0 == b && c1 == a {
            Some((id, true))
        } else {
            None
        }
    })
}

/// Identifies which corner cubie shows colors `(c0, c1, c2)` (in the
/// reading order of some slot's three facelet positions) and its twist
/// class relative to that cubie's own home orientation.
fn find_corner(c0: char, c1: char, c2: char) -> Option<(u8, u8)> {
    CORNER_TABLE
        .iter()
        .find_map(|&(id, _, _, _, face0, face1, face2)| {
            let (a, b, c) = (face_color(face0), face_color(face1), face_color(face2));
            if (c0, c1, c2) == (a, b, c) {
                Some((id, 0u8))
            } else if (c0, c1, c2) == (c, a, b) {
                Some((id, 1u8))
            } else if (c0, c1, c2) == (b, c, a) {
                Some((id, 2u8))
            } else {
                None
            }
        })
}

/// Formats a cube state as a 54-character facelet string.
pub fn format_facelets(cube: &Cube) -> String {
    let mut chars = ['?'; 54];
    for &(pos, face) in &CENTERS {
        chars[pos] = face_color(face);
    }
    for &(slot, pos0, pos1, _, _) in &EDGE_TABLE {
        let byte = cube.edge(slot as usize);
        let occupant = (byte & EDGE_PERM_MASK) as usize;
        let flipped = byte & 0x10 != 0;
        // The colors at this slot belong to whichever cubie occupies it,
        // read off that cubie's own home-face pair, not this slot's.
        let (_, _, _, occ_face0, occ_face1) = EDGE_TABLE[occupant];
        let (a, b) = (face_color(occ_face0), face_color(occ_face1));
        let (c0, c1) = if flipped { (b, a) } else { (a, b) };
        chars[pos0] = c0;
        chars[pos1] = c1;
    }
    for &(slot, pos0, pos1, pos2, _, _, _) in &CORNER_TABLE {
        let byte = cube.corner(slot as usize);
        let occupant = (byte & CORNER_PERM_MASK) as usize;
        let orient = byte >> 3;
        let (_, _, _, _, occ_face0, occ_face1, occ_face2) = CORNER_TABLE[occupant];
        let (a, b, c) = (face_color(occ_face0), face_color(occ_face1), face_color(occ_face2));
        let (c0, c1, c2) = match orient {
            0 => (a, b, c),
            1 => (c, a, b),
            _ => (b, c, a),
        };
        chars[pos0] = c0;
        chars[pos1] = c1;
        chars[pos2] = c2;
    }
    chars.iter().collect()
}
