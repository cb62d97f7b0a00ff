//! Algorithm-string notation: `R U R' F2 ...`. One of the two boundary
//! collaborators (alongside `crate::facelets`) that turn a `Cube` into
//! something a person can type or read.

use std::fmt::Write as _;

use crate::errors::CubeError;
use crate::moves::{all_moves, Move};
use crate::state::Cube;

/// Parses a whitespace-separated algorithm string and returns the state
/// reached by applying it to the solved cube.
pub fn parse_algorithm(s: &str) -> Result<Cube, CubeError> {
    let mut cube = Cube::SOLVED;
    for token in s.split_whitespace() {
        let mv = parse_move(token)?;
        cube = cube.compose(&mv.cube());
    }
    Ok(cube)
}

/// Parses a single move token (`R`, `R'`, `R2`, ...).
pub fn parse_move(token: &str) -> Result<Move, CubeError> {
    all_moves()
        .into_iter()
        .find(|mv| mv.to_string() == token)
        .ok_or_else(|| CubeError::UnknownToken(token.to_string()))
}

/// Formats a path of moves back into algorithm notation. Every `Move` value
/// is necessarily one of the 18 named moves, so this never actually fails;
/// it still returns a `Result` to match the format-error taxonomy (§7) a
/// caller building `path` from some other representation might need.
pub fn format_algorithm(path: &[Move]) -> Result<String, CubeError> {
    let mut out = String::new();
    for (i, mv) in path.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{mv}");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{Face, Turn};

    #[test]
    fn parses_empty_string_as_solved() {
        assert_eq!(parse_algorithm("").unwrap(), Cube::SOLVED);
        assert_eq!(parse_algorithm("   ").unwrap(), Cube::SOLVED);
    }

    #[test]
    fn parses_single_move() {
        let r = Move::new(Face::R, Turn::Cw).cube();
        assert_eq!(parse_algorithm("R").unwrap(), r);
    }

    #[test]
    fn parses_prime_and_double() {
        let r_inv = Move::new(Face::R, Turn::Ccw).cube();
        assert_eq!(parse_algorithm("R'").unwrap(), r_inv);
        let u2 = Move::new(Face::U, Turn::Double).cube();
        assert_eq!(parse_algorithm("U2").unwrap(), u2);
    }

    #[test]
    fn parses_sequence_in_order() {
        let expected = Move::new(Face::R, Turn::Cw)
            .cube()
            .compose(&Move::new(Face::U, Turn::Cw).cube())
            .compose(&Move::new(Face::R, Turn::Ccw).cube());
        assert_eq!(parse_algorithm("R U R'").unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_token() {
        let err = parse_algorithm("R X").unwrap_err();
        assert_eq!(err, CubeError::UnknownToken("X".to_string()));
    }

    #[test]
    fn round_trip_through_format_and_parse() {
        let path = vec![
            Move::new(Face::R, Turn::Cw),
            Move::new(Face::U, Turn::Ccw),
            Move::new(Face::F, Turn::Double),
        ];
        let text = format_algorithm(&path).unwrap();
        assert_eq!(text, "R U' F2");
        let parsed: Vec<Move> = text
            .split_whitespace()
            .map(|t| parse_move(t).unwrap())
            .collect();
        assert_eq!(parsed, path);
    }
}
