//! Parse/format error taxonomy for the algorithm-string and facelet-string
//! collaborators (see `crate::algorithm`, `crate::facelets`).
//!
//! Search failure is not part of this taxonomy: "no solution within depth"
//! is an ordinary `bool` result, never an `Err`.

use derive_more::Display;

#[derive(Clone, Eq, PartialEq, Debug, Display)]
pub enum CubeError {
    #[display(fmt = "unknown move token: {_0:?}")]
    UnknownToken(String),

    #[display(fmt = "facelet string must be 54 characters, got {_0}")]
    WrongFaceletLength(usize),

    #[display(fmt = "unknown facelet color: {_0:?}")]
    UnknownColor(char),

    #[display(fmt = "facelet {_0} should be center color {_1:?}, got {_2:?}")]
    MismatchedCenter(usize, char, char),

    #[display(fmt = "unrecognized edge color pair: {_0:?}/{_1:?}")]
    UnknownEdge(char, char),

    #[display(fmt = "unrecognized corner color triple: {_0:?}/{_1:?}/{_2:?}")]
    UnknownCorner(char, char, char),

    #[display(fmt = "not one of the 18 named moves")]
    NotANamedMove,
}

impl std::error::Error for CubeError {}
