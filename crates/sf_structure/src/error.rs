use thiserror::Error;

use crate::Pair;

/// Errors from parsing dot-bracket strings or applying base-pair moves.
///
/// The two `Illegal*` variants indicate a contract violation between a move
/// enumerator and the structure it enumerated on; they are not expected to
/// surface through a correct caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("unexpected ')' at position {0}")]
    UnexpectedClose(usize),

    #[error("unmatched '(' at position {0}")]
    UnclosedOpen(usize),

    #[error("invalid structure character '{0}'")]
    InvalidCharacter(char),

    #[error("structure length {0} exceeds the supported maximum")]
    TooLong(usize),

    #[error("cannot insert pair {0}: an end is paired or the pair would cross")]
    IllegalInsert(Pair),

    #[error("cannot remove pair {0}: pair is not present")]
    IllegalRemove(Pair),
}
