//! The sf_energy crate.
//!
//! Defines the energy-model interface the path search scores structures
//! with, plus a minimal concrete model for sequence-based calls.
//!
//! All energies are integers in units of 10 cal/mol (hundredths of
//! kcal/mol), following the usual convention of thermodynamic parameter
//! tables for nucleic acids.

mod sequence;
mod model;

pub use sequence::*;
pub use model::*;

use thiserror::Error;

use sf_structure::PairTable;

/// Errors from sequence validation or structure scoring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnergyError {
    #[error("invalid nucleotide '{chr}' at position {pos}")]
    InvalidBase { chr: char, pos: usize },

    #[error("cannot score pair ({i},{j}): {bi}-{bj} is not complementary")]
    Unscorable { i: usize, j: usize, bi: Base, bj: Base },

    #[error("structure length {structure} does not match model length {model}")]
    LengthMismatch { structure: usize, model: usize },
}

/// A free-energy model for secondary structures of one fixed sequence.
///
/// Implementations must be deterministic and side-effect free: the path
/// search relies on identical inputs producing identical energies. A
/// structure the model cannot score is reported as an `Err`; the search
/// drops that branch rather than retrying it.
pub trait EnergyModel {
    /// Length of the underlying sequence.
    fn len(&self) -> usize;

    /// Free energy of `table` in 10 cal/mol units.
    fn energy(&self, table: &PairTable) -> Result<i32, EnergyError>;
}
