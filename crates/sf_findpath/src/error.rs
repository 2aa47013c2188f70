use thiserror::Error;

use sf_energy::EnergyError;
use sf_structure::StructureError;

/// Errors surfaced by the public path-search entry points.
///
/// A call either returns a complete path/energy or one of these; there
/// are no partial results. `EmptyBeam` is defensive: with a correct move
/// enumerator the beam can only empty through scoring failures, which
/// surface as `Energy` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FindpathError {
    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error(transparent)]
    Energy(#[from] EnergyError),

    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("beam width must be at least 1")]
    InvalidBeamWidth,

    #[error("search beam emptied at depth {0}")]
    EmptyBeam(usize),
}
