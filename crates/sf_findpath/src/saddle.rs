//! Public entry points and the bidirectional orchestrator.
//!
//! The beam prunes differently depending on which end it starts from, so
//! the search runs once in each direction over the same move set and the
//! lower of the two barriers wins. Ties go to the forward direction, so
//! results are reproducible.

use std::rc::Rc;

use log::debug;

use sf_energy::BasePairModel;
use sf_energy::EnergyModel;
use sf_structure::PairTable;

use crate::FindpathError;
use crate::Path;
use crate::search::SearchNode;
use crate::search::beam_search;

/// Saddle energy (10 cal/mol) of the best direct path found between two
/// structures of `sequence`, keeping `maxkeep` candidates per depth.
pub fn find_saddle(
    sequence: &str,
    s1: &str,
    s2: &str,
    maxkeep: usize,
) -> Result<i32, FindpathError> {
    let model = BasePairModel::try_from(sequence)?;
    find_saddle_with_model(&model, s1, s2, maxkeep)
}

/// The best direct refolding path between two structures of `sequence`,
/// read start to end.
pub fn find_path(
    sequence: &str,
    s1: &str,
    s2: &str,
    maxkeep: usize,
) -> Result<Path, FindpathError> {
    let model = BasePairModel::try_from(sequence)?;
    find_path_with_model(&model, s1, s2, maxkeep)
}

/// `find_saddle` against a caller-provided energy model.
pub fn find_saddle_with_model<M: EnergyModel>(
    model: &M,
    s1: &str,
    s2: &str,
    maxkeep: usize,
) -> Result<i32, FindpathError> {
    let (t1, t2) = parse_and_validate(model.len(), s1, s2, maxkeep)?;
    let (forward, backward) = bidirectional(model, &t1, &t2, maxkeep)?;
    Ok(forward.barrier.min(backward.barrier))
}

/// `find_path` against a caller-provided energy model.
pub fn find_path_with_model<M: EnergyModel>(
    model: &M,
    s1: &str,
    s2: &str,
    maxkeep: usize,
) -> Result<Path, FindpathError> {
    let (t1, t2) = parse_and_validate(model.len(), s1, s2, maxkeep)?;
    let (forward, backward) = bidirectional(model, &t1, &t2, maxkeep)?;
    if forward.barrier <= backward.barrier {
        Ok(Path::reconstruct(&forward))
    } else {
        Ok(Path::reconstruct(&backward).reversed())
    }
}

fn parse_and_validate(
    n: usize,
    s1: &str,
    s2: &str,
    maxkeep: usize,
) -> Result<(PairTable, PairTable), FindpathError> {
    if maxkeep == 0 {
        return Err(FindpathError::InvalidBeamWidth);
    }
    let t1 = PairTable::try_from(s1)?;
    let t2 = PairTable::try_from(s2)?;
    for t in [&t1, &t2] {
        if t.len() != n {
            return Err(FindpathError::LengthMismatch {
                expected: n,
                found: t.len(),
            });
        }
    }
    Ok((t1, t2))
}

fn bidirectional<M: EnergyModel>(
    model: &M,
    t1: &PairTable,
    t2: &PairTable,
    maxkeep: usize,
) -> Result<(Rc<SearchNode>, Rc<SearchNode>), FindpathError> {
    let forward = beam_search(model, t1, t2, maxkeep)?;
    let backward = beam_search(model, t2, t1, maxkeep)?;
    debug!(
        "barriers: forward {}, backward {}",
        forward.barrier, backward.barrier
    );
    Ok((forward, backward))
}
