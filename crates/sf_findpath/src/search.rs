//! The width-bounded beam search over direct-path move orderings.
//!
//! Trying all d! orderings of the d moves is infeasible; instead the
//! search keeps, per depth, at most `maxkeep` partial paths with the
//! lowest barriers. Expansion is level by level with an explicit
//! worklist, so long paths never recurse.

use std::rc::Rc;

use ahash::AHashMap;
use log::debug;
use log::trace;

use sf_energy::EnergyError;
use sf_energy::EnergyModel;
use sf_structure::P1KEY;
use sf_structure::PairSet;
use sf_structure::PairTable;

use crate::FindpathError;
use crate::Move;
use crate::direct_move_set;
use crate::legal_moves;

/// One partial direct path. Parent links are shared and immutable; a
/// pruned node drops its whole unshared ancestry with it.
#[derive(Debug)]
pub(crate) struct SearchNode {
    pub table: PairTable,
    pub energy: i32,
    /// Highest energy seen on the path from the root to this node.
    pub barrier: i32,
    /// Number of moves applied so far (root = 0).
    pub depth: usize,
    pub applied: Option<Move>,
    pub parent: Option<Rc<SearchNode>>,
}

impl SearchNode {
    /// Beam ordering key: lowest barrier first, ties broken by lower
    /// immediate energy, then by the smallest applied (i, j). The fixed
    /// tie-break makes pruning, and with it the whole search, reproducible.
    fn rank(&self) -> (i32, i32, P1KEY) {
        (
            self.barrier,
            self.energy,
            self.applied.map_or(0, |m| m.key()),
        )
    }
}

/// Run one direction of the direct-path search and return the terminal
/// node with the lowest barrier.
pub(crate) fn beam_search<M: EnergyModel + ?Sized>(
    model: &M,
    start: &PairTable,
    target: &PairTable,
    maxkeep: usize,
) -> Result<Rc<SearchNode>, FindpathError> {
    let moves = direct_move_set(&PairSet::from(start), &PairSet::from(target));
    let e0 = model.energy(start)?;
    let root = Rc::new(SearchNode {
        table: start.clone(),
        energy: e0,
        barrier: e0,
        depth: 0,
        applied: None,
        parent: None,
    });
    debug!(
        "direct path search: {} moves, beam width {}",
        moves.len(),
        maxkeep
    );

    let mut beam = vec![root];
    for depth in 1..=moves.len() {
        let mut pool: Vec<Rc<SearchNode>> = Vec::new();
        let mut seen: AHashMap<PairTable, usize> = AHashMap::new();
        let mut last_failure: Option<EnergyError> = None;

        for node in &beam {
            for (mv, child) in legal_moves(&moves, &node.table)? {
                let energy = match model.energy(&child) {
                    Ok(e) => e,
                    Err(err) => {
                        trace!("discarding branch {mv}: {err}");
                        last_failure = Some(err);
                        continue;
                    }
                };
                let cand = Rc::new(SearchNode {
                    table: child,
                    energy,
                    barrier: node.barrier.max(energy),
                    depth,
                    applied: Some(mv),
                    parent: Some(Rc::clone(node)),
                });
                // Same structure at the same depth: keep the better path.
                match seen.get(&cand.table) {
                    Some(&idx) => {
                        if cand.rank() < pool[idx].rank() {
                            pool[idx] = cand;
                        }
                    }
                    None => {
                        seen.insert(cand.table.clone(), pool.len());
                        pool.push(cand);
                    }
                }
            }
        }

        if pool.is_empty() {
            // Legal moves exist until the target is reached, so an empty
            // pool means every branch failed to score.
            return Err(match last_failure {
                Some(err) => err.into(),
                None => FindpathError::EmptyBeam(depth),
            });
        }
        pool.sort_unstable_by_key(|n| n.rank());
        pool.truncate(maxkeep);
        trace!(
            "depth {depth}: beam {} wide, best barrier {}",
            pool.len(),
            pool[0].barrier
        );
        beam = pool;
    }

    debug_assert!(beam.iter().all(|n| n.table == *target));
    Ok(beam.swap_remove(0))
}
