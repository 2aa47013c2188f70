//! The direct-path move set.
//!
//! Between a start and a target structure, the only legal moves are the
//! pairs in the symmetric difference of their pair sets: pairs only in
//! the start must be removed, pairs only in the target must be inserted.
//! Whether a move is legal *right now* depends on the current structure:
//! an insertion is blocked while one of its ends is still paired or while
//! it would cross an existing pair.

use std::fmt;

use sf_structure::P1KEY;
use sf_structure::Pair;
use sf_structure::PairSet;
use sf_structure::PairTable;
use sf_structure::StructureError;

/// A single base-pair move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Insert(Pair),
    Remove(Pair),
}

impl Move {
    /// The base pair this move touches.
    pub fn pair(&self) -> Pair {
        match self {
            Move::Insert(p) | Move::Remove(p) => *p,
        }
    }

    /// Deterministic ordering key: the packed (i, j) of the pair.
    pub fn key(&self) -> P1KEY {
        self.pair().key()
    }

    /// Apply the move to a table, producing a new table.
    pub fn apply(&self, table: &PairTable) -> Result<PairTable, StructureError> {
        match self {
            Move::Insert(p) => table.with_insert(*p),
            Move::Remove(p) => table.with_remove(*p),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Insert(p) => write!(f, "+{}", p),
            Move::Remove(p) => write!(f, "-{}", p),
        }
    }
}

/// The fixed move set of a direct path from `start` to `target`, in
/// ascending (i, j) order. Its length is the path distance d.
pub fn direct_move_set(start: &PairSet, target: &PairSet) -> Vec<Move> {
    let mut moves: Vec<Move> = start
        .difference(target)
        .into_iter()
        .map(Move::Remove)
        .chain(target.difference(start).into_iter().map(Move::Insert))
        .collect();
    moves.sort_unstable_by_key(|m| m.key());
    moves
}

/// Moves from the fixed set that are legal on `current`, each with its
/// resulting child table. Removals of still-present pairs are always
/// legal; insertions additionally require both ends free and no crossing.
///
/// The result is empty exactly when `current` already equals the target,
/// and every returned move brings the structure one move closer to it.
pub fn legal_moves(
    moves: &[Move],
    current: &PairTable,
) -> Result<Vec<(Move, PairTable)>, StructureError> {
    let mut out = Vec::new();
    for &mv in moves {
        let legal = match mv {
            Move::Remove(p) => current.contains(p),
            Move::Insert(p) => !current.contains(p) && current.can_insert(p),
        };
        if legal {
            out.push((mv, mv.apply(current)?));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(s: &str) -> PairTable {
        PairTable::try_from(s).unwrap()
    }

    #[test]
    fn test_direct_move_set() {
        let s1 = PairSet::from(&pt("((....))"));
        let s2 = PairSet::from(&pt(".((..))."));
        let moves = direct_move_set(&s1, &s2);
        assert_eq!(
            moves,
            vec![
                Move::Remove(Pair::new(0, 7)),
                Move::Insert(Pair::new(2, 5)),
            ]
        );
    }

    #[test]
    fn test_direct_move_set_empty_when_equal() {
        let s = PairSet::from(&pt("(.().)"));
        assert!(direct_move_set(&s, &s).is_empty());
    }

    #[test]
    fn test_legal_moves_ordering_dependency() {
        // (0,4) must go before (0,3) can form.
        let start = pt("(...)");
        let target = pt("(..).");
        let moves = direct_move_set(&PairSet::from(&start), &PairSet::from(&target));
        assert_eq!(moves.len(), 2);

        let legal = legal_moves(&moves, &start).unwrap();
        assert_eq!(legal.len(), 1);
        assert_eq!(legal[0].0, Move::Remove(Pair::new(0, 4)));
        assert_eq!(format!("{}", legal[0].1), ".....");

        let legal = legal_moves(&moves, &legal[0].1).unwrap();
        assert_eq!(legal.len(), 1);
        assert_eq!(legal[0].0, Move::Insert(Pair::new(0, 3)));
        assert_eq!(legal[0].1, target);

        assert!(legal_moves(&moves, &target).unwrap().is_empty());
    }

    #[test]
    fn test_legal_moves_blocks_crossing_insert() {
        // Inserting (2,5) would cross (1,3); removing (1,3) first unblocks it.
        let start = pt(".(.)..");
        let target = pt("..(..)");
        let moves = direct_move_set(&PairSet::from(&start), &PairSet::from(&target));

        let legal = legal_moves(&moves, &start).unwrap();
        assert_eq!(legal.len(), 1);
        assert_eq!(legal[0].0, Move::Remove(Pair::new(1, 3)));
    }

    #[test]
    fn test_removals_always_legal() {
        let start = pt("((()))");
        let target = pt("......");
        let moves = direct_move_set(&PairSet::from(&start), &PairSet::from(&target));
        let legal = legal_moves(&moves, &start).unwrap();
        assert_eq!(legal.len(), 3);
    }
}
