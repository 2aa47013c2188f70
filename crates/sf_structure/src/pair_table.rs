//! The PairTable representation of a secondary structure.
//!
//! A 0-based table where entry i holds the partner of position i, or None
//! if i is unpaired. Tables are value objects: the move helpers
//! `with_insert` and `with_remove` return a new table and leave the
//! receiver untouched, so tables can be shared between search nodes.

use std::fmt;
use std::ops::Index;

use crate::DotBracket;
use crate::DotBracketVec;
use crate::NAIDX;
use crate::Pair;
use crate::StructureError;

/// A well-nested pairing assignment over positions 0..n.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairTable(Vec<Option<NAIDX>>);

impl PairTable {
    /// Create an open-chain table (all positions unpaired).
    pub fn new(length: usize) -> Self {
        PairTable(vec![None; length])
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the zero-length table.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterator over the partner entries in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, Option<NAIDX>> {
        self.0.iter()
    }

    /// Returns true if position i is paired.
    pub fn is_paired(&self, i: usize) -> bool {
        self.0[i].is_some()
    }

    /// Returns true if the pair (i, j) is present.
    pub fn contains(&self, pair: Pair) -> bool {
        (pair.j() as usize) < self.len() && self[pair.i() as usize] == Some(pair.j())
    }

    /// Check whether inserting (i, j) keeps the table well-nested:
    /// both ends must be unpaired, and every pair with one end strictly
    /// inside (i, j) must have both ends inside.
    pub fn can_insert(&self, pair: Pair) -> bool {
        let (i, j) = (pair.i() as usize, pair.j() as usize);
        if j >= self.len() || self.0[i].is_some() || self.0[j].is_some() {
            return false;
        }
        self.0[i + 1..j]
            .iter()
            .flatten()
            .all(|&k| i < k as usize && (k as usize) < j)
    }

    /// Return a new table with the pair inserted.
    pub fn with_insert(&self, pair: Pair) -> Result<PairTable, StructureError> {
        if !self.can_insert(pair) {
            return Err(StructureError::IllegalInsert(pair));
        }
        let mut next = self.clone();
        next.0[pair.i() as usize] = Some(pair.j());
        next.0[pair.j() as usize] = Some(pair.i());
        Ok(next)
    }

    /// Return a new table with the pair removed.
    pub fn with_remove(&self, pair: Pair) -> Result<PairTable, StructureError> {
        if !self.contains(pair) {
            return Err(StructureError::IllegalRemove(pair));
        }
        let mut next = self.clone();
        next.0[pair.i() as usize] = None;
        next.0[pair.j() as usize] = None;
        Ok(next)
    }
}

impl Index<usize> for PairTable {
    type Output = Option<NAIDX>;

    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl TryFrom<&DotBracketVec> for PairTable {
    type Error = StructureError;

    fn try_from(dbv: &DotBracketVec) -> Result<Self, Self::Error> {
        if dbv.len() > NAIDX::MAX as usize {
            return Err(StructureError::TooLong(dbv.len()));
        }
        let mut table = vec![None; dbv.len()];
        let mut stack: Vec<usize> = Vec::new();
        for (pos, &db) in dbv.iter().enumerate() {
            match db {
                DotBracket::Unpaired => {}
                DotBracket::Open => stack.push(pos),
                DotBracket::Close => {
                    let open = stack
                        .pop()
                        .ok_or(StructureError::UnexpectedClose(pos))?;
                    table[open] = Some(pos as NAIDX);
                    table[pos] = Some(open as NAIDX);
                }
            }
        }
        if let Some(open) = stack.pop() {
            return Err(StructureError::UnclosedOpen(open));
        }
        Ok(PairTable(table))
    }
}

impl TryFrom<&str> for PairTable {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        PairTable::try_from(&DotBracketVec::try_from(s)?)
    }
}

impl fmt::Display for PairTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DotBracketVec::from(self).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_roundtrip() {
        for s in ["......", "((..))", "(.().)", "()()", "", "(((...)))"] {
            let pt = PairTable::try_from(s).unwrap();
            assert_eq!(format!("{}", pt), s);
        }
    }

    #[test]
    fn test_parse_pairing() {
        let pt = PairTable::try_from("((..))").unwrap();
        assert_eq!(pt[0], Some(5));
        assert_eq!(pt[1], Some(4));
        assert_eq!(pt[2], None);
        assert!(pt.is_paired(0));
        assert!(!pt.is_paired(3));
        assert!(pt.contains(Pair::new(0, 5)));
        assert!(!pt.contains(Pair::new(0, 4)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            PairTable::try_from("(.))"),
            Err(StructureError::UnexpectedClose(3))
        );
        assert_eq!(
            PairTable::try_from("((.)"),
            Err(StructureError::UnclosedOpen(0))
        );
        assert_eq!(
            PairTable::try_from("(.x)"),
            Err(StructureError::InvalidCharacter('x'))
        );
    }

    #[test]
    fn test_can_insert_nesting() {
        let pt = PairTable::try_from(".(.).").unwrap();
        // would cross the (1,3) pair
        assert!(!pt.can_insert(Pair::new(0, 2)));
        // encloses (1,3) completely
        assert!(pt.can_insert(Pair::new(0, 4)));
        // an end is paired
        assert!(!pt.can_insert(Pair::new(0, 1)));
        // out of range
        assert!(!pt.can_insert(Pair::new(0, 5)));
    }

    #[test]
    fn test_with_insert_and_remove() {
        let pt = PairTable::try_from("..()..").unwrap();
        let next = pt.with_insert(Pair::new(1, 4)).unwrap();
        assert_eq!(format!("{}", next), ".(())." );
        // the receiver is untouched
        assert_eq!(format!("{}", pt), "..()..");

        let back = next.with_remove(Pair::new(1, 4)).unwrap();
        assert_eq!(back, pt);

        assert_eq!(
            pt.with_insert(Pair::new(2, 5)),
            Err(StructureError::IllegalInsert(Pair::new(2, 5)))
        );
        assert_eq!(
            pt.with_remove(Pair::new(1, 4)),
            Err(StructureError::IllegalRemove(Pair::new(1, 4)))
        );
    }
}
