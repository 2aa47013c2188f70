//! Dot-bracket symbols and symbol vectors.
//!
//! The textual exchange format: '(' and ')' denote the two ends of a base
//! pair, '.' denotes an unpaired position. `DotBracketVec` is the validated
//! symbol sequence; the pairing itself lives in `PairTable`.

use std::fmt;

use crate::PairTable;
use crate::StructureError;

/// One position in dot-bracket notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotBracket {
    Unpaired,
    Open,
    Close,
}

impl TryFrom<char> for DotBracket {
    type Error = StructureError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(DotBracket::Unpaired),
            '(' => Ok(DotBracket::Open),
            ')' => Ok(DotBracket::Close),
            _ => Err(StructureError::InvalidCharacter(c)),
        }
    }
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> Self {
        match db {
            DotBracket::Unpaired => '.',
            DotBracket::Open => '(',
            DotBracket::Close => ')',
        }
    }
}

/// A validated vector of dot-bracket symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotBracketVec(pub Vec<DotBracket>);

impl DotBracketVec {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DotBracket> {
        self.0.iter()
    }
}

impl TryFrom<&str> for DotBracketVec {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let symbols: Result<Vec<DotBracket>, _> =
            s.chars().map(DotBracket::try_from).collect();
        Ok(DotBracketVec(symbols?))
    }
}

impl From<&PairTable> for DotBracketVec {
    fn from(pt: &PairTable) -> Self {
        let mut symbols = vec![DotBracket::Unpaired; pt.len()];
        for (i, &j_opt) in pt.iter().enumerate() {
            if let Some(j) = j_opt {
                if i < j as usize {
                    symbols[i] = DotBracket::Open;
                    symbols[j as usize] = DotBracket::Close;
                }
            }
        }
        DotBracketVec(symbols)
    }
}

impl fmt::Display for DotBracketVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &db in self.iter() {
            write!(f, "{}", char::from(db))?;
        }
        Ok(())
    }
}
