//! Validated nucleotide sequences.

use std::fmt;
use std::ops::Index;

use crate::EnergyError;

/// A single nucleotide. 'T' is read as U so DNA input folds like RNA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    C,
    G,
    U,
}

impl Base {
    /// Parse one (case-insensitive) nucleotide character.
    pub fn from_char(c: char) -> Option<Base> {
        match c {
            'A' | 'a' => Some(Base::A),
            'C' | 'c' => Some(Base::C),
            'G' | 'g' => Some(Base::G),
            'U' | 'u' | 'T' | 't' => Some(Base::U),
            _ => None,
        }
    }
}

impl From<Base> for char {
    fn from(b: Base) -> Self {
        match b {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// An immutable nucleotide sequence, shared read-only by all components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(Vec<Base>);

impl Sequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Base> {
        self.0.iter()
    }
}

impl TryFrom<&str> for Sequence {
    type Error = EnergyError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let bases: Result<Vec<Base>, _> = s
            .chars()
            .enumerate()
            .map(|(pos, chr)| {
                Base::from_char(chr).ok_or(EnergyError::InvalidBase { chr, pos })
            })
            .collect();
        Ok(Sequence(bases?))
    }
}

impl Index<usize> for Sequence {
    type Output = Base;

    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.iter() {
            write!(f, "{}", b)?;
        }
        Ok(())
    }
}
