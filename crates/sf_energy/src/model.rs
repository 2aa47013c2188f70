//! A minimal base-pair energy model.
//!
//! Scores a structure as the sum of per-pair-type energies. This is a
//! stand-in for a full nearest-neighbor model: it is enough to drive the
//! path search from a bare sequence, and it exercises the unscorable-pair
//! branch (non-complementary bases cannot be scored).

use ahash::AHashMap;
use once_cell::sync::Lazy;

use sf_structure::PairTable;

use crate::Base;
use crate::EnergyError;
use crate::EnergyModel;
use crate::Sequence;

/// Per-pair-type energies in 10 cal/mol units.
static PAIR_ENERGY: Lazy<AHashMap<(Base, Base), i32>> = Lazy::new(|| {
    AHashMap::from_iter([
        ((Base::G, Base::C), -300),
        ((Base::C, Base::G), -300),
        ((Base::A, Base::U), -200),
        ((Base::U, Base::A), -200),
        ((Base::G, Base::U), -150),
        ((Base::U, Base::G), -150),
    ])
});

/// An energy model built from a bare sequence.
#[derive(Debug, Clone)]
pub struct BasePairModel {
    sequence: Sequence,
}

impl BasePairModel {
    pub fn new(sequence: Sequence) -> Self {
        Self { sequence }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }
}

impl TryFrom<&str> for BasePairModel {
    type Error = EnergyError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Ok(Self::new(Sequence::try_from(s)?))
    }
}

impl EnergyModel for BasePairModel {
    fn len(&self) -> usize {
        self.sequence.len()
    }

    fn energy(&self, table: &PairTable) -> Result<i32, EnergyError> {
        if table.len() != self.sequence.len() {
            return Err(EnergyError::LengthMismatch {
                structure: table.len(),
                model: self.sequence.len(),
            });
        }
        let mut total = 0;
        for (i, &j_opt) in table.iter().enumerate() {
            let Some(j) = j_opt else { continue };
            let j = j as usize;
            if j < i {
                continue; // count each pair once
            }
            let (bi, bj) = (self.sequence[i], self.sequence[j]);
            match PAIR_ENERGY.get(&(bi, bj)) {
                Some(&de) => total += de,
                None => return Err(EnergyError::Unscorable { i, j, bi, bj }),
            }
        }
        Ok(total)
    }
}
