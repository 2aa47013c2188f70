//! Refolding paths: the (structure, energy) steps from start to end.

use std::fmt;
use std::rc::Rc;

use itertools::Itertools;

use sf_structure::PairTable;

use crate::search::SearchNode;

/// One structure on a refolding path, with its energy in 10 cal/mol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub structure: PairTable,
    pub energy: i32,
}

/// A complete direct refolding path. The first step is the start
/// structure, the last one the target; there is exactly one step per
/// move plus the initial entry. The path owns its steps; nothing of the
/// search survives in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// Rebuild the start-to-end step sequence from a terminal node by
    /// walking its parent chain.
    pub(crate) fn reconstruct(terminal: &Rc<SearchNode>) -> Self {
        let mut steps = Vec::with_capacity(terminal.depth + 1);
        let mut cur: Option<&SearchNode> = Some(terminal);
        while let Some(node) = cur {
            steps.push(PathStep {
                structure: node.table.clone(),
                energy: node.energy,
            });
            cur = node.parent.as_deref();
        }
        steps.reverse();
        Path { steps }
    }

    /// Flip the step order (used for backward-search results, so a path
    /// always reads start to end).
    pub(crate) fn reversed(mut self) -> Self {
        self.steps.reverse();
        self
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathStep> {
        self.steps.iter()
    }

    /// Number of structures on the path (moves + 1).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&PathStep> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&PathStep> {
        self.steps.last()
    }

    /// The highest energy along the path: the saddle energy.
    pub fn saddle(&self) -> Option<i32> {
        self.steps.iter().map(|s| s.energy).max()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .steps
            .iter()
            .map(|s| format!("{} {:6.2}", s.structure, s.energy as f64 / 100.0))
            .join("\n");
        write!(f, "{}", lines)
    }
}
