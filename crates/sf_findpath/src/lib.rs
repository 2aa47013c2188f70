//! The sf_findpath crate.
//!
//! Estimates the saddle energy (kinetic barrier) between two secondary
//! structures of the same sequence and returns an approximate refolding
//! path. Only direct paths are considered: every step inserts or removes
//! one base pair from the symmetric difference of the two structures.
//!
//! The search is a width-bounded beam over move orderings, run in both
//! directions; the better of the two barriers wins. It is a heuristic:
//! widening the beam (`maxkeep`) is the remedy for unsatisfactory
//! results, not an internal fallback.
//!
//! ```
//! use sf_findpath::{find_path, find_saddle};
//!
//! let seq = "GGGAAACCC";
//! let s1 = "(((...)))";
//! let s2 = ".........";
//!
//! let path = find_path(seq, s1, s2, 10).unwrap();
//! assert_eq!(path.len(), 4); // 3 moves, 4 structures
//! assert_eq!(path.saddle(), find_saddle(seq, s1, s2, 10).ok());
//! ```

mod error;
mod moves;
mod path;
mod saddle;
mod search;

pub use error::*;
pub use moves::*;
pub use path::*;
pub use saddle::*;
