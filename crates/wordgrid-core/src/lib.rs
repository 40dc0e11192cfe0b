//! Letter-grid word puzzle engine.
//!
//! Given a rectangular grid of letters and a dictionary, finds every way
//! to partition the grid's cells into dictionary words, where each word
//! occupies a connected path under 8-directional adjacency and every cell
//! belongs to exactly one word.
//!
//! The pipeline: a [`Trie`] over the dictionary guides a depth-first walk
//! of the [`LetterGrid`] that discovers every word occurrence; duplicates
//! are collapsed; the survivors become candidate rows of an exact-cover
//! search that enumerates all perfect partitions; optional start-cell
//! hints filter the results and solutions are ranked by word count.
//!
//! ```
//! use wordgrid_core::{LetterGrid, Solver, Trie};
//!
//! let trie: Trie = ["ab", "cd", "ac", "bd"].into_iter().collect();
//! let grid = LetterGrid::from_rows(&["ab", "cd"]).unwrap();
//!
//! let report = Solver::new().solve(&grid, &trie, &[]).unwrap();
//! assert_eq!(report.solutions.len(), 2);
//! ```

mod cover;
mod finder;
mod grid;
mod solver;
mod trie;

pub use cover::{enumerate_covers, CoverResult, SearchLimits};
pub use finder::{dedup_occurrences, find_words, find_words_from, WordOccurrence};
pub use grid::LetterGrid;
pub use solver::{filter_by_hints, rank, SolveError, SolveReport, Solution, Solver, SolverConfig};
pub use trie::{Trie, TrieNode};
