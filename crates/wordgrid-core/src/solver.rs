use crate::cover::{enumerate_covers, SearchLimits};
use crate::finder::{dedup_occurrences, find_words, WordOccurrence};
use crate::{LetterGrid, Trie};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// One complete partition of the grid into word occurrences.
///
/// The occurrence paths are pairwise disjoint and together cover every
/// grid cell exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// The words of this solution, in the solver's selection order.
    pub words: Vec<WordOccurrence>,
}

impl Solution {
    /// Number of words in the partition.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Every cell index covered by this solution.
    pub fn covered_cells(&self) -> BTreeSet<usize> {
        self.words
            .iter()
            .flat_map(|word| word.path.iter().copied())
            .collect()
    }

    /// Whether some word in this solution starts at `cell`.
    pub fn has_word_starting_at(&self, cell: usize) -> bool {
        self.words.iter().any(|word| word.start() == Some(cell))
    }
}

/// Result of one solve call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// All solutions found, ranked by ascending word count.
    pub solutions: Vec<Solution>,
    /// True when a configured limit stopped the search early; the
    /// solution list may then be incomplete.
    pub truncated: bool,
}

/// Configuration for the solver: caps on the exact-cover enumeration.
///
/// The defaults are unbounded, giving the exhaustive behavior; callers
/// solving untrusted or large grids should set at least one cap, since
/// the search is worst-case exponential in the number of candidate
/// occurrences.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverConfig {
    /// Stop after this many solutions.
    pub max_solutions: Option<usize>,
    /// Stop after this many exact-cover search nodes.
    pub max_nodes: Option<u64>,
    /// Give up after this much wall-clock time.
    pub time_budget: Option<Duration>,
}

/// Errors a solve call can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A hint referenced a cell index outside the grid.
    HintOutOfBounds { index: usize, cells: usize },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::HintOutOfBounds { index, cells } => write!(
                f,
                "hint index {} is out of bounds for a grid of {} cells",
                index, cells
            ),
        }
    }
}

impl std::error::Error for SolveError {}

/// The letter-grid puzzle solver.
///
/// Stateless between calls: each [`solve`](Solver::solve) takes a grid
/// snapshot and a read-only trie and produces a fresh report. The same
/// inputs always produce the same solutions in the same order.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver with unbounded search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with custom limits.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Find every way to partition the grid into dictionary words.
    ///
    /// `hints` lists cell indices that must each be the starting cell of
    /// some word in every returned solution; an empty slice means no
    /// restriction. A hint index outside the grid is an error. A grid
    /// with empty cells or no matching words yields an empty report, not
    /// an error.
    pub fn solve(
        &self,
        grid: &LetterGrid,
        trie: &Trie,
        hints: &[usize],
    ) -> Result<SolveReport, SolveError> {
        if let Some(&index) = hints.iter().find(|&&index| index >= grid.len()) {
            return Err(SolveError::HintOutOfBounds {
                index,
                cells: grid.len(),
            });
        }

        let occurrences = dedup_occurrences(find_words(grid, trie));
        if occurrences.is_empty() {
            return Ok(SolveReport {
                solutions: Vec::new(),
                truncated: false,
            });
        }

        let rows: Vec<Vec<usize>> = occurrences
            .iter()
            .map(|occurrence| occurrence.path.clone())
            .collect();
        let limits = SearchLimits {
            max_solutions: self.config.max_solutions,
            max_nodes: self.config.max_nodes,
            deadline: self.config.time_budget.map(|budget| Instant::now() + budget),
        };
        let result = enumerate_covers(&rows, grid.len(), limits);

        let solutions: Vec<Solution> = result
            .covers
            .into_iter()
            .map(|cover| Solution {
                words: cover
                    .into_iter()
                    .map(|row| occurrences[row].clone())
                    .collect(),
            })
            .collect();

        let mut solutions = filter_by_hints(solutions, hints);
        rank(&mut solutions);

        Ok(SolveReport {
            solutions,
            truncated: result.truncated,
        })
    }
}

/// Keep only solutions in which every hint cell starts a word.
///
/// Hints are AND-combined. An empty hint set keeps everything.
pub fn filter_by_hints(solutions: Vec<Solution>, hints: &[usize]) -> Vec<Solution> {
    if hints.is_empty() {
        return solutions;
    }
    solutions
        .into_iter()
        .filter(|solution| {
            hints
                .iter()
                .all(|&hint| solution.has_word_starting_at(hint))
        })
        .collect()
}

/// Order solutions by ascending word count; ties keep discovery order.
pub fn rank(solutions: &mut [Solution]) {
    solutions.sort_by_key(|solution| solution.word_count());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_all(rows: &[&str], words: &[&str], hints: &[usize]) -> SolveReport {
        let grid = LetterGrid::from_rows(rows).unwrap();
        let trie: Trie = words.iter().collect();
        Solver::new().solve(&grid, &trie, hints).unwrap()
    }

    fn assert_exact_partition(grid: &LetterGrid, solution: &Solution) {
        let mut seen = BTreeSet::new();
        for word in &solution.words {
            for &cell in &word.path {
                assert!(seen.insert(cell), "cell {} covered twice", cell);
            }
        }
        assert_eq!(seen, (0..grid.len()).collect::<BTreeSet<_>>());
        assert_eq!(solution.covered_cells(), seen);
    }

    #[test]
    fn test_single_forced_word() {
        let report = solve_all(&["ab"], &["ab"], &[]);

        assert!(!report.truncated);
        assert_eq!(report.solutions.len(), 1);
        assert_eq!(
            report.solutions[0].words,
            vec![WordOccurrence {
                word: "ab".into(),
                path: vec![0, 1],
            }]
        );
    }

    #[test]
    fn test_two_disjoint_exact_covers() {
        let report = solve_all(&["ab", "cd"], &["ab", "cd", "ac", "bd"], &[]);

        assert_eq!(report.solutions.len(), 2);
        let grid = LetterGrid::from_rows(&["ab", "cd"]).unwrap();
        for solution in &report.solutions {
            assert_eq!(solution.word_count(), 2);
            assert_exact_partition(&grid, solution);
        }

        let mut keys: Vec<Vec<&str>> = report
            .solutions
            .iter()
            .map(|solution| {
                let mut words: Vec<&str> =
                    solution.words.iter().map(|w| w.word.as_str()).collect();
                words.sort();
                words
            })
            .collect();
        keys.sort();
        assert_eq!(keys, vec![vec!["ab", "cd"], vec!["ac", "bd"]]);
    }

    #[test]
    fn test_no_solution_is_empty_not_error() {
        let report = solve_all(&["xz"], &["ab", "cd"], &[]);
        assert!(report.solutions.is_empty());
        assert!(!report.truncated);
    }

    #[test]
    fn test_hint_rejects_solutions_not_starting_there() {
        // Of the two covers of the 2x2 grid, only ac/bd has a word
        // starting at cell 1 ("bd").
        let report = solve_all(&["ab", "cd"], &["ab", "cd", "ac", "bd"], &[1]);

        assert_eq!(report.solutions.len(), 1);
        let mut words: Vec<&str> = report.solutions[0]
            .words
            .iter()
            .map(|w| w.word.as_str())
            .collect();
        words.sort();
        assert_eq!(words, vec!["ac", "bd"]);
    }

    #[test]
    fn test_empty_hint_set_is_noop() {
        let unfiltered = solve_all(&["ab", "cd"], &["ab", "cd", "ac", "bd"], &[]);
        let empty_hints = solve_all(&["ab", "cd"], &["ab", "cd", "ac", "bd"], &[]);
        assert_eq!(unfiltered.solutions, empty_hints.solutions);
    }

    #[test]
    fn test_hints_and_combined() {
        // Hints {0, 1}: ab/cd fails (nothing starts at 1); ac/bd passes
        // (ac starts at 0, bd starts at 1).
        let both = solve_all(&["ab", "cd"], &["ab", "cd", "ac", "bd"], &[0, 1]);
        assert_eq!(both.solutions.len(), 1);

        // Hints {1, 3}: nothing starts at 3 in either cover.
        let none = solve_all(&["ab", "cd"], &["ab", "cd", "ac", "bd"], &[1, 3]);
        assert!(none.solutions.is_empty());
    }

    #[test]
    fn test_hint_out_of_bounds_is_error() {
        let grid = LetterGrid::from_rows(&["ab"]).unwrap();
        let trie: Trie = ["ab"].into_iter().collect();

        let err = Solver::new().solve(&grid, &trie, &[2]).unwrap_err();
        assert_eq!(err, SolveError::HintOutOfBounds { index: 2, cells: 2 });
        assert!(err.to_string().contains("out of bounds"));
    }

    #[test]
    fn test_unfilled_grid_completes_empty() {
        let mut grid = LetterGrid::new(2, 2);
        grid.set(0, Some('a'));
        grid.set(1, Some('b'));
        let trie: Trie = ["ab"].into_iter().collect();

        let report = Solver::new().solve(&grid, &trie, &[]).unwrap();
        assert!(report.solutions.is_empty());
        assert!(!report.truncated);
    }

    #[test]
    fn test_ranking_ascending_word_count() {
        // 1x4 "abab": either one 4-letter word or two 2-letter words.
        let report = solve_all(&["abab"], &["ab", "abab"], &[]);

        assert_eq!(report.solutions.len(), 2);
        assert_eq!(report.solutions[0].word_count(), 1);
        assert_eq!(report.solutions[1].word_count(), 2);
    }

    #[test]
    fn test_max_solutions_truncates_report() {
        let grid = LetterGrid::from_rows(&["ab", "cd"]).unwrap();
        let trie: Trie = ["ab", "cd", "ac", "bd"].into_iter().collect();
        let solver = Solver::with_config(SolverConfig {
            max_solutions: Some(1),
            ..Default::default()
        });

        let report = solver.solve(&grid, &trie, &[]).unwrap();
        assert_eq!(report.solutions.len(), 1);
        assert!(report.truncated);
    }

    #[test]
    fn test_solve_is_deterministic() {
        let first = solve_all(&["ab", "cd"], &["ab", "cd", "ac", "bd"], &[]);
        let second = solve_all(&["ab", "cd"], &["ab", "cd", "ac", "bd"], &[]);
        assert_eq!(first.solutions, second.solutions);
    }

    #[test]
    fn test_larger_grid_partitions_exactly() {
        // 3x3 with overlapping candidates; every reported solution must
        // be a perfect partition of all 9 cells.
        let rows = ["kis", "sat", "alo"];
        let words = ["kissa", "talo", "kis", "sat", "alo", "kissat"];
        let report = solve_all(&rows, &words, &[]);

        let grid = LetterGrid::from_rows(&rows).unwrap();
        assert!(!report.solutions.is_empty());
        for solution in &report.solutions {
            assert_exact_partition(&grid, solution);
            for word in &solution.words {
                for pair in word.path.windows(2) {
                    assert!(grid.neighbors(pair[0]).contains(&pair[1]));
                }
            }
        }
        let counts: Vec<usize> = report
            .solutions
            .iter()
            .map(Solution::word_count)
            .collect();
        assert!(counts.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_solution_serde_roundtrip() {
        let report = solve_all(&["ab"], &["ab"], &[]);
        let json = serde_json::to_string(&report.solutions[0]).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report.solutions[0]);
    }
}
