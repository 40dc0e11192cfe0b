use crate::{LetterGrid, Trie, TrieNode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One concrete placement of a dictionary word in the grid: the word text
/// and the ordered cell path that spells it.
///
/// Consecutive path cells are Moore-adjacent and no cell repeats within
/// the path. The word text is stored lowercase regardless of how the grid
/// letters are cased, so it compares equal to dictionary entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOccurrence {
    /// The spelled word, lowercase.
    pub word: String,
    /// Linear cell indices, in spelling order.
    pub path: Vec<usize>,
}

impl WordOccurrence {
    /// The cell the word starts at.
    pub fn start(&self) -> Option<usize> {
        self.path.first().copied()
    }

    /// Number of cells (equals the word's character count).
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// One pending step of the trie-guided grid walk.
struct SearchState<'a> {
    node: &'a TrieNode,
    position: usize,
    path: Vec<usize>,
}

/// Find every word occurrence whose path starts at `start`.
///
/// Walks the grid and the trie in lockstep using an explicit work list:
/// each popped state advances one cell and one trie edge, emitting an
/// occurrence whenever the reached node is terminal. Branches die silently
/// when the cell is empty or the trie has no matching edge, so a partially
/// filled grid simply yields fewer occurrences.
fn find_words_starting_at(grid: &LetterGrid, trie: &Trie, start: usize) -> Vec<WordOccurrence> {
    let mut found = Vec::new();
    let mut stack = vec![SearchState {
        node: trie.root(),
        position: start,
        path: Vec::new(),
    }];

    while let Some(state) = stack.pop() {
        let letter = match grid.get(state.position) {
            Some(letter) => letter,
            None => continue,
        };
        let node = match state.node.child(letter) {
            Some(node) => node,
            None => continue,
        };

        let mut path = state.path;
        path.push(state.position);

        if node.is_terminal() {
            found.push(WordOccurrence {
                word: spell(grid, &path),
                path: path.clone(),
            });
        }

        for neighbor in grid.neighbors(state.position) {
            if !path.contains(&neighbor) {
                stack.push(SearchState {
                    node,
                    position: neighbor,
                    path: path.clone(),
                });
            }
        }
    }

    found
}

fn spell(grid: &LetterGrid, path: &[usize]) -> String {
    path.iter()
        .filter_map(|&index| grid.get(index))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Find every word occurrence in the grid, across all start cells.
pub fn find_words(grid: &LetterGrid, trie: &Trie) -> Vec<WordOccurrence> {
    find_words_from(grid, trie, &[])
}

/// Find word occurrences starting from the given cells only.
///
/// An empty `starts` slice means no restriction. Restricting the start
/// set never changes which occurrences exist for the listed cells, only
/// skips the walks rooted elsewhere.
pub fn find_words_from(grid: &LetterGrid, trie: &Trie, starts: &[usize]) -> Vec<WordOccurrence> {
    let mut occurrences = Vec::new();
    for index in 0..grid.len() {
        if starts.is_empty() || starts.contains(&index) {
            occurrences.extend(find_words_starting_at(grid, trie, index));
        }
    }
    occurrences
}

/// Drop occurrences that duplicate an earlier one.
///
/// Two occurrences are duplicates when their word texts are equal and
/// their paths cover the same cell set, compared order-independently. The
/// first-discovered occurrence of each equivalence class is kept with its
/// original path order intact.
pub fn dedup_occurrences(occurrences: Vec<WordOccurrence>) -> Vec<WordOccurrence> {
    let mut seen: HashSet<(String, Vec<usize>)> = HashSet::new();
    let mut unique = Vec::new();
    for occurrence in occurrences {
        let mut cells = occurrence.path.clone();
        cells.sort_unstable();
        if seen.insert((occurrence.word.clone(), cells)) {
            unique.push(occurrence);
        }
    }
    unique
}
