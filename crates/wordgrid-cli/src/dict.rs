use std::io::{self, BufRead};
use wordgrid_core::Trie;

/// Shortest word accepted into the dictionary.
pub const DEFAULT_MIN_LEN: usize = 3;
/// Longest word accepted into the dictionary.
pub const DEFAULT_MAX_LEN: usize = 10;

/// Whether every character is in the accepted alphabet: ASCII a-z plus
/// the Finnish letters å, ä, ö.
fn is_accepted(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || matches!(ch, 'å' | 'ä' | 'ö'))
}

/// Read a word list, one entry per line.
///
/// Tab-separated lines (the word-list TSV format) contribute their first
/// field. Entries are lowercased; anything outside the length window or
/// the accepted alphabet is dropped, which also discards entries with
/// digits, hyphens, or foreign letters.
pub fn load_words<R: BufRead>(reader: R, min_len: usize, max_len: usize) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let entry = line.split('\t').next().unwrap_or("").trim().to_lowercase();
        let length = entry.chars().count();
        if length >= min_len && length <= max_len && is_accepted(&entry) {
            words.push(entry);
        }
    }
    Ok(words)
}

/// Insert all words into a fresh trie.
pub fn build_trie(words: &[String]) -> Trie {
    words.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(input: &str) -> Vec<String> {
        load_words(Cursor::new(input), DEFAULT_MIN_LEN, DEFAULT_MAX_LEN).unwrap()
    }

    #[test]
    fn test_takes_first_tab_field_and_lowercases() {
        let words = load("Hakusana\tSanaluokka\nKISSA\tsubstantiivi\ntalo\tsubstantiivi\n");
        assert_eq!(words, vec!["hakusana", "kissa", "talo"]);
    }

    #[test]
    fn test_length_window() {
        let words = load("ab\nabc\nabcdefghij\nabcdefghijk\n");
        assert_eq!(words, vec!["abc", "abcdefghij"]);
    }

    #[test]
    fn test_rejects_characters_outside_alphabet() {
        let words = load("kahvi-tauko\nsana1\npöytä\nsää\ncafé\n");
        assert_eq!(words, vec!["pöytä", "sää"]);
    }

    #[test]
    fn test_extended_letters_count_as_single_chars() {
        // "ääliö" is 5 letters even though it is more than 5 bytes.
        let words = load_words(Cursor::new("ääliö\n"), 5, 5).unwrap();
        assert_eq!(words, vec!["ääliö"]);
    }

    #[test]
    fn test_build_trie_contains_all_words() {
        let words = load("kissa\ntalo\n");
        let trie = build_trie(&words);
        assert_eq!(trie.len(), 2);
        assert!(trie.contains("kissa"));
        assert!(trie.contains("talo"));
    }
}
