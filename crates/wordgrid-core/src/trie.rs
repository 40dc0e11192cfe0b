use std::collections::BTreeMap;

/// A node in the dictionary prefix tree.
///
/// Every path from the root to a node with `terminal` set spells one
/// dictionary word. The root carries no letter.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    letter: Option<char>,
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    fn with_letter(letter: char) -> Self {
        Self {
            letter: Some(letter),
            children: BTreeMap::new(),
            terminal: false,
        }
    }

    /// The letter this node was reached by, or `None` for the root.
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Whether the path from the root to this node spells a full word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Follow one edge, case-insensitively.
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        let mut lowered = ch.to_lowercase();
        let key = lowered.next()?;
        if lowered.next().is_some() {
            // Multi-char lowercase expansions never appear in the accepted
            // alphabet, so there is no edge to follow.
            return None;
        }
        self.children.get(&key)
    }
}

/// An ordered prefix tree over the accepted dictionary.
///
/// Built once by repeated [`insert`](Trie::insert) calls, then treated as
/// read-only for the lifetime of any solve. The trie itself performs no
/// validation: the ingestion layer is responsible for only submitting
/// normalized words within the accepted alphabet and length window.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, creating any missing prefix nodes and marking the
    /// final node terminal. Case-insensitive. Inserting an empty string
    /// is a no-op.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for ch in word.to_lowercase().chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| TrieNode::with_letter(ch));
        }
        if !node.terminal {
            node.terminal = true;
            self.word_count += 1;
        }
    }

    /// The root node, entry point for incremental walks.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Whether `word` was inserted as a full word (not merely a prefix).
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &self.root;
        for ch in word.chars() {
            match node.child(ch) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.terminal
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Whether no words have been inserted.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }
}
