use thiserror::Error;

/// Number of child slots per node, one for each letter `a..=z`.
pub const ALPHABET_SIZE: usize = 26;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TrieError {
    #[error("Word '{word}' contains invalid letter {letter:?} (only 'a'..='z' are allowed)")]
    InvalidLetter { word: String, letter: char },
}

/// A single node of the prefix trie.
///
/// Children are allocated lazily, all 26 at once, the first time a word passes through this
/// node. Slots in that array that were never descended into stay empty: they are neither
/// terminal nor parents, and [`TrieNode::child_for`] reports them as absent.
#[derive(Debug, Default)]
pub struct TrieNode {
    terminal: bool,
    children: Option<Box<[TrieNode; ALPHABET_SIZE]>>,
}

#[inline]
fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

impl TrieNode {
    /// Returns `true` if the path from the root to this node spells a whole word.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    #[inline]
    fn is_meaningful(&self) -> bool {
        self.terminal || self.children.is_some()
    }

    /// Follows the edge labelled `letter`.
    ///
    /// Returns `None` when no dictionary word continues with `letter` from here. This is the
    /// pruning primitive of the search, so it only returns children that either end a word or
    /// lead to a longer one.
    #[inline]
    pub fn child_for(&self, letter: u8) -> Option<&TrieNode> {
        let index = letter_index(letter)?;
        let child = &self.children.as_ref()?[index];
        child.is_meaningful().then_some(child)
    }

    fn child_or_insert(&mut self, index: usize) -> &mut TrieNode {
        let children = self
            .children
            .get_or_insert_with(|| Box::new(std::array::from_fn(|_| TrieNode::default())));
        &mut children[index]
    }
}

/// Mutable construction phase of a [`Trie`].
///
/// All insertion happens here; [`TrieBuilder::build`] consumes the builder and hands back a
/// trie with no mutating methods, so a built trie can be shared by reference across worker
/// threads without any locking.
#[derive(Debug, Default)]
pub struct TrieBuilder {
    root: TrieNode,
    word_count: usize,
}

impl TrieBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `word`, marking its final node terminal.
    ///
    /// Inserting the same word twice is a no-op. The word is checked before any node is
    /// created, so a rejected word leaves the trie untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidLetter`] if `word` contains anything other than `a..=z`.
    pub fn insert(&mut self, word: &str) -> Result<(), TrieError> {
        if let Some(letter) = word.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(TrieError::InvalidLetter {
                word: word.to_string(),
                letter,
            });
        }

        let mut node = &mut self.root;
        for letter in word.bytes() {
            node = node.child_or_insert(usize::from(letter - b'a'));
        }
        if !node.terminal {
            node.terminal = true;
            self.word_count += 1;
        }
        Ok(())
    }

    pub fn build(self) -> Trie {
        Trie {
            root: self.root,
            word_count: self.word_count,
        }
    }
}

/// An immutable prefix trie over lowercase words.
#[derive(Debug)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

// Workers borrow the trie concurrently; it must stay free of interior mutability.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Trie>();
};

impl Trie {
    /// Builds a trie containing every word yielded by `words`.
    pub fn from_words<I, S>(words: I) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = TrieBuilder::new();
        for word in words {
            builder.insert(word.as_ref())?;
        }
        Ok(builder.build())
    }

    #[inline]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words in the trie.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Descends from the root along `word`, returning the node reached, if any.
    pub fn walk(&self, word: &str) -> Option<&TrieNode> {
        word.bytes()
            .try_fold(&self.root, |node, letter| node.child_for(letter))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(TrieNode::is_terminal)
    }
}
