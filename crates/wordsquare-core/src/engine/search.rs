use crate::core::board::Board;
use crate::core::trie::{Trie, TrieNode};

/// Mutable state of one depth-first search, owned by a single worker.
///
/// `board` is a fixed row-major buffer of `size * size` letters; only the first `depth`
/// cells are meaningful at any point, and backtracking simply overwrites them. `columns[c]`
/// is the trie node spelled by the letters already placed in column `c` above the current
/// row. The node for the partially filled current row travels down the recursion instead.
pub(crate) struct SearchFrame<'t> {
    trie: &'t Trie,
    size: usize,
    require_unique_words: bool,
    board: Vec<u8>,
    columns: Vec<&'t TrieNode>,
}

impl<'t> SearchFrame<'t> {
    pub(crate) fn new(trie: &'t Trie, size: usize, require_unique_words: bool) -> Self {
        Self {
            trie,
            size,
            require_unique_words,
            board: vec![0; size * size],
            columns: vec![trie.root(); size],
        }
    }

    /// Places `word` as the first row and points every column at the trie node for its
    /// first letter.
    ///
    /// Returns `false` if some letter of `word` starts no dictionary word, in which case no
    /// square can begin with it and [`SearchFrame::explore`] must not be called.
    pub(crate) fn seed(&mut self, word: &str) -> bool {
        let letters = word.as_bytes();
        if letters.len() != self.size {
            return false;
        }
        for (col, &letter) in letters.iter().enumerate() {
            let Some(node) = self.trie.root().child_for(letter) else {
                return false;
            };
            self.board[col] = letter;
            self.columns[col] = node;
        }
        true
    }

    /// Enumerates every square whose first row is the seeded word, in ascending
    /// lexicographic order of the row-major letter sequence.
    pub(crate) fn explore<F>(&mut self, emit: &mut F)
    where
        F: FnMut(Board),
    {
        let root = self.trie.root();
        self.extend(self.size, root, emit);
    }

    fn extend<F>(&mut self, depth: usize, row_node: &'t TrieNode, emit: &mut F)
    where
        F: FnMut(Board),
    {
        if depth == self.board.len() {
            let board = Board::from_letters(&self.board, self.size);
            if !self.require_unique_words || board.has_unique_words() {
                emit(board);
            }
            return;
        }

        let col = depth % self.size;
        let above = self.columns[col];
        let completes_row = (depth + 1) % self.size == 0;

        for letter in b'a'..=b'z' {
            let Some(across) = row_node.child_for(letter) else {
                continue;
            };
            let Some(down) = above.child_for(letter) else {
                continue;
            };

            self.board[depth] = letter;
            self.columns[col] = down;
            let next_row = if completes_row { self.trie.root() } else { across };
            self.extend(depth + 1, next_row, emit);
        }

        self.columns[col] = above;
    }
}
