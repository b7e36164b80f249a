use std::collections::HashSet;

/// A completed word square, stored as its rows from top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    rows: Vec<String>,
}

impl Board {
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits a row-major buffer of `size * size` letters into rows.
    pub(crate) fn from_letters(letters: &[u8], size: usize) -> Self {
        Self {
            rows: letters
                .chunks_exact(size)
                .map(|row| row.iter().copied().map(char::from).collect())
                .collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }

    /// Reads column `col` from top to bottom.
    pub fn column(&self, col: usize) -> String {
        column_of(&self.rows, col)
    }

    pub fn columns(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.size()).map(|col| self.column(col))
    }

    pub fn has_unique_words(&self) -> bool {
        all_words_unique(&self.rows)
    }
}

impl From<Board> for Vec<String> {
    fn from(board: Board) -> Self {
        board.rows
    }
}

fn column_of<S: AsRef<str>>(rows: &[S], col: usize) -> String {
    rows.iter()
        .map(|row| char::from(row.as_ref().as_bytes()[col]))
        .collect()
}

/// Returns `true` if the `2n` words of a square board (its `n` rows and `n` columns) are
/// pairwise distinct.
///
/// # Panics
///
/// Panics if any row is shorter than the number of rows.
pub fn all_words_unique<S: AsRef<str>>(rows: &[S]) -> bool {
    let columns: Vec<String> = (0..rows.len()).map(|col| column_of(rows, col)).collect();

    let mut seen = HashSet::with_capacity(2 * rows.len());
    rows.iter()
        .map(AsRef::as_ref)
        .chain(columns.iter().map(String::as_str))
        .all(|word| seen.insert(word))
}
