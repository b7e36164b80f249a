use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}

/// Parameters of one search run.
///
/// `start_index..=end_index` selects the starting words (row 1 candidates) from the sorted
/// dictionary passed alongside this config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub size: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub num_workers: usize,
    pub require_unique_words: bool,
}

impl SearchConfig {
    /// Number of starting words in the configured range.
    pub fn num_starting_words(&self) -> usize {
        (self.end_index + 1).saturating_sub(self.start_index)
    }
}

#[derive(Default)]
pub struct SearchConfigBuilder {
    size: Option<usize>,
    start_index: Option<usize>,
    end_index: Option<usize>,
    num_workers: Option<usize>,
    require_unique_words: Option<bool>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }
    pub fn start_index(mut self, index: usize) -> Self {
        self.start_index = Some(index);
        self
    }
    pub fn end_index(mut self, index: usize) -> Self {
        self.end_index = Some(index);
        self
    }
    /// Sets both ends of the starting-word range at once.
    pub fn index_range(self, start: usize, end: usize) -> Self {
        self.start_index(start).end_index(end)
    }
    pub fn num_workers(mut self, n: usize) -> Self {
        self.num_workers = Some(n);
        self
    }
    pub fn require_unique_words(mut self, unique: bool) -> Self {
        self.require_unique_words = Some(unique);
        self
    }

    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        let size = self.size.ok_or(ConfigError::MissingParameter("size"))?;
        if size == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "size",
                reason: "must be at least 1",
            });
        }
        let num_workers = self.num_workers.unwrap_or(1);
        if num_workers == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "num_workers",
                reason: "must be at least 1",
            });
        }

        Ok(SearchConfig {
            size,
            start_index: self
                .start_index
                .ok_or(ConfigError::MissingParameter("start_index"))?,
            end_index: self
                .end_index
                .ok_or(ConfigError::MissingParameter("end_index"))?,
            num_workers,
            require_unique_words: self.require_unique_words.unwrap_or(false),
        })
    }
}
