use thiserror::Error;

use super::config::ConfigError;
use crate::core::trie::TrieError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid search configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build the prefix trie: {0}")]
    Trie(#[from] TrieError),

    #[error("Word list is empty")]
    EmptyWordList,

    #[error("Word '{word}' has length {}, expected {expected}", word.len())]
    WordLengthMismatch { word: String, expected: usize },

    #[error("Invalid starting-word range {start}..={end} for a word list of {len} words")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("Failed to spawn search worker {worker}: {source}")]
    WorkerSpawn {
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Search worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    #[error("All search workers disconnected before the search finished")]
    WorkersDisconnected,
}
