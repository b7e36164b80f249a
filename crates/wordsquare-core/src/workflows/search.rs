use crate::core::board::Board;
use crate::core::trie::Trie;
use crate::engine::config::{ConfigError, SearchConfig};
use crate::engine::coordinator;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use crate::engine::sink::BoardSink;
use tracing::{info, instrument};

pub use crate::engine::coordinator::SearchSummary;

/// Searches every starting word in `config`'s range, streaming boards into `sink`.
///
/// `words` must be sorted and `trie` must have been built from it. Boards for any one
/// starting word reach `sink` in ascending letter order; boards for different starting words
/// may interleave when more than one worker is used.
///
/// # Errors
///
/// Returns an error if the input violates the engine's preconditions (see [`validate`]), or
/// if a worker thread cannot be spawned or panics.
#[instrument(skip_all, name = "search_workflow")]
pub fn run<S>(
    words: &[String],
    trie: &Trie,
    config: &SearchConfig,
    sink: &mut S,
    reporter: &ProgressReporter,
) -> Result<SearchSummary, EngineError>
where
    S: BoardSink + ?Sized,
{
    validate(words, config)?;
    info!(
        size = config.size,
        unique = config.require_unique_words,
        "Starting word square search from {:?} to {:?}.",
        words[config.start_index],
        words[config.end_index]
    );
    coordinator::run(words, trie, config, sink, reporter)
}

/// Builds a trie over `words` and returns every board found, as in [`run`].
pub fn collect(words: &[String], config: &SearchConfig) -> Result<Vec<Board>, EngineError> {
    validate(words, config)?;
    let trie = Trie::from_words(words)?;
    let mut boards = Vec::new();
    coordinator::run(words, &trie, config, &mut boards, &ProgressReporter::new())?;
    Ok(boards)
}

/// Checks the preconditions the engine relies on.
///
/// The word list must be non-empty with every word exactly `config.size` bytes long, the
/// range `start_index..=end_index` must be non-empty and inside the list, and the size and
/// worker count must be positive. Sortedness is not checked.
pub fn validate(words: &[String], config: &SearchConfig) -> Result<(), EngineError> {
    if config.size == 0 {
        return Err(ConfigError::InvalidParameter {
            name: "size",
            reason: "must be at least 1",
        }
        .into());
    }
    if config.num_workers == 0 {
        return Err(ConfigError::InvalidParameter {
            name: "num_workers",
            reason: "must be at least 1",
        }
        .into());
    }
    if words.is_empty() {
        return Err(EngineError::EmptyWordList);
    }
    if let Some(word) = words.iter().find(|w| w.len() != config.size) {
        return Err(EngineError::WordLengthMismatch {
            word: word.clone(),
            expected: config.size,
        });
    }
    if config.start_index > config.end_index || config.end_index >= words.len() {
        return Err(EngineError::InvalidRange {
            start: config.start_index,
            end: config.end_index,
            len: words.len(),
        });
    }
    Ok(())
}
