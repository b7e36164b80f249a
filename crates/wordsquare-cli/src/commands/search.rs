use crate::config::RunConfig;
use crate::error::Result;
use crate::output::{BoardPrinter, OutputFormat};
use crate::utils::progress::CliProgressHandler;
use std::io::{self, IsTerminal};
use tracing::info;
use wordsquare::core::io::word_list::WordList;
use wordsquare::core::trie::Trie;
use wordsquare::engine::config::SearchConfigBuilder;
use wordsquare::engine::error::EngineError;
use wordsquare::engine::progress::ProgressReporter;
use wordsquare::workflows::{self, search::SearchSummary};

/// Loads the dictionary, runs the search and streams every board to stdout.
pub fn run(config: &RunConfig, show_progress: bool) -> Result<SearchSummary> {
    let stdout = io::stdout();
    info!(
        "Size: {}, threads: {}, pretty: {}, unique: {}, piped: {}.",
        config.size,
        config.threads,
        config.format == OutputFormat::Pretty,
        config.unique_words,
        is_named_pipe(&stdout)
    );

    let word_list = WordList::load_from_path(&config.dictionary_path, config.size)?;
    let trie = Trie::from_words(word_list.words()).map_err(EngineError::from)?;

    let start_index = word_list.resolve_index(config.start_word.as_deref(), 0);
    let end_index = word_list.resolve_index(config.end_word.as_deref(), word_list.len() - 1);
    let words = word_list.words();
    info!(
        "Start word range: {} ({}) - {} ({}).",
        words[start_index], start_index, words[end_index], end_index
    );

    let search_config = SearchConfigBuilder::new()
        .size(config.size)
        .index_range(start_index, end_index)
        .num_workers(config.threads)
        .require_unique_words(config.unique_words)
        .build()
        .map_err(EngineError::from)?;

    let progress_handler = CliProgressHandler::new(show_progress && io::stderr().is_terminal());
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let mut printer =
        BoardPrinter::new(stdout.lock(), config.format).with_progress(progress_handler);

    let summary = workflows::search::run(words, &trie, &search_config, &mut printer, &reporter)?;

    let written = printer.written();
    let _stdout = printer.finish()?;
    info!(
        "Searched {} starting words, wrote {} of {} squares.",
        summary.words_searched, written, summary.boards_found
    );

    Ok(summary)
}

/// Whether `handle` is a FIFO, as when stdout feeds another process. Redirects to regular
/// files and terminals are not pipes.
#[cfg(unix)]
fn is_named_pipe(handle: &impl std::os::fd::AsFd) -> bool {
    use std::os::unix::fs::FileTypeExt;

    handle
        .as_fd()
        .try_clone_to_owned()
        .map(std::fs::File::from)
        .and_then(|file| file.metadata())
        .is_ok_and(|meta| meta.file_type().is_fifo())
}

#[cfg(not(unix))]
fn is_named_pipe<T>(_handle: &T) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn run_config(path: PathBuf) -> RunConfig {
        RunConfig {
            dictionary_path: path,
            size: 4,
            threads: 2,
            start_word: None,
            end_word: None,
            unique_words: false,
            format: OutputFormat::Compact,
        }
    }

    fn dictionary_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "rear\ncard\ndart\narea\nabc\nzzzzz").unwrap();
        file
    }

    #[test]
    fn run_finds_the_symmetric_square() {
        let file = dictionary_file();
        let summary = run(&run_config(file.path().to_path_buf()), false).unwrap();
        assert_eq!(summary.words_searched, 4);
        assert_eq!(summary.boards_found, 1);
    }

    #[test]
    fn run_with_unique_words_finds_nothing() {
        let file = dictionary_file();
        let mut config = run_config(file.path().to_path_buf());
        config.unique_words = true;
        config.start_word = Some("card".to_string());
        let summary = run(&config, false).unwrap();
        assert_eq!(summary.words_searched, 3);
        assert_eq!(summary.boards_found, 0);
    }

    #[test]
    fn run_reports_missing_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&run_config(dir.path().join("none.txt")), false);
        assert!(matches!(result, Err(CliError::WordList(_))));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let file = dictionary_file();
        let mut config = run_config(file.path().to_path_buf());
        config.start_word = Some("rear".to_string());
        config.end_word = Some("area".to_string());
        let result = run(&config, false);
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::InvalidRange { .. }))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn regular_file_is_not_a_named_pipe() {
        let file = NamedTempFile::new().unwrap();
        assert!(!is_named_pipe(file.as_file()));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn fifo_is_a_named_pipe() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.fifo");
        let created = std::process::Command::new("mkfifo")
            .arg(&path)
            .status()
            .is_ok_and(|status| status.success());
        if !created {
            return;
        }

        // Opening for both reading and writing does not wait for a peer on Linux.
        let fifo = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .unwrap();
        assert!(is_named_pipe(&fifo));
    }
}
