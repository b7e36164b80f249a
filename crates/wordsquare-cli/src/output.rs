use crate::utils::progress::CliProgressHandler;
use std::io::{self, Write};
use tracing::warn;
use wordsquare::core::board::Board;
use wordsquare::engine::sink::BoardSink;

/// How boards are written to standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One board per line, rows separated by commas.
    Compact,
    /// One row per line, with a blank line after each board.
    Pretty,
}

impl OutputFormat {
    pub fn write_board(self, writer: &mut impl Write, board: &Board) -> io::Result<()> {
        match self {
            OutputFormat::Compact => writeln!(writer, "{}", board.rows().join(",")),
            OutputFormat::Pretty => write!(writer, "{}\n\n", board.rows().join("\n")),
        }
    }
}

/// Writes boards as they arrive from the search.
///
/// A write failure (for example a closed pipe) cannot stop the search, so the first error is
/// kept, later boards are discarded, and the error is returned by [`BoardPrinter::finish`].
pub struct BoardPrinter<W: Write> {
    writer: W,
    format: OutputFormat,
    progress: Option<CliProgressHandler>,
    written: u64,
    error: Option<io::Error>,
}

impl<W: Write> BoardPrinter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer,
            format,
            progress: None,
            written: 0,
            error: None,
        }
    }

    /// Hides `progress` while each board is written so the two don't interleave.
    pub fn with_progress(mut self, progress: CliProgressHandler) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> BoardSink for BoardPrinter<W> {
    fn accept(&mut self, board: Board) {
        if self.error.is_some() {
            return;
        }

        let format = self.format;
        let writer = &mut self.writer;
        let result = match &self.progress {
            Some(progress) => progress.suspend(|| format.write_board(writer, &board)),
            None => format.write_board(writer, &board),
        };

        match result {
            Ok(()) => self.written += 1,
            Err(e) => {
                warn!("Failed to write board; further boards will be discarded: {}", e);
                self.error = Some(e);
            }
        }
    }
}
