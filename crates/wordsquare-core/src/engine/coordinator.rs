use super::config::SearchConfig;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::sink::BoardSink;
use super::worker::Worker;
use crate::core::board::Board;
use crate::core::trie::Trie;
use crossbeam_channel::{Receiver, Sender, bounded, select};
use std::thread;
use tracing::{debug, info, instrument, trace};

/// Totals of a finished search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub words_searched: u64,
    pub boards_found: u64,
}

struct Coordinator<'a, 'r, S: ?Sized> {
    words: &'a [String],
    sink: &'a mut S,
    reporter: &'a ProgressReporter<'r>,
    active: Vec<usize>,
    searched: u64,
    found: u64,
}

/// Runs a search over `words[config.start_index..=config.end_index]` on
/// `config.num_workers` threads, feeding every board into `sink`.
///
/// The caller guarantees the preconditions on `words` and `config`; nothing is validated
/// here.
#[instrument(
    skip_all,
    name = "search_coordinator",
    fields(
        start = config.start_index,
        end = config.end_index,
        workers = config.num_workers
    )
)]
pub(crate) fn run<S>(
    words: &[String],
    trie: &Trie,
    config: &SearchConfig,
    sink: &mut S,
    reporter: &ProgressReporter,
) -> Result<SearchSummary, EngineError>
where
    S: BoardSink + ?Sized,
{
    thread::scope(|scope| {
        // Zero capacity: every hand-off is a rendezvous, so at most one starting word per
        // worker is ever in flight.
        let (assign_tx, assign_rx) = bounded::<usize>(0);
        let (board_tx, board_rx) = bounded::<Board>(0);
        let (done_tx, done_rx) = bounded::<usize>(0);

        let mut handles = Vec::with_capacity(config.num_workers);
        for id in 0..config.num_workers {
            let worker = Worker::new(
                id,
                words,
                trie,
                config,
                assign_rx.clone(),
                board_tx.clone(),
                done_tx.clone(),
            );
            let handle = thread::Builder::new()
                .name(format!("search-worker-{id}"))
                .spawn_scoped(scope, move || worker.run())
                .map_err(|source| EngineError::WorkerSpawn { worker: id, source })?;
            handles.push(handle);
        }
        // Only workers may hold these ends, so a closed channel means every worker is gone.
        drop(assign_rx);
        drop(board_tx);
        drop(done_tx);

        info!(
            "Searching {} starting words with {} workers.",
            config.num_starting_words(),
            config.num_workers
        );

        let mut coordinator = Coordinator {
            words,
            sink,
            reporter,
            active: Vec::with_capacity(config.num_workers),
            searched: 0,
            found: 0,
        };
        let outcome = coordinator.drive(
            assign_tx,
            &board_rx,
            &done_rx,
            config.start_index,
            config.end_index,
        );
        // Unblocks any worker still trying to report if the loop bailed out early.
        drop(board_rx);
        drop(done_rx);

        let mut panicked = None;
        for (id, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() {
                panicked.get_or_insert(id);
            }
        }
        if let Some(worker) = panicked {
            return Err(EngineError::WorkerPanicked { worker });
        }

        outcome?;
        Ok(coordinator.summary())
    })
}

impl<S> Coordinator<'_, '_, S>
where
    S: BoardSink + ?Sized,
{
    fn drive(
        &mut self,
        assignments: Sender<usize>,
        boards: &Receiver<Board>,
        done: &Receiver<usize>,
        start: usize,
        end: usize,
    ) -> Result<(), EngineError> {
        self.reporter.report(Progress::SearchStart {
            total_words: (end + 1 - start) as u64,
        });

        let mut next = start;
        while next <= end {
            select! {
                send(assignments, next) -> sent => {
                    sent.map_err(|_| EngineError::WorkersDisconnected)?;
                    self.on_assigned(next);
                    next += 1;
                }
                recv(boards) -> board => {
                    self.on_board(board.map_err(|_| EngineError::WorkersDisconnected)?);
                }
                recv(done) -> index => {
                    self.on_finished(index.map_err(|_| EngineError::WorkersDisconnected)?);
                }
            }
        }

        // Closing the assignment channel tells idle workers to exit.
        drop(assignments);
        debug!(
            in_flight = self.active.len(),
            "All starting words assigned; draining remaining work."
        );
        self.reporter.report(Progress::Message(format!(
            "All {} starting words assigned.",
            end + 1 - start
        )));

        while !self.active.is_empty() {
            select! {
                recv(boards) -> board => {
                    self.on_board(board.map_err(|_| EngineError::WorkersDisconnected)?);
                }
                recv(done) -> index => {
                    self.on_finished(index.map_err(|_| EngineError::WorkersDisconnected)?);
                }
            }
        }

        self.reporter.report(Progress::SearchFinish {
            searched: self.searched,
            found: self.found,
        });
        info!("Finished; found {} squares.", self.found);
        Ok(())
    }

    fn on_assigned(&mut self, index: usize) {
        trace!(index, word = %self.words[index], "Assigned starting word.");
        self.active.push(index);
        self.report_active();
    }

    fn report_active(&self) {
        if !self.reporter.is_enabled() {
            return;
        }
        if let (Some(&oldest), Some(&newest)) = (self.active.first(), self.active.last()) {
            self.reporter.report(Progress::ActiveWords {
                oldest_active: self.words[oldest].clone(),
                newest_active: self.words[newest].clone(),
            });
        }
    }

    fn on_board(&mut self, board: Board) {
        self.found += 1;
        self.sink.accept(board);
        self.reporter
            .report(Progress::BoardFound { found: self.found });
    }

    fn on_finished(&mut self, index: usize) {
        if let Some(pos) = self.active.iter().position(|&i| i == index) {
            self.active.remove(pos);
        }
        self.searched += 1;
        trace!(index, searched = self.searched, "Starting word exhausted.");
        self.reporter.report(Progress::WordFinished {
            searched: self.searched,
        });
        self.report_active();
    }

    fn summary(&self) -> SearchSummary {
        SearchSummary {
            words_searched: self.searched,
            boards_found: self.found,
        }
    }
}
