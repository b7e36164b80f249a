use super::config::SearchConfig;
use super::search::SearchFrame;
use crate::core::board::Board;
use crate::core::trie::Trie;
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, trace, warn};

/// One long-lived search thread.
///
/// A worker pulls starting-word indices off the assignment channel until the coordinator
/// closes it, explores each word's subtree to exhaustion, and reports boards and completions
/// back over the other two channels.
pub(crate) struct Worker<'a> {
    id: usize,
    words: &'a [String],
    trie: &'a Trie,
    size: usize,
    require_unique_words: bool,
    assignments: Receiver<usize>,
    boards: Sender<Board>,
    done: Sender<usize>,
}

/// Reports completion of a starting word when dropped, so the coordinator still hears
/// about it if the search of that word unwinds.
struct DoneSignal<'s> {
    done: &'s Sender<usize>,
    index: usize,
}

impl Drop for DoneSignal<'_> {
    fn drop(&mut self) {
        if self.done.send(self.index).is_err() {
            warn!(index = self.index, "Coordinator hung up before completion was reported.");
        }
    }
}

impl<'a> Worker<'a> {
    pub(crate) fn new(
        id: usize,
        words: &'a [String],
        trie: &'a Trie,
        config: &SearchConfig,
        assignments: Receiver<usize>,
        boards: Sender<Board>,
        done: Sender<usize>,
    ) -> Self {
        Self {
            id,
            words,
            trie,
            size: config.size,
            require_unique_words: config.require_unique_words,
            assignments,
            boards,
            done,
        }
    }

    pub(crate) fn run(self) {
        debug!(worker = self.id, "Search worker started.");
        let mut frame = SearchFrame::new(self.trie, self.size, self.require_unique_words);

        for index in self.assignments.iter() {
            let _signal = DoneSignal {
                done: &self.done,
                index,
            };
            let word = &self.words[index];

            if !frame.seed(word) {
                debug!(worker = self.id, word = %word, "Starting word cannot begin a square; skipping.");
                continue;
            }

            trace!(worker = self.id, word = %word, "Exploring starting word.");
            let mut undelivered = 0usize;
            frame.explore(&mut |board| {
                if self.boards.send(board).is_err() {
                    undelivered += 1;
                }
            });
            if undelivered > 0 {
                warn!(
                    worker = self.id,
                    word = %word,
                    undelivered,
                    "Coordinator hung up; boards were dropped."
                );
            }
        }

        debug!(worker = self.id, "No more starting words; worker exiting.");
    }
}
