//! # Engine Module
//!
//! The parallel backtracking search for word squares.
//!
//! ## Overview
//!
//! A search fixes the first row of the square to a starting word and then fills the
//! remaining cells one letter at a time, row by row. Each candidate letter must extend both
//! the current row and the current column to a prefix of some dictionary word, which the
//! shared [`Trie`](crate::core::trie::Trie) answers in constant time. Starting words are
//! independent, so they are spread across a pool of worker threads.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Square size, starting-word range, worker count
//! - **Search** (`search`) - The per-worker search frame and recursive extension
//! - **Workers** (`worker`) - Threads that explore one starting word at a time
//! - **Coordination** (`coordinator`) - Hands out starting words over a rendezvous channel and
//!   multiplexes board and completion events until every word is exhausted
//! - **Output** ([`sink`]) - Where discovered boards go
//! - **Progress Monitoring** ([`progress`]) - Advisory events for user feedback
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! ## Concurrency
//!
//! The trie and the word list are built before the search starts and only borrowed
//! afterwards. Each worker owns its search frame outright. The coordinator and workers share
//! nothing else: they talk exclusively over three channels (assignments, boards,
//! completions), and the coordinator waits on them with a fair multi-way `select!`.
//! There is no cancellation; a search always runs over its whole range.

pub mod config;
pub(crate) mod coordinator;
pub mod error;
pub mod progress;
pub(crate) mod search;
pub mod sink;
#[cfg(test)]
pub(crate) mod test_fixtures;
pub(crate) mod worker;
