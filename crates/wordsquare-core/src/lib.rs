//! # Word Square Core Library
//!
//! Enumerates every word square of a given size: square grids of lowercase letters in which
//! each row (read left to right) and each column (read top to bottom) is a dictionary word.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that the search itself stays free of
//! I/O, argument parsing and formatting concerns.
//!
//! - **[`core`]: The Foundation.** Immutable data structures shared by every search: the
//!   prefix [`Trie`](core::trie::Trie), the [`Board`](core::board::Board) value type with its
//!   uniqueness filter, and dictionary loading utilities.
//!
//! - **[`engine`]: The Logic Core.** The backtracking search over a per-worker search frame,
//!   the worker loop, and the coordinator that hands out starting words and multiplexes
//!   board and completion events over channels.
//!
//! - **[`workflows`]: The Public API.** Validates caller input and drives the engine to
//!   completion, streaming boards into a caller-supplied [`BoardSink`](engine::sink::BoardSink)
//!   or collecting them into a `Vec`.

pub mod core;
pub mod engine;
pub mod workflows;
