//! # Core Module
//!
//! Data structures that are built once before a search starts and are only read afterwards.
//!
//! - **Prefix lookup** ([`trie`]) - The letter trie used to prune partial rows and columns
//! - **Boards** ([`board`]) - Completed word squares and the distinct-words filter
//! - **Dictionary I/O** ([`io`]) - Loading, filtering and indexing fixed-length word lists

pub mod board;
pub mod io;
pub mod trie;
