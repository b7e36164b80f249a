//! Reading dictionaries from disk.
//!
//! The search engine never touches the filesystem; this module turns a raw word list into
//! the sorted, fixed-length, lowercase slice the engine expects, and maps user-supplied
//! words onto indices of that slice.

pub mod word_list;
