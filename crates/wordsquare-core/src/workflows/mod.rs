//! # Workflows Module
//!
//! Top-level entry points for library users.
//!
//! A workflow checks the caller's input against the engine's preconditions, then drives the
//! engine to completion:
//!
//! - **Search Workflow** ([`search`]) - Enumerate every word square whose first row lies in a
//!   range of a sorted dictionary, either streaming boards into a sink or collecting them.

pub mod search;
