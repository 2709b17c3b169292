//! Shared library surface of the `posview` binary: logging bootstrap and
//! terminal rendering. Argument parsing and command dispatch live in the
//! binary itself.

pub mod logging;
pub mod render;
