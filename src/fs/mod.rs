//! Filesystem utilities for qbgen.
//!
//! Generated files are written atomically so an interrupted run never leaves
//! a truncated `question.html` or `info.json` behind.

pub mod atomic;

pub use atomic::atomic_write_file;
