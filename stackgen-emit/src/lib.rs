//! # stackgen-emit
//!
//! Atomic writer and generation pipeline.
//!
//! Call [`pipeline::run`] to render and write every configuration in a
//! parameter directory, or [`diff_outputs`] to preview the changes as
//! unified diffs without writing.

pub mod diff;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use diff::{diff_outputs, FileDiff};
pub use error::EmitError;
pub use pipeline::{run, FileReport, GeneratedFile, RunSummary};
pub use writer::WriteResult;
