//! # git-history-search - Parallel Full-History Git Search
//!
//! Searches every commit of a git repository's reachable history for one or
//! more textual terms and merges the matches into a single durable JSON
//! result store.
//!
//! ## Architecture
//!
//! ```text
//! rev-list ──> dispatcher ──> worker pool (git grep per commit)
//!                                  │
//!                         completion channel
//!                                  │
//!                          coordinator ──> ResultStore ──> reporter
//! ```
//!
//! One tokio task runs per commit, capped by a semaphore sized to the host's
//! parallelism. Each task sends exactly one outcome (matches, benign
//! no-match, or captured failure) over an mpsc channel; the single-threaded
//! coordinator merges outcomes sequentially into the store, so one corrupt
//! or slow commit never takes the rest of the run down with it.
//!
//! ## Usage Example
//!
//! ```no_run
//! use git_history_search::{config::Config, report, runner};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let summary = runner::run(&config, Path::new("."), &["TODO".to_string()]).await?;
//!     report::print_summary(&summary);
//!     Ok(())
//! }
//! ```

/// Run configuration (pool size, per-job timeout, output location)
pub mod config;

/// Error types and the per-job failure taxonomy
pub mod error;

/// Git collaborator invocations (`rev-list`, `grep`)
pub mod git;

/// Final operator summary output
pub mod report;

/// Job dispatch, completion handling, and result merging
pub mod runner;

/// Durable run-scoped result store
pub mod store;

/// Core data types (commit ids, job outcomes, run summary)
pub mod types;
