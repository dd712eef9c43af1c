//! Core library for heavyword.
//!
//! Computes an approximate-then-exact frequency summary of the most common
//! words in a large text stream using the Misra-Gries heavy-hitters
//! algorithm: a bounded candidate tracker (pass 1) followed by exact
//! re-counting of the survivors (pass 2), without ever holding the full
//! vocabulary in memory.
//!
//! # Modules
//!
//! - [`engine`] - Two-pass orchestration and post-run queries
//! - [`summary`] - The candidate tracker and exact counter
//! - [`report`] - Threshold-based report construction
//! - [`source`] - Resettable line sources (file, in-memory)
//! - [`text`] - Line tokenization
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use heavyword_core::SummaryEngine;
//!
//! let mut engine = SummaryEngine::from_path("corpus.txt").expect("open corpus");
//! engine.run(100).expect("valid summary size");
//!
//! let report = engine.report().expect("run completed");
//! for entry in &report.entries {
//!     println!("{} --> {}", entry.word, entry.count);
//! }
//! ```
#![deny(unsafe_code)]

pub mod config;
mod counts;
pub mod engine;
pub mod error;
pub mod report;
pub mod source;
pub mod summary;
pub mod text;

pub use config::{Config, ConfigLoader, DEFAULT_MIN_WORD_LEN, DEFAULT_SUMMARY_SIZE, LogLevel};

pub use engine::SummaryEngine;

pub use error::{SummaryError, SummaryResult};

pub use report::{ReportEntry, SummaryReport};

pub use source::{FileSource, LineSource, MemorySource};
