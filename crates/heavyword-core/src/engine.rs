//! Engine orchestrating the two passes over a line source.

use camino::Utf8Path;
use tracing::{debug, error};

use crate::config::DEFAULT_MIN_WORD_LEN;
use crate::error::{SummaryError, SummaryResult};
use crate::report::{self, SummaryReport};
use crate::source::{FileSource, LineSource};
use crate::summary::{CandidateSet, CandidateTracker, ExactCounter, ExactCounts};
use crate::text;

/// Frozen results of a successful run.
#[derive(Debug)]
struct Completed {
    candidates: CandidateSet,
    exact: ExactCounts,
    k: u64,
}

/// Two-pass Misra-Gries frequency summarizer over a resettable line source.
///
/// The engine is constructed over a validated source, runs both passes via
/// [`run`](Self::run), and then answers post-run queries. Queries before a
/// successful run fail with [`SummaryError::NotReady`].
#[derive(Debug)]
pub struct SummaryEngine<S: LineSource> {
    source: S,
    min_word_len: usize,
    completed: Option<Completed>,
}

impl SummaryEngine<FileSource> {
    /// Construct an engine over a file, validating the path up front.
    pub fn from_path(path: impl AsRef<Utf8Path>) -> SummaryResult<Self> {
        Ok(Self::new(FileSource::open(path)?))
    }
}

impl<S: LineSource> SummaryEngine<S> {
    /// Construct an engine over an already-validated source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            min_word_len: DEFAULT_MIN_WORD_LEN,
            completed: None,
        }
    }

    /// Set the minimum word length for the token filter (default 2).
    #[must_use]
    pub fn with_min_word_len(mut self, min_word_len: usize) -> Self {
        self.min_word_len = min_word_len;
        self
    }

    /// Run both passes with summary size `k`.
    ///
    /// Fails with [`SummaryError::InvalidArgument`] when `k < 1`. A read
    /// failure mid-pass is logged and abandons the run without an error;
    /// the engine stays incomplete, so subsequent queries report
    /// [`SummaryError::NotReady`]. Each pass traverses a fresh line
    /// iterator, whose handle is released when the pass ends.
    #[tracing::instrument(skip(self), fields(locator = self.source.locator()))]
    pub fn run(&mut self, k: u64) -> SummaryResult<()> {
        if k < 1 {
            return Err(SummaryError::InvalidArgument(format!(
                "summary size must be >= 1, got {k}"
            )));
        }
        self.completed = None;

        let candidates = match self.first_pass(k) {
            Ok(candidates) => candidates,
            Err(err) => {
                error!(error = %err, "pass 1 aborted");
                return Ok(());
            }
        };
        let exact = match self.second_pass(&candidates) {
            Ok(exact) => exact,
            Err(err) => {
                error!(error = %err, "pass 2 aborted");
                return Ok(());
            }
        };

        debug!(k, candidates = candidates.len(), "run complete");
        self.completed = Some(Completed {
            candidates,
            exact,
            k,
        });
        Ok(())
    }

    /// Total tokens that passed the length filter in pass 1.
    pub fn filtered_word_count(&self) -> SummaryResult<u64> {
        self.completed()
            .map(|state| state.candidates.filtered_count())
    }

    /// Number of candidate words that survived pass 1.
    pub fn candidate_count(&self) -> SummaryResult<usize> {
        self.completed().map(|state| state.candidates.len())
    }

    /// Build the thresholded frequency report.
    pub fn report(&self) -> SummaryResult<SummaryReport> {
        self.completed().map(|state| {
            report::build_report(&state.exact, state.candidates.filtered_count(), state.k)
        })
    }

    fn completed(&self) -> SummaryResult<&Completed> {
        self.completed.as_ref().ok_or(SummaryError::NotReady)
    }

    fn first_pass(&self, k: u64) -> SummaryResult<CandidateSet> {
        let mut tracker = CandidateTracker::new(k, self.min_word_len);
        self.traverse(|word| tracker.observe(word))?;
        Ok(tracker.finish())
    }

    fn second_pass(&self, candidates: &CandidateSet) -> SummaryResult<ExactCounts> {
        let mut counter = ExactCounter::new(candidates, self.min_word_len);
        self.traverse(|word| counter.observe(word))?;
        Ok(counter.finish())
    }

    /// Feed every token of a fresh traversal to `observe`.
    fn traverse(&self, mut observe: impl FnMut(&str)) -> SummaryResult<()> {
        for line in self.source.lines()? {
            let line = line.map_err(|source| SummaryError::SourceUnavailable {
                locator: self.source.locator().to_string(),
                source,
            })?;
            for word in text::tokenize_line(&line) {
                observe(&word);
            }
        }
        Ok(())
    }
}
