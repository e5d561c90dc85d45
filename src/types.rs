/// Core data types shared across the search pipeline
use crate::error::JobError;
use std::path::PathBuf;

/// Opaque identifier for one historical snapshot of the repository.
///
/// Produced once by the enumerator and consumed exactly once as job input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitId(String);

impl CommitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Terminal result of one per-commit search job.
///
/// Exactly one variant holds per job: matched lines, a benign empty result,
/// or a captured failure. Failures travel as data, never as raised faults.
#[derive(Debug)]
pub enum JobOutcome {
    /// The commit's tree matched at least one term; lines are verbatim
    /// search output including the commit/file/count metadata git emits.
    Matches(Vec<String>),
    /// No term matched anywhere in the commit's tree
    NoMatch,
    /// The search invocation itself failed
    Failed(JobError),
}

/// One completion message from a worker to the coordinator
#[derive(Debug)]
pub struct JobCompletion {
    /// Commit the job searched
    pub commit: CommitId,
    /// The job's terminal outcome
    pub outcome: JobOutcome,
}

/// Final accounting for a whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of commits enumerated and dispatched
    pub commits_searched: usize,
    /// Commits whose search produced at least one matched line
    pub matched_commits: usize,
    /// Jobs that failed abnormally (including merge failures and timeouts)
    pub failed_jobs: usize,
    /// Total matched-line records now in the result store
    pub result_count: usize,
    /// Location of the result store, present only when result_count > 0
    pub output_path: Option<PathBuf>,
}
