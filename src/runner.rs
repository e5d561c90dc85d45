//! Job dispatch and completion handling
//!
//! One tokio task is spawned per commit; a shared semaphore caps how many
//! `git grep` invocations run at once. Every task pushes exactly one
//! completion message into an mpsc channel, and the coordinator receives
//! them in arrival order, merging results sequentially into the store. No
//! job failure ever crosses the channel as a raised fault.

use crate::config::Config;
use crate::error::{JobError, SearchError, ValidationError};
use crate::git;
use crate::store::ResultStore;
use crate::types::{CommitId, JobCompletion, JobOutcome, RunSummary};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Semaphore, mpsc};

/// Check the run's inputs and return the usable term set.
///
/// Blank terms are filtered out; the remaining terms are passed to git
/// verbatim. The repository must exist and at least one usable term remain.
pub fn validate_inputs(repo: &Path, terms: &[String]) -> Result<Vec<String>, ValidationError> {
    if !repo.exists() {
        return Err(ValidationError::RepoNotFound(repo.display().to_string()));
    }

    let usable: Vec<String> = terms
        .iter()
        .filter(|term| !term.trim().is_empty())
        .cloned()
        .collect();

    if usable.is_empty() {
        return Err(ValidationError::NoSearchTerms);
    }

    Ok(usable)
}

/// Search every commit in the repository's history for the given terms.
///
/// Enumerates the full reachable history, dispatches one search job per
/// commit under the configured concurrency cap, and merges completed jobs'
/// matches into a fresh result store at `config.output_path`. Per-job
/// failures (bad objects, timeouts, merge I/O) are reported and counted but
/// never abort the run; an enumeration failure degrades to a zero-job run.
pub async fn run(
    config: &Config,
    repo: &Path,
    terms: &[String],
) -> Result<RunSummary, SearchError> {
    let terms = validate_inputs(repo, terms)?;
    config.validate()?;

    let mut store = ResultStore::create(config.output_path.clone())?;

    let commits = match git::list_all_commits(repo).await {
        Ok(commits) => commits,
        Err(e) => {
            tracing::error!("Failed to enumerate commits: {}", e);
            Vec::new()
        }
    };

    let total = commits.len();
    tracing::info!(
        "Dispatching {} search jobs across {} workers",
        total,
        config.pool_size
    );

    let semaphore = Arc::new(Semaphore::new(config.pool_size));
    let (tx, mut rx) = mpsc::channel::<JobCompletion>(config.pool_size.max(1));
    let repo: Arc<PathBuf> = Arc::new(repo.to_path_buf());
    let terms = Arc::new(terms);
    let deadline = Duration::from_secs(config.job_timeout_secs);

    for commit in commits {
        let tx = tx.clone();
        let semaphore = Arc::clone(&semaphore);
        let repo = Arc::clone(&repo);
        let terms = Arc::clone(&terms);

        tokio::spawn(async move {
            let outcome = search_commit(&semaphore, &repo, &commit, &terms, deadline).await;
            // The receiver outlives every sender unless the coordinator is
            // already gone, in which case there is nowhere to report to
            let _ = tx.send(JobCompletion { commit, outcome }).await;
        });
    }
    drop(tx);

    let mut completed = 0usize;
    let mut matched_commits = 0usize;
    let mut failed_jobs = 0usize;

    while let Some(completion) = rx.recv().await {
        completed += 1;
        match completion.outcome {
            JobOutcome::Matches(lines) => match store.merge(lines) {
                Ok(_) => matched_commits += 1,
                Err(e) => {
                    // Only this job's contribution is lost; prior merges
                    // are already persisted
                    let err = JobError::MergeFailed(format!("{:#}", e));
                    tracing::error!("Commit {}: {}", completion.commit, err);
                    failed_jobs += 1;
                }
            },
            JobOutcome::NoMatch => {}
            JobOutcome::Failed(err) => {
                tracing::warn!("Search of commit {} failed: {}", completion.commit, err);
                failed_jobs += 1;
            }
        }

        if completed % 50 == 0 {
            tracing::info!(
                "Completed {}/{} jobs ({} outstanding)",
                completed,
                total,
                total - completed
            );
        }
    }

    debug_assert_eq!(completed, total, "every dispatched job completes exactly once");

    let summary = RunSummary {
        commits_searched: total,
        matched_commits,
        failed_jobs,
        result_count: store.len(),
        output_path: (!store.is_empty()).then(|| store.path().to_path_buf()),
    };

    tracing::info!(
        "Run complete: {} commits searched, {} matched, {} failed, {} records stored",
        summary.commits_searched,
        summary.matched_commits,
        summary.failed_jobs,
        summary.result_count
    );

    Ok(summary)
}

/// One worker's job body: wait for a pool slot, then search one commit.
///
/// Always produces a terminal outcome; failures and timeouts are captured
/// as data so a bad commit cannot take sibling jobs down with it.
async fn search_commit(
    semaphore: &Semaphore,
    repo: &Path,
    commit: &CommitId,
    terms: &[String],
    deadline: Duration,
) -> JobOutcome {
    let _permit = match semaphore.acquire().await {
        Ok(permit) => permit,
        Err(_) => return JobOutcome::Failed(JobError::Spawn("worker pool closed".to_string())),
    };

    grep_with_deadline(deadline, git::grep_commit(repo, commit, terms)).await
}

/// Fold a search invocation's result into a terminal outcome, enforcing the
/// per-job deadline. Expiry is a captured failure like any other.
async fn grep_with_deadline<F>(deadline: Duration, search: F) -> JobOutcome
where
    F: Future<Output = Result<Vec<String>, JobError>>,
{
    match tokio::time::timeout(deadline, search).await {
        Ok(Ok(lines)) if lines.is_empty() => JobOutcome::NoMatch,
        Ok(Ok(lines)) => JobOutcome::Matches(lines),
        Ok(Err(err)) => JobOutcome::Failed(err),
        Err(_) => JobOutcome::Failed(JobError::TimedOut(deadline.as_secs())),
    }
}
