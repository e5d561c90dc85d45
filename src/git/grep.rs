use crate::error::JobError;
use crate::types::CommitId;
use std::path::Path;
use tokio::process::Command;

/// Build the argument list for searching one commit's tree.
///
/// Terms are OR-combined and matched case-insensitively; `--count` keeps the
/// output to one record per matching file, and a single grep thread avoids
/// oversubscribing the host on top of the job pool.
fn grep_args(terms: &[String], commit: &CommitId) -> Vec<String> {
    let mut args = vec![
        "grep".to_string(),
        "--text".to_string(),
        "--ignore-case".to_string(),
        "--count".to_string(),
        "--threads".to_string(),
        "1".to_string(),
    ];

    for (idx, term) in terms.iter().enumerate() {
        args.push("-e".to_string());
        args.push(term.clone());
        if idx != terms.len() - 1 {
            args.push("--or".to_string());
        }
    }

    args.push(commit.as_str().to_string());
    args
}

/// Search one commit's tree for any of the given terms.
///
/// Returns the matched records verbatim (`<commit>:<file>:<count>` lines as
/// git emits them); an empty vec means the benign "no matches anywhere"
/// outcome. Classification is structural, on git grep's documented exit
/// status: 0 means matches, 1 means no matches, anything else (including a
/// spawn failure) is a genuine [`JobError`].
pub async fn grep_commit(
    repo: &Path,
    commit: &CommitId,
    terms: &[String],
) -> Result<Vec<String>, JobError> {
    let output = Command::new("git")
        .args(grep_args(terms, commit))
        .current_dir(repo)
        .output()
        .await
        .map_err(|e| JobError::Spawn(e.to_string()))?;

    match output.status.code() {
        Some(0) => {
            let stdout = String::from_utf8(output.stdout).map_err(|_| JobError::InvalidUtf8)?;
            Ok(stdout.lines().map(|line| line.to_string()).collect())
        }
        // Exit 1 is git grep's "no matches" signal, not a failure
        Some(1) => Ok(Vec::new()),
        code => {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(JobError::CommandFailed {
                code,
                stderr,
            })
        }
    }
}
