use crate::error::EnumerationError;
use crate::types::CommitId;
use std::path::Path;
use tokio::process::Command;

/// List every commit reachable from any ref in the repository.
///
/// Runs `git rev-list --all` with the repository as working directory and
/// returns one [`CommitId`] per output line. The full history is covered,
/// not just the current branch; no ordering is guaranteed beyond "every
/// commit exactly once". An empty repository yields an empty list.
pub async fn list_all_commits(repo: &Path) -> Result<Vec<CommitId>, EnumerationError> {
    let output = Command::new("git")
        .arg("rev-list")
        .arg("--all")
        .current_dir(repo)
        .output()
        .await
        .map_err(|e| EnumerationError::Spawn(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(EnumerationError::CommandFailed {
            code: output.status.code(),
            stderr,
        });
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| EnumerationError::InvalidUtf8)?;

    let commits: Vec<CommitId> = stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(CommitId::new)
        .collect();

    tracing::info!("Enumerated {} commits in {}", commits.len(), repo.display());
    Ok(commits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_commits_not_a_repo() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = list_all_commits(dir.path()).await.unwrap_err();
        assert!(matches!(err, EnumerationError::CommandFailed { .. }));
    }

    #[tokio::test]
    async fn test_list_commits_missing_directory() {
        let err = list_all_commits(Path::new("/nonexistent/repo"))
            .await
            .unwrap_err();
        // Spawning fails because the working directory does not exist
        assert!(matches!(err, EnumerationError::Spawn(_)));
    }
}
