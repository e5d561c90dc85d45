/// Centralized error types for git-history-search using thiserror
///
/// Job-local failures are data (`JobError`), captured by the worker that hit
/// them and classified by the coordinator; only validation and configuration
/// problems abort a run before any job is dispatched.
use thiserror::Error;

/// Top-level error type for a search run
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Other(String),
}

// Conversion from anyhow::Error for orchestration seams that use Context
impl From<anyhow::Error> for SearchError {
    fn from(err: anyhow::Error) -> Self {
        SearchError::Other(format!("{:#}", err))
    }
}

/// Errors related to input validation
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Repository path does not exist: {0}")]
    RepoNotFound(String),

    #[error("No usable search terms provided (terms must be non-blank)")]
    NoSearchTerms,
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {0}")]
    LoadFailed(String),

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    #[error("Invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Failure to list the repository's commits.
///
/// Reported and then treated as an empty commit set; an enumeration failure
/// never crashes the run.
#[derive(Error, Debug)]
pub enum EnumerationError {
    #[error("Failed to run commit listing command: {0}")]
    Spawn(String),

    #[error("Commit listing exited with {code:?}: {stderr}")]
    CommandFailed { code: Option<i32>, stderr: String },

    #[error("Commit listing produced non-UTF-8 output")]
    InvalidUtf8,
}

/// A single job's captured failure.
///
/// Never raised across the job boundary; returned inside the job's outcome
/// and reported by the coordinator. A "no matches" exit from the search
/// command is not represented here at all - that is a benign outcome.
#[derive(Error, Debug)]
pub enum JobError {
    #[error("Failed to run search command: {0}")]
    Spawn(String),

    #[error("Search command exited with {code:?}: {stderr}")]
    CommandFailed { code: Option<i32>, stderr: String },

    #[error("Search command produced non-UTF-8 output")]
    InvalidUtf8,

    #[error("Search timed out after {0} seconds")]
    TimedOut(u64),

    #[error("Failed to merge results: {0}")]
    MergeFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = SearchError::Validation(ValidationError::RepoNotFound("/missing".to_string()));
        assert_eq!(
            err.to_string(),
            "Validation error: Repository path does not exist: /missing"
        );
    }

    #[test]
    fn test_enumeration_error_display() {
        let err = EnumerationError::CommandFailed {
            code: Some(128),
            stderr: "fatal: not a git repository".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Commit listing exited with Some(128): fatal: not a git repository"
        );
    }

    #[test]
    fn test_job_error_timeout_display() {
        let err = JobError::TimedOut(300);
        assert_eq!(err.to_string(), "Search timed out after 300 seconds");
    }

    #[test]
    fn test_config_error_invalid_value() {
        let err = ConfigError::InvalidValue {
            key: "pool_size".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for 'pool_size': must be at least 1"
        );
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: SearchError = anyhow::anyhow!("merge went sideways").into();
        assert!(matches!(err, SearchError::Other(_)));
        assert_eq!(err.to_string(), "merge went sideways");
    }
}
