use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Run-scoped durable store of matched-line records.
///
/// Exactly one store exists per run, touched only by the single-threaded
/// coordinator, so it never sees concurrent writers. Each merge appends the
/// new records in memory and rewrites the whole file as a pretty-printed
/// JSON array (load-merge-persist, per the store's external contract).
#[derive(Debug)]
pub struct ResultStore {
    path: PathBuf,
    records: Vec<String>,
}

impl ResultStore {
    /// Create a fresh store, deleting any file a previous run left behind.
    ///
    /// A run never reads or extends a prior run's store.
    pub fn create(path: PathBuf) -> Result<Self> {
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to delete stale result store {}", path.display()))?;
            tracing::debug!("Deleted stale result store at {}", path.display());
        }

        Ok(Self {
            path,
            records: Vec::new(),
        })
    }

    /// Merge one job's matched records and persist the whole store.
    ///
    /// Returns the number of records merged.
    pub fn merge(&mut self, records: Vec<String>) -> Result<usize> {
        let merged = records.len();
        let prior_len = self.records.len();
        self.records.extend(records);

        if let Err(e) = self.persist() {
            // Keep memory consistent with disk: a merge that could not be
            // persisted contributes nothing
            self.records.truncate(prior_len);
            return Err(e);
        }
        tracing::debug!(
            "Merged {} records into result store ({} total)",
            merged,
            self.records.len()
        );
        Ok(merged)
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).context("Failed to create result store directory")?;
        }

        let content = serde_json::to_string_pretty(&self.records)
            .context("Failed to serialize result store")?;

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write result store {}", self.path.display()))?;

        Ok(())
    }

    /// Total matched-line records merged so far
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Location of the durable store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a persisted store back from disk
    pub fn load(path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read result store {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse result store")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_deletes_stale_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, "[\"old run\"]").unwrap();

        let store = ResultStore::create(path.clone()).unwrap();
        assert!(store.is_empty());
        assert!(!path.exists(), "Stale store file should be deleted");
    }

    #[test]
    fn test_merge_persists_pretty_json_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.json");

        let mut store = ResultStore::create(path.clone()).unwrap();
        let merged = store
            .merge(vec!["a:file.rs:1".to_string(), "a:other.rs:2".to_string()])
            .unwrap();

        assert_eq!(merged, 2);
        assert_eq!(store.len(), 2);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains('\n'), "Store should be pretty-printed");

        let loaded = ResultStore::load(&path).unwrap();
        assert_eq!(loaded, vec!["a:file.rs:1", "a:other.rs:2"]);
    }

    #[test]
    fn test_merges_accumulate_across_jobs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.json");

        let mut store = ResultStore::create(path.clone()).unwrap();
        store.merge(vec!["first:f:1".to_string()]).unwrap();
        store.merge(vec!["second:g:3".to_string()]).unwrap();

        // Each merge rewrites the whole file with everything merged so far
        let loaded = ResultStore::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_no_merge_means_no_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.json");

        let store = ResultStore::create(path.clone()).unwrap();
        assert!(store.is_empty());
        assert!(!path.exists(), "An untouched store writes nothing");
    }

    #[test]
    fn test_merge_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out/results.json");

        let mut store = ResultStore::create(path.clone()).unwrap();
        store.merge(vec!["c:f:1".to_string()]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_failed_persist_rolls_back_merge() {
        let dir = TempDir::new().unwrap();
        // A plain file where the store's parent directory should go makes
        // every persist fail
        fs::write(dir.path().join("blocker"), "in the way").unwrap();
        let path = dir.path().join("blocker/results.json");

        let mut store = ResultStore::create(path).unwrap();
        assert!(store.merge(vec!["c:f:1".to_string()]).is_err());
        assert!(store.is_empty(), "an unpersisted merge contributes nothing");
    }

    #[test]
    fn test_load_missing_store() {
        assert!(ResultStore::load(Path::new("/nonexistent/results.json")).is_err());
    }
}
