//! Persistence for completed job applications.
//!
//! Each submission is written as its own JSON file under the configured
//! submissions directory. No transport is involved; the directory is the
//! hand-off point.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Submission;

/// Writes submission records to a directory.
#[derive(Debug, Clone)]
pub struct SubmissionStore {
    dir: PathBuf,
}

impl SubmissionStore {
    /// Creates a store rooted at `dir`. The directory is created lazily on
    /// first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory records are written to.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes one submission and returns the path of the record file.
    pub fn write(&self, submission: &Submission) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!(
                "Failed to create submissions directory: {}",
                self.dir.display()
            )
        })?;

        let file_name = format!(
            "{}-{}.json",
            submission.submitted_at.format("%Y%m%d-%H%M%S"),
            submission.id
        );
        let path = self.dir.join(file_name);

        let json =
            serde_json::to_string_pretty(submission).context("Failed to serialize submission")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write submission: {}", path.display()))?;

        tracing::info!(path = %path.display(), "application submitted");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_write_creates_dir_and_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = SubmissionStore::new(dir.path().join("submissions"));

        let mut values = BTreeMap::new();
        values.insert("name".to_string(), "Sam Park".to_string());
        values.insert(
            "skills".to_string(),
            "Cost estimating; Site management".to_string(),
        );
        let submission = Submission::new(values);

        let path = store.write(&submission).unwrap();
        assert!(path.exists());

        let loaded: Submission =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, submission);
    }

    #[test]
    fn test_two_submissions_get_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = SubmissionStore::new(dir.path());

        let a = store.write(&Submission::new(BTreeMap::new())).unwrap();
        let b = store.write(&Submission::new(BTreeMap::new())).unwrap();
        assert_ne!(a, b);
    }
}
