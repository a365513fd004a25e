//! Saving drafts to disk
//!
//! Drafts live outside the project, grouped by project and date:
//! `<root>/<project> - PR/<DD-MM-YYYY>/PR_<hash7>.md`

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::Result;

/// File stem used when the commit hash is unavailable
const UNKNOWN_COMMIT: &str = "unknown";

/// Where a single draft is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocation {
    pub root: PathBuf,
    pub project_name: String,
    pub date: NaiveDate,
    pub short_commit: Option<String>,
}

impl OutputLocation {
    pub fn new(
        root: impl Into<PathBuf>,
        project_name: impl Into<String>,
        date: NaiveDate,
        short_commit: Option<&str>,
    ) -> Self {
        Self {
            root: root.into(),
            project_name: project_name.into(),
            date,
            short_commit: short_commit.map(str::to_string),
        }
    }

    /// Folder holding all drafts of one day
    pub fn dir(&self) -> PathBuf {
        self.root
            .join(format!("{} - PR", self.project_name))
            .join(self.date.format("%d-%m-%Y").to_string())
    }

    /// Full path of the draft file
    pub fn file_path(&self) -> PathBuf {
        let stem = self.short_commit.as_deref().unwrap_or(UNKNOWN_COMMIT);
        self.dir().join(format!("PR_{}.md", stem))
    }

    /// Create the folder if needed and write the document, overwriting any
    /// previous draft for the same commit
    pub fn write(&self, document: &str) -> Result<PathBuf> {
        fs::create_dir_all(self.dir())?;

        let path = self.file_path();
        fs::write(&path, document)?;
        tracing::debug!("Wrote {} bytes to {}", document.len(), path.display());

        Ok(path)
    }
}

/// Name of a project folder, used to namespace its drafts
pub fn project_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string())
}
