//! Local git repository queries
//!
//! This module provides a read-only wrapper around git2 for the metadata a
//! draft is built from:
//! - Recent commit summaries and bodies
//! - Diff statistics over the last N commits
//! - Current branch name and HEAD commit hash
//!
//! Individual queries never fail the run. Errors are logged and an empty
//! value is returned so the draft can still be generated.

use std::path::Path;

use git2::{DiffOptions, DiffStatsFormat, Repository};

use crate::error::{PrDraftError, Result};

/// A single commit message split into summary and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub summary: String,
    pub body: String,
}

impl CommitSummary {
    /// Split a raw commit message into its first line and the rest
    pub fn from_message(message: &str) -> Self {
        let mut lines = message.lines();
        let summary = lines.next().unwrap_or("").trim().to_string();
        let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();
        Self { summary, body }
    }
}

/// Read-only view of the version-control metadata
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl {
    /// Last `count` commits, newest first
    fn recent_commits(&self, count: usize) -> Vec<CommitSummary>;

    /// Diff statistics between `HEAD~count` and `HEAD`
    fn diff_stats(&self, count: usize) -> String;

    /// Current branch name
    fn branch_name(&self) -> String;

    /// Full HEAD commit hash
    fn head_commit_id(&self) -> String;
}

/// Everything a draft is generated from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitBatch {
    pub count: usize,
    pub commits: Vec<CommitSummary>,
    pub diff_stats: String,
    pub branch: String,
    pub commit_id: String,
}

impl CommitBatch {
    /// Query all metadata for the last `count` commits
    pub fn collect(vcs: &dyn VersionControl, count: usize) -> Self {
        Self {
            count,
            commits: vcs.recent_commits(count),
            diff_stats: vcs.diff_stats(count),
            branch: vcs.branch_name(),
            commit_id: vcs.head_commit_id(),
        }
    }

    /// Render commits as `- summary` with the body indented below
    pub fn render_log(&self) -> String {
        let mut log = String::new();
        for commit in &self.commits {
            log.push_str(&format!("- {}\n", commit.summary));
            if !commit.body.is_empty() {
                for line in commit.body.lines() {
                    log.push_str(&format!("  {}\n", line));
                }
            }
            log.push('\n');
        }
        log.trim_end().to_string()
    }

    /// First 7 characters of the HEAD commit hash
    pub fn short_id(&self) -> Option<&str> {
        if self.commit_id.is_empty() {
            None
        } else {
            Some(&self.commit_id[..self.commit_id.len().min(7)])
        }
    }
}

/// Wrapper for local git repository operations
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Discover a git repository from the given path
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|_| PrDraftError::NotGitRepository)?;
        Ok(Self { repo })
    }

    /// Get the current branch name
    pub fn current_branch(&self) -> Result<String> {
        match self.repo.head() {
            Ok(head) => {
                if head.is_branch() {
                    Ok(head.shorthand().unwrap_or("HEAD").to_string())
                } else {
                    // Detached HEAD state
                    Ok("HEAD".to_string())
                }
            }
            Err(e) => {
                // Handle unborn HEAD (no commits yet)
                if e.code() == git2::ErrorCode::UnbornBranch {
                    if let Ok(config) = self.repo.config() {
                        if let Ok(branch) = config.get_string("init.defaultBranch") {
                            return Ok(branch);
                        }
                    }
                    Ok("main".to_string())
                } else {
                    Err(e.into())
                }
            }
        }
    }

    /// Walk history from HEAD and collect up to `count` commit messages
    pub fn commit_messages(&self, count: usize) -> Result<Vec<CommitSummary>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;

        let mut commits = Vec::with_capacity(count);
        for oid in revwalk.take(count) {
            let commit = self.repo.find_commit(oid?)?;
            let message = String::from_utf8_lossy(commit.message_bytes());
            commits.push(CommitSummary::from_message(&message));
        }

        Ok(commits)
    }

    /// Diff statistics between `HEAD~count` and `HEAD`
    ///
    /// When history is shorter than `count`, the diff is taken against the
    /// empty tree so the root commit's files are still reported.
    pub fn stats_since(&self, count: usize) -> Result<String> {
        let head_commit = self.repo.head()?.peel_to_commit()?;
        let head_tree = head_commit.tree()?;

        let base_tree = match self.repo.revparse_single(&format!("HEAD~{}", count)) {
            Ok(obj) => Some(obj.peel_to_commit()?.tree()?),
            Err(_) => None,
        };

        let diff = self.repo.diff_tree_to_tree(
            base_tree.as_ref(),
            Some(&head_tree),
            Some(&mut DiffOptions::new()),
        )?;

        let stats = diff.stats()?;
        let buf = stats.to_buf(DiffStatsFormat::FULL, 80)?;

        Ok(String::from_utf8_lossy(&buf).trim_end().to_string())
    }

    /// Full hash of the HEAD commit
    pub fn head_id(&self) -> Result<String> {
        Ok(self.repo.head()?.peel_to_commit()?.id().to_string())
    }
}

/// Log a failed query and fall back to the type's empty value
fn tolerate<T: Default>(query: &str, result: Result<T>) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!("git {} failed: {}", query, e);
        T::default()
    })
}

impl VersionControl for GitRepository {
    fn recent_commits(&self, count: usize) -> Vec<CommitSummary> {
        tolerate("log", self.commit_messages(count))
    }

    fn diff_stats(&self, count: usize) -> String {
        tolerate("diff --stat", self.stats_since(count))
    }

    fn branch_name(&self) -> String {
        tolerate("branch", self.current_branch())
    }

    fn head_commit_id(&self) -> String {
        tolerate("rev-parse", self.head_id())
    }
}
