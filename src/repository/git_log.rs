use anyhow::{Context, Result};
use git2::{Repository, Signature, Sort};
use std::path::{Path, PathBuf};
use time::{OffsetDateTime, UtcOffset};

use crate::model::Commit;
use super::CommitSource;

/// Commit source backed by a local git repository
pub struct GitLog {
    repo: Repository,
    repo_path: PathBuf,
}

impl GitLog {
    /// Open the repository containing `path` (subdirectories of a work tree are fine)
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path)
            .with_context(|| format!("Failed to open git repository at {}", path.display()))?;
        let repo_path = repo
            .workdir()
            .unwrap_or_else(|| repo.path())
            .to_path_buf();

        tracing::debug!(path = %repo_path.display(), "opened repository");
        Ok(Self { repo, repo_path })
    }

    pub fn path(&self) -> &Path {
        &self.repo_path
    }
}

impl CommitSource for GitLog {
    fn commits_by(&self, author: &str, all_branches: bool) -> Result<Vec<Commit>> {
        let mut revwalk = self.repo.revwalk().context("Failed to create revwalk")?;
        revwalk.set_sorting(Sort::TIME)?;

        if all_branches {
            revwalk.push_glob("*").context("Failed to walk refs")?;
            // An unborn HEAD is fine here as long as some ref exists
            if let Err(e) = revwalk.push_head() {
                tracing::debug!("skipping HEAD: {}", e.message());
            }
        } else {
            revwalk
                .push_head()
                .context("Failed to resolve HEAD (does the repository have any commits?)")?;
        }

        let mut commits = Vec::new();
        let mut scanned = 0usize;
        for oid in revwalk {
            let oid = oid.context("Failed to walk history")?;
            let commit = self
                .repo
                .find_commit(oid)
                .with_context(|| format!("Failed to load commit {}", oid))?;
            scanned += 1;

            let signature = commit.author();
            if !authored_by(&signature, author) {
                continue;
            }
            commits.push(Commit {
                author: String::from_utf8_lossy(signature.name_bytes()).into_owned(),
                timestamp: signature_time(&signature)?,
            });
        }

        tracing::debug!(
            author,
            all_branches,
            scanned,
            matched = commits.len(),
            "collected commits"
        );
        Ok(commits)
    }
}

/// Exact match against either the author's name or email
fn authored_by(signature: &Signature<'_>, author: &str) -> bool {
    signature.name() == Some(author) || signature.email() == Some(author)
}

/// Author time of a signature, keeping its recorded UTC offset
fn signature_time(signature: &Signature<'_>) -> Result<OffsetDateTime> {
    let when = signature.when();
    let offset = UtcOffset::from_whole_seconds(when.offset_minutes() * 60)
        .context("Commit carries an out-of-range UTC offset")?;
    let timestamp = OffsetDateTime::from_unix_timestamp(when.seconds())
        .context("Commit carries an out-of-range timestamp")?;
    Ok(timestamp.to_offset(offset))
}
