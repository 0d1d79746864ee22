mod git_log;

use anyhow::Result;

use crate::model::Commit;

pub use git_log::GitLog;

/// Anything that can list the commits attributed to an author.
///
/// Commits come back in log order, newest first.
pub trait CommitSource {
    fn commits_by(&self, author: &str, all_branches: bool) -> Result<Vec<Commit>>;
}
