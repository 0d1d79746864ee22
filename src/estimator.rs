//! Session estimation over a single author's commit log.
//!
//! Commits are walked in the order the log delivered them. Consecutive commits
//! closer than the configured gap belong to one session and the gap between them
//! is credited as work; a larger gap opens a new session, which is only credited
//! the fixed session-begin padding.

use time::Duration;

use crate::model::{AggregateResult, Commit, Parameters, SessionResult};

/// Estimate time spent from one author's commits.
///
/// Returns `None` for an empty log so callers can skip the author entirely.
pub fn estimate(commits: &[Commit], params: &Parameters) -> Option<SessionResult> {
    let first = commits.first()?;
    let last = commits.last()?;

    let max_gap = params.max_gap();
    let padding = params.session_begin();

    // The first commit in the sequence opens the first session
    let mut total_time = padding;
    let mut sessions: u64 = 1;
    let mut previous = first.timestamp;

    for commit in &commits[1..] {
        let diff = (previous - commit.timestamp).abs();
        if diff < max_gap {
            total_time += diff;
        } else {
            total_time += padding;
            sessions += 1;
        }
        previous = commit.timestamp;
    }

    Some(SessionResult {
        total_time,
        commit_count: commits.len() as u64,
        sessions,
        first_commit: last.timestamp,
        last_commit: first.timestamp,
    })
}

/// Sum per-author results into a combined total
pub fn aggregate<'a, I>(results: I) -> AggregateResult
where
    I: IntoIterator<Item = &'a SessionResult>,
{
    results
        .into_iter()
        .fold(AggregateResult::default(), |acc, r| AggregateResult {
            total_time: acc.total_time + r.total_time,
            commit_count: acc.commit_count + r.commit_count,
            sessions: acc.sessions + r.sessions,
        })
}

/// Whole seconds of a duration, clamped at zero
pub fn whole_seconds(duration: Duration) -> u64 {
    duration.whole_seconds().max(0) as u64
}
