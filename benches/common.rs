// Shared benchmark helpers
#![allow(dead_code)]

use git_spend::model::Commit;
use time::{Duration, OffsetDateTime};

/// Generate a newest-first log of `count` commits.
///
/// Every `session_len` commits a gap longer than the default threshold is inserted.
pub fn generate_log(count: usize, session_len: usize) -> Vec<Commit> {
    let start = OffsetDateTime::from_unix_timestamp(1_600_000_000).unwrap();
    let mut at = start;
    let mut commits = Vec::with_capacity(count);

    for i in 0..count {
        let step = if i > 0 && i % session_len == 0 {
            Duration::hours(20)
        } else {
            Duration::minutes(((i % 7) as i64 + 1) * 5)
        };
        at += step;
        commits.push(Commit::new("bench", at));
    }

    commits.reverse();
    commits
}
