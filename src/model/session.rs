use time::{Duration, OffsetDateTime};

/// Estimation knobs, fixed for the whole invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    /// Gap (in minutes) at or beyond which two commits fall into different sessions
    pub max_gap_minutes: u32,
    /// Padding (in minutes) credited once at the start of every session
    pub session_begin_minutes: u32,
    /// Break out a days component when formatting durations
    pub include_days: bool,
    /// Query every ref instead of only the current branch
    pub scan_all_branches: bool,
}

impl Parameters {
    pub fn max_gap(&self) -> Duration {
        Duration::minutes(i64::from(self.max_gap_minutes))
    }

    pub fn session_begin(&self) -> Duration {
        Duration::minutes(i64::from(self.session_begin_minutes))
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            max_gap_minutes: 180,
            session_begin_minutes: 0,
            include_days: true,
            scan_all_branches: false,
        }
    }
}

/// Session statistics for one author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResult {
    pub total_time: Duration,
    pub commit_count: u64,
    pub sessions: u64,
    /// Timestamp of the last commit in log order (the oldest for newest-first logs)
    pub first_commit: OffsetDateTime,
    /// Timestamp of the first commit in log order (the newest for newest-first logs)
    pub last_commit: OffsetDateTime,
}

/// Totals across every author that produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateResult {
    pub total_time: Duration,
    pub commit_count: u64,
    pub sessions: u64,
}

impl Default for AggregateResult {
    fn default() -> Self {
        Self {
            total_time: Duration::ZERO,
            commit_count: 0,
            sessions: 0,
        }
    }
}
