use time::OffsetDateTime;

/// A single commit as seen by the estimator: who made it and when
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub author: String,
    pub timestamp: OffsetDateTime,
}

impl Commit {
    pub fn new(author: &str, timestamp: OffsetDateTime) -> Self {
        Self {
            author: author.to_string(),
            timestamp,
        }
    }
}
