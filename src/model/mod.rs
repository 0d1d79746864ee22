mod commit;
mod session;

pub use commit::Commit;
pub use session::{AggregateResult, Parameters, SessionResult};
