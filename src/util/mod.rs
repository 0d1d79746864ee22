mod format;

pub use format::{format_duration, DateRenderer, PatternDateRenderer, DEFAULT_DATE_FORMAT};
