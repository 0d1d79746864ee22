use anyhow::{Context, Result};
use time::format_description::{self, OwnedFormatItem};
use time::{OffsetDateTime, UtcOffset};

/// Format a number of seconds as D:H:M:S, or H:M:S when days are not broken out.
///
/// Components are not zero-padded. Without days, hours grow past 24.
pub fn format_duration(total_seconds: u64, include_days: bool) -> String {
    let mut seconds = total_seconds;

    let days = if include_days {
        let days = seconds / 86_400;
        seconds %= 86_400;
        Some(days)
    } else {
        None
    };

    let hours = seconds / 3_600;
    seconds %= 3_600;
    let minutes = seconds / 60;
    seconds %= 60;

    match days {
        Some(days) => format!("{}:{}:{}:{}", days, hours, minutes, seconds),
        None => format!("{}:{}:{}", hours, minutes, seconds),
    }
}

/// Renders commit dates for report lines
pub trait DateRenderer {
    fn render(&self, date: OffsetDateTime) -> String;
}

/// Default short date pattern
pub const DEFAULT_DATE_FORMAT: &str = "[year]-[month]-[day]";

/// Renders dates with a `time` format description in a fixed UTC offset
pub struct PatternDateRenderer {
    format: OwnedFormatItem,
    offset: UtcOffset,
}

impl PatternDateRenderer {
    pub fn new(pattern: &str, offset: UtcOffset) -> Result<Self> {
        let format = format_description::parse_owned::<2>(pattern)
            .with_context(|| format!("Invalid date format: {}", pattern))?;
        Ok(Self { format, offset })
    }

    /// Use the machine's local offset, falling back to UTC when it cannot be determined.
    ///
    /// Must be called before any threads are spawned for the local offset lookup to succeed.
    pub fn local(pattern: &str) -> Result<Self> {
        let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
        Self::new(pattern, offset)
    }
}

impl DateRenderer for PatternDateRenderer {
    fn render(&self, date: OffsetDateTime) -> String {
        date.to_offset(self.offset)
            .format(&self.format)
            .unwrap_or_else(|_| "unknown".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, offset};

    #[test]
    fn test_format_duration_with_days() {
        assert_eq!(format_duration(3661, true), "0:1:1:1");
        assert_eq!(format_duration(0, true), "0:0:0:0");
        assert_eq!(format_duration(90_000, true), "1:1:0:0");
        assert_eq!(format_duration(2 * 86_400 + 59, true), "2:0:0:59");
    }

    #[test]
    fn test_format_duration_without_days() {
        assert_eq!(format_duration(90_000, false), "25:0:0");
        assert_eq!(format_duration(3661, false), "1:1:1");
        assert_eq!(format_duration(59, false), "0:0:59");
    }

    #[test]
    fn test_render_default_pattern() {
        let renderer = PatternDateRenderer::new(DEFAULT_DATE_FORMAT, UtcOffset::UTC).unwrap();
        assert_eq!(renderer.render(datetime!(2023-11-14 22:13:20 UTC)), "2023-11-14");
    }

    #[test]
    fn test_render_shifts_to_offset() {
        let renderer = PatternDateRenderer::new(DEFAULT_DATE_FORMAT, offset!(+3)).unwrap();
        assert_eq!(renderer.render(datetime!(2023-11-14 22:13:20 UTC)), "2023-11-15");
    }

    #[test]
    fn test_render_custom_pattern() {
        let renderer = PatternDateRenderer::new("[day].[month].[year]", UtcOffset::UTC).unwrap();
        assert_eq!(renderer.render(datetime!(2020-03-07 10:00 UTC)), "07.03.2020");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternDateRenderer::new("[nonsense", UtcOffset::UTC).is_err());
    }
}
