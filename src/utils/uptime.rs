//! Uptime rendering.

use std::time::Duration;

const SECS_PER_DAY: u64 = 86_400;

/// Formats a duration as `H:MM:SS`, prefixed with `N day(s), ` past one day.
///
/// Sub-second precision is dropped.
pub fn format_uptime(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let days = total / SECS_PER_DAY;
    let rest = total % SECS_PER_DAY;
    let clock = format!("{}:{:02}:{:02}", rest / 3600, (rest % 3600) / 60, rest % 60);

    match days {
        0 => clock,
        1 => format!("1 day, {clock}"),
        n => format!("{n} days, {clock}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_under_a_minute() {
        assert_eq!(format_uptime(Duration::from_millis(7_900)), "0:00:07");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_uptime(Duration::from_secs(3 * 3600 + 4 * 60 + 5)), "3:04:05");
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_uptime(Duration::from_secs(SECS_PER_DAY + 61)), "1 day, 0:01:01");
        assert_eq!(
            format_uptime(Duration::from_secs(3 * SECS_PER_DAY + 23 * 3600)),
            "3 days, 23:00:00"
        );
    }
}
