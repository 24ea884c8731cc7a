//! Human-readable runtime formatting.

/// Format a number of minutes as long-form text.
///
/// "hour" is pluralised, "minutes" never is: existing consumers match
/// on the exact text, including `"1 hour 1 minutes"`.
///
/// # Examples
///
/// ```
/// use journey_finder::domain::format_duration;
///
/// assert_eq!(format_duration(0), "0 minutes");
/// assert_eq!(format_duration(60), "1 hour 0 minutes");
/// assert_eq!(format_duration(125), "2 hours 5 minutes");
/// ```
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours > 0 {
        let plural = if hours > 1 { "s" } else { "" };
        format!("{hours} hour{plural} {mins} minutes")
    } else {
        format!("{mins} minutes")
    }
}

/// Format a number of minutes in the compact badge form, e.g. `"1h 35m"`.
pub fn format_badge_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_form_under_an_hour() {
        assert_eq!(format_duration(0), "0 minutes");
        assert_eq!(format_duration(1), "1 minutes");
        assert_eq!(format_duration(45), "45 minutes");
        assert_eq!(format_duration(59), "59 minutes");
    }

    #[test]
    fn long_form_with_hours() {
        assert_eq!(format_duration(60), "1 hour 0 minutes");
        assert_eq!(format_duration(61), "1 hour 1 minutes");
        assert_eq!(format_duration(95), "1 hour 35 minutes");
        assert_eq!(format_duration(120), "2 hours 0 minutes");
        assert_eq!(format_duration(125), "2 hours 5 minutes");
    }

    #[test]
    fn badge_form() {
        assert_eq!(format_badge_duration(0), "0m");
        assert_eq!(format_badge_duration(45), "45m");
        assert_eq!(format_badge_duration(60), "1h 0m");
        assert_eq!(format_badge_duration(95), "1h 35m");
        assert_eq!(format_badge_duration(600), "10h 0m");
    }
}
