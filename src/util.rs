// Small display and platform helpers

use std::time::Duration;
use unicode_width::UnicodeWidthChar;

/// Format a duration as mm:ss (spills into hours as h:mm:ss)
pub fn format_clock(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Truncate a string to a display width, appending an ellipsis
///
/// Width-aware so CJK titles and emoji don't overflow table cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }
    s.to_string()
}

/// Open a URL in the system browser, detached
///
/// Best-effort: failures are logged, never fatal. The tracker has already
/// bound the session by the time this runs.
pub fn open_in_browser(url: &str) {
    let result = if cfg!(target_os = "macos") {
        std::process::Command::new("open").arg(url).spawn()
    } else if cfg!(target_os = "windows") {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", url])
            .spawn()
    } else {
        std::process::Command::new("xdg-open").arg(url).spawn()
    };

    if let Err(e) = result {
        tracing::warn!("Failed to open browser for {}: {}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_minutes_and_seconds() {
        assert_eq!(format_clock(Duration::from_secs(0)), "00:00");
        assert_eq!(format_clock(Duration::from_secs(65)), "01:05");
        assert_eq!(format_clock(Duration::from_secs(3 * 3600 + 62)), "3:01:02");
    }

    #[test]
    fn truncation_is_width_aware() {
        assert_eq!(truncate_to_width("Two Sum", 20), "Two Sum");
        assert_eq!(truncate_to_width("Binary Tree Maximum", 10), "Binary Tr…");
    }
}
