//! Human-readable summary printed by the session complete hook

use std::fmt;

/// Number of session id characters shown in the banner.
pub const SESSION_ID_DISPLAY_LEN: usize = 16;

const BANNER_TITLE: &str = "=== Claude School - Session Complete ===";
const BANNER_RULE: &str = "=========================================";

/// First 16 characters of a session id. Shorter ids are returned whole.
///
/// Counts characters rather than bytes, so multi-byte ids never split.
pub fn truncate_session_id(session_id: &str) -> String {
    session_id.chars().take(SESSION_ID_DISPLAY_LEN).collect()
}

/// Four-line banner: title, timestamp, truncated session id, rule.
///
/// The `...` marker follows the session id even when nothing was cut.
#[derive(Debug, Clone)]
pub struct SessionBanner<'a> {
    pub timestamp: &'a str,
    pub session_id: &'a str,
}

impl fmt::Display for SessionBanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BANNER_TITLE}")?;
        writeln!(f, "Timestamp: {}", self.timestamp)?;
        writeln!(f, "Session: {}...", truncate_session_id(self.session_id))?;
        writeln!(f, "{BANNER_RULE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_long_id() {
        let id = "0123456789abcdef-extra-characters";
        assert_eq!(truncate_session_id(id), "0123456789abcdef");
    }

    #[test]
    fn truncate_exact_length() {
        let id = "0123456789abcdef";
        assert_eq!(truncate_session_id(id), id);
    }

    #[test]
    fn truncate_short_id() {
        assert_eq!(truncate_session_id("abc123"), "abc123");
        assert_eq!(truncate_session_id(""), "");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let id = "ééééééééééééééééééé";
        let truncated = truncate_session_id(id);
        assert_eq!(truncated.chars().count(), 16);
        assert_eq!(truncated.len(), 32);
    }

    #[test]
    fn banner_has_four_lines() {
        let banner = SessionBanner {
            timestamp: "2026-01-31T12:45:31.053120",
            session_id: "3f2a9c1e-77b0-4d6e-a1f2-000000000000",
        }
        .to_string();

        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(
            lines,
            vec![
                "=== Claude School - Session Complete ===",
                "Timestamp: 2026-01-31T12:45:31.053120",
                "Session: 3f2a9c1e-77b0-4d...",
                "=========================================",
            ]
        );
        assert!(banner.ends_with('\n'));
    }

    #[test]
    fn banner_keeps_ellipsis_for_short_id() {
        let banner = SessionBanner {
            timestamp: "t",
            session_id: "abc",
        }
        .to_string();
        assert!(banner.contains("Session: abc...\n"));
    }
}
