//! Log-safe previews of raw input.
//!
//! Invalid input lines are echoed into the log so an operator can find them.
//! They may hold binary garbage, so the preview drops control characters and
//! is capped in length.

use crate::config::MAX_LINE_PREVIEW_CHARS;

/// Removes control characters, keeping tab and all non-ASCII text.
///
/// Newlines are removed too, so a preview always stays on one log line.
pub fn sanitize_line(line: &str) -> String {
    line.chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code > 0x7F // Allow non-ASCII (UTF-8)
        })
        .filter(|c| *c != '\u{7F}')
        .collect()
}

/// Builds a sanitized, truncated preview of a raw input line.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub fn preview_line(raw: &[u8]) -> String {
    let sanitized = sanitize_line(&String::from_utf8_lossy(raw));
    let total = sanitized.chars().count();

    if total > MAX_LINE_PREVIEW_CHARS {
        let head: String = sanitized.chars().take(MAX_LINE_PREVIEW_CHARS).collect();
        format!("{head}... (truncated, original length: {total} chars)")
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_line_removes_control_chars() {
        let input = "{\"a\"\x00:\x01 1\x1b}";
        assert_eq!(sanitize_line(input), "{\"a\": 1}");
    }

    #[test]
    fn test_sanitize_line_removes_newlines_keeps_tabs() {
        assert_eq!(sanitize_line("a\r\nb\tc"), "ab\tc");
    }

    #[test]
    fn test_sanitize_line_preserves_unicode() {
        let input = "заголовок 🚀";
        assert_eq!(sanitize_line(input), input);
    }

    #[test]
    fn test_preview_line_short_input_unchanged() {
        assert_eq!(preview_line(b"{not json"), "{not json");
    }

    #[test]
    fn test_preview_line_truncates_long_input() {
        let raw = "x".repeat(MAX_LINE_PREVIEW_CHARS + 50);
        let preview = preview_line(raw.as_bytes());
        assert!(preview.starts_with(&"x".repeat(MAX_LINE_PREVIEW_CHARS)));
        assert!(preview.ends_with(&format!(
            "(truncated, original length: {} chars)",
            MAX_LINE_PREVIEW_CHARS + 50
        )));
    }

    #[test]
    fn test_preview_line_invalid_utf8() {
        let preview = preview_line(&[b'{', 0xff, 0xfe, b'}']);
        assert_eq!(preview, "{\u{FFFD}\u{FFFD}}");
    }
}
