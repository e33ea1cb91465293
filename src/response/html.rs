//! HTML title extraction.
//!
//! Probe bodies are frequently truncated or malformed, so the title is found by
//! pattern matching rather than by parsing the document.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::MAX_TITLE_LENGTH;

// Case-insensitive, spans newlines, tolerates attributes on the opening tag
const TITLE_PATTERN: &str = r"(?is)<title(?:\s[^>]*)?>(.*?)</title\s*>";

static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(TITLE_PATTERN).expect("Failed to compile title regex - this is a bug")
});

/// Extracts the page title from a response body.
///
/// Takes the first `<title>…</title>` span, trims surrounding whitespace and
/// truncates to `MAX_TITLE_LENGTH` characters.
///
/// # Returns
///
/// The title, or `None` if there is no title span or it is blank.
pub fn extract_title(body: &str) -> Option<String> {
    let captured = TITLE_REGEX.captures(body)?.get(1)?.as_str().trim();

    let title: String = captured.chars().take(MAX_TITLE_LENGTH).collect();
    let title = title.trim_end();

    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title_basic() {
        let body = "<html><head><title>Example Domain</title></head></html>";
        assert_eq!(extract_title(body).as_deref(), Some("Example Domain"));
    }

    #[test]
    fn test_extract_title_ignores_lookalike_tags() {
        let body = "<title-bar>chrome</title-bar><title lang=\"en\">Real Title</title>";
        assert_eq!(extract_title(body).as_deref(), Some("Real Title"));
        assert_eq!(extract_title("<titlex>nope</title>"), None);
    }

    #[test]
    fn test_extract_title_case_insensitive() {
        let body = "<HTML><HEAD><TITLE>Shouting</TITLE></HEAD></HTML>";
        assert_eq!(extract_title(body).as_deref(), Some("Shouting"));
    }

    #[test]
    fn test_extract_title_trims_and_spans_lines() {
        let body = "<title>\n   Router Login\n\t</title>";
        assert_eq!(extract_title(body).as_deref(), Some("Router Login"));
    }

    #[test]
    fn test_extract_title_with_attributes() {
        let body = r#"<title lang="en" >Admin</title >"#;
        assert_eq!(extract_title(body).as_deref(), Some("Admin"));
    }

    #[test]
    fn test_extract_title_first_match_wins() {
        let body = "<title>One</title><svg><title>Two</title></svg>";
        assert_eq!(extract_title(body).as_deref(), Some("One"));
    }

    #[test]
    fn test_extract_title_truncates_to_limit() {
        let body = format!("<title>{}</title>", "a".repeat(2000));
        let title = extract_title(&body).unwrap();
        assert_eq!(title.chars().count(), MAX_TITLE_LENGTH);
        assert_eq!(title.chars().count(), 1024);
    }

    #[test]
    fn test_extract_title_truncates_multibyte_by_chars() {
        let body = format!("<title>  {}  </title>", "é".repeat(1500));
        let title = extract_title(&body).unwrap();
        assert_eq!(title.chars().count(), 1024);
        assert!(!title.starts_with(' '));
    }

    #[test]
    fn test_extract_title_truncation_result_is_trimmed() {
        // Cut point lands inside a whitespace run
        let body = format!("<title>{}{}</title>", "a".repeat(1020), " ".repeat(10) + "tail");
        let title = extract_title(&body).unwrap();
        assert_eq!(title, "a".repeat(1020));
    }

    #[test]
    fn test_extract_title_missing_or_blank() {
        assert_eq!(extract_title("<html><body>No title</body></html>"), None);
        assert_eq!(extract_title("<title>   </title>"), None);
        assert_eq!(extract_title("<title>unterminated"), None);
        assert_eq!(extract_title(""), None);
    }
}
