//! Sanitization of rich-text cell content
//!
//! Rich-text columns hold server-stored markup that must be treated as
//! untrusted: it is escaped before rendering so raw HTML never reaches
//! the presentation layer. [`detect_xss_patterns`] exposes the pattern
//! check on its own for callers that want to log or reject input.

use regex::Regex;
use std::sync::OnceLock;

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use collegia_columns::escape_html;
///
/// let input = "<script>alert('XSS')</script>";
/// let escaped = escape_html(input);
/// assert_eq!(escaped, "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// ```
pub fn escape_html(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

static DANGEROUS_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

fn dangerous_patterns() -> &'static Vec<Regex> {
	DANGEROUS_PATTERNS.get_or_init(|| {
		vec![
			// JavaScript protocol
			Regex::new(r"(?i)javascript:").unwrap(),
			// Data URI
			Regex::new(r"(?i)data:text/html").unwrap(),
			// Event handlers
			Regex::new(r"(?i)on\w+\s*=").unwrap(),
			// Dangerous tags like iframe/embed
			Regex::new(r"(?i)<(iframe|embed|object|applet|meta|link|base)").unwrap(),
			// script tag
			Regex::new(r"(?i)<script").unwrap(),
		]
	})
}

/// Detect dangerous markup patterns
///
/// # Examples
///
/// ```
/// use collegia_columns::detect_xss_patterns;
///
/// assert!(detect_xss_patterns("<script>alert(1)</script>"));
/// assert!(detect_xss_patterns(r#"<img src=x onerror="alert(1)">"#));
/// assert!(!detect_xss_patterns("Safe text"));
/// ```
pub fn detect_xss_patterns(input: &str) -> bool {
	dangerous_patterns()
		.iter()
		.any(|pattern| pattern.is_match(input))
}

/// Sanitize rich-text content for display
///
/// All markup is escaped; the output is safe to embed in an HTML
/// context as-is.
pub fn sanitize_richtext(input: &str) -> String {
	escape_html(input)
}
