//! Escaping helpers for markup attributes and inline scripts

/// Escape a string for interpolation into an HTML attribute value.
///
/// # Examples
///
/// ```
/// use frontedit_core::escape::escape_html_attribute;
///
/// assert_eq!(escape_html_attribute("{}"), "{}");
/// assert_eq!(
///     escape_html_attribute(r#"{"a":"<b>"}"#),
///     "{&quot;a&quot;:&quot;&lt;b&gt;&quot;}"
/// );
/// ```
pub fn escape_html_attribute(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#039;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Quote a string as a single-quoted JavaScript string literal.
///
/// Used when emitting the editor plugin bootstrap script; the returned
/// value includes the surrounding quotes.
///
/// # Examples
///
/// ```
/// use frontedit_core::escape::quote_js_value;
///
/// assert_eq!(quote_js_value("linkbrowser"), "'linkbrowser'");
/// assert_eq!(quote_js_value("it's"), "'it\\'s'");
/// ```
pub fn quote_js_value(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 2);
	result.push('\'');
	for ch in text.chars() {
		match ch {
			'\'' => result.push_str("\\'"),
			'"' => result.push_str("\\\""),
			'\\' => result.push_str("\\\\"),
			'\n' => result.push_str("\\n"),
			'\r' => result.push_str("\\r"),
			'<' => result.push_str("\\u003C"),
			'>' => result.push_str("\\u003E"),
			'&' => result.push_str("\\u0026"),
			_ => result.push(ch),
		}
	}
	result.push('\'');
	result
}
