//! Content-language resolution for editor configurations

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::registry::Locales;

/// Default content language when the installation configures none
const DEFAULT_CONTENT_LANGUAGE: &str = "en_US";

/// Normalize a locale identifier's subtag casing.
///
/// The primary subtag is lower-cased, the region subtag (if any)
/// upper-cased, rejoined on the first underscore. This is the only place
/// region-code casing normalization happens.
///
/// # Examples
///
/// ```
/// use frontedit_i18n::normalize_locale;
///
/// assert_eq!(normalize_locale("PT_br"), "pt_BR");
/// assert_eq!(normalize_locale("de"), "de");
/// ```
pub fn normalize_locale(raw: &str) -> String {
	match raw.split_once('_') {
		Some((primary, region)) if !region.is_empty() => {
			format!("{}_{}", primary.to_lowercase(), region.to_uppercase())
		}
		Some((primary, _)) => primary.to_lowercase(),
		None => raw.to_lowercase(),
	}
}

/// Determine the content language for a record's editor configuration.
///
/// A record with a positive language id uses that language's ISO code
/// verbatim. The default/all-languages pseudo-language (id <= 0) falls
/// back to the configured `defaultContentLanguage` of the merged editor
/// configuration (or `en_US`), normalized and verified against the
/// installed locale set; an uninstalled value collapses to its bare
/// primary subtag (`xx_YY` becomes `xx`, `en_US` becomes `en`).
pub fn resolve_content_language(
	language_id: i64,
	merged_config: &JsonValue,
	locales: &dyn Locales,
) -> String {
	if language_id > 0 {
		if let Some(iso) = locales.iso_code(language_id) {
			return iso;
		}
		debug!(language_id, "language id has no ISO code, using default branch");
	}

	let configured = merged_config
		.get("defaultContentLanguage")
		.and_then(JsonValue::as_str)
		.unwrap_or(DEFAULT_CONTENT_LANGUAGE);
	let normalized = normalize_locale(configured);
	if locales.is_installed(&normalized) {
		return normalized;
	}
	if let Some((primary, _)) = normalized.split_once('_') {
		return primary.to_string();
	}
	normalized
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::registry::SystemLocales;
	use rstest::rstest;
	use serde_json::json;

	fn locales() -> SystemLocales {
		let mut locales = SystemLocales::new();
		locales.register_language(2, "de");
		locales.install("pt_BR");
		locales
	}

	#[rstest]
	#[case("pt_BR", "pt_BR")]
	#[case("PT_br", "pt_BR")]
	#[case("EN_us", "en_US")]
	#[case("DE", "de")]
	fn normalization_cases(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(normalize_locale(raw), expected);
	}

	#[test]
	fn positive_language_id_uses_iso_code_verbatim() {
		let language = resolve_content_language(2, &json!({}), &locales());

		assert_eq!(language, "de");
	}

	#[test]
	fn default_language_uses_configured_default() {
		let config = json!({"defaultContentLanguage": "pt_BR"});

		let language = resolve_content_language(0, &config, &locales());

		assert_eq!(language, "pt_BR");
	}

	#[test]
	fn uninstalled_default_collapses_to_primary_subtag() {
		let config = json!({"defaultContentLanguage": "xx_YY"});

		let language = resolve_content_language(0, &config, &locales());

		assert_eq!(language, "xx");
	}

	#[test]
	fn unset_default_falls_back_to_en_us_then_en() {
		// en_US is not in the installed set of this fixture, so the
		// fallback chain ends at the bare language.
		let language = resolve_content_language(0, &json!({}), &locales());

		assert_eq!(language, "en");
	}

	#[test]
	fn unmapped_positive_id_degrades_to_default_branch() {
		let config = json!({"defaultContentLanguage": "pt_BR"});

		let language = resolve_content_language(42, &config, &locales());

		assert_eq!(language, "pt_BR");
	}
}
