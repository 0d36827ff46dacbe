//! Registry of installed locales and record-language ISO codes

use std::collections::{HashMap, HashSet};

/// Locale knowledge supplied by the CMS installation
pub trait Locales: Send + Sync {
	/// ISO code of the system language with the given id
	fn iso_code(&self, language_id: i64) -> Option<String>;

	/// Whether the locale identifier is installed
	fn is_installed(&self, locale: &str) -> bool;
}

/// In-memory locale registry
///
/// Seeded at construction from the installation's language table; `en`
/// is always installed, being the ultimate fallback.
///
/// # Examples
///
/// ```
/// use frontedit_i18n::{Locales, SystemLocales};
///
/// let mut locales = SystemLocales::new();
/// locales.register_language(2, "de");
/// locales.install("de_AT");
///
/// assert_eq!(locales.iso_code(2).as_deref(), Some("de"));
/// assert!(locales.is_installed("de_AT"));
/// assert!(locales.is_installed("en"));
/// ```
#[derive(Debug)]
pub struct SystemLocales {
	iso_codes: HashMap<i64, String>,
	installed: HashSet<String>,
}

impl SystemLocales {
	/// Create a registry containing only the `en` fallback locale
	pub fn new() -> Self {
		Self {
			iso_codes: HashMap::new(),
			installed: HashSet::from(["en".to_string()]),
		}
	}

	/// Register a system language id with its ISO code
	pub fn register_language(&mut self, language_id: i64, iso: &str) {
		self.iso_codes.insert(language_id, iso.to_string());
	}

	/// Mark a locale identifier as installed
	pub fn install(&mut self, locale: &str) {
		self.installed.insert(locale.to_string());
	}
}

impl Default for SystemLocales {
	fn default() -> Self {
		Self::new()
	}
}

impl Locales for SystemLocales {
	fn iso_code(&self, language_id: i64) -> Option<String> {
		self.iso_codes.get(&language_id).cloned()
	}

	fn is_installed(&self, locale: &str) -> bool {
		self.installed.contains(locale)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_language_id_has_no_iso_code() {
		let locales = SystemLocales::new();

		assert_eq!(locales.iso_code(9), None);
	}

	#[test]
	fn en_is_always_installed() {
		assert!(SystemLocales::new().is_installed("en"));
	}
}
