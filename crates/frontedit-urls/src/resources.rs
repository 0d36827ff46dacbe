//! Resolution of extension-relative resource paths

use std::collections::HashMap;

use tracing::debug;

use frontedit_core::config::EXT_PATH_MARKER;
use frontedit_core::{FronteditError, Result};

/// Resolves an extension-relative path marker string to an absolute
/// web-servable URL
pub trait ResourceResolver: Send + Sync {
	/// Resolve `path` to a web URL.
	///
	/// A path without the extension marker is already resolved and must
	/// be returned unchanged.
	fn resolve(&self, path: &str) -> Result<String>;
}

/// Maps extension names to the web base path their public resources are
/// served from
///
/// # Examples
///
/// ```
/// use frontedit_urls::{ExtensionResourceResolver, ResourceResolver};
///
/// let mut resolver = ExtensionResourceResolver::new();
/// resolver.register("frontedit", "/assets/ext/frontedit");
///
/// let url = resolver.resolve("EXT:frontedit/plugins/link/plugin.js").unwrap();
/// assert_eq!(url, "/assets/ext/frontedit/plugins/link/plugin.js");
///
/// // Already-resolved values pass through untouched.
/// assert_eq!(resolver.resolve("/assets/app.js").unwrap(), "/assets/app.js");
/// ```
#[derive(Debug, Default)]
pub struct ExtensionResourceResolver {
	extensions: HashMap<String, String>,
}

impl ExtensionResourceResolver {
	/// Create a resolver with no registered extensions
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an extension's web base path
	pub fn register(&mut self, extension: &str, web_base: &str) {
		self.extensions
			.insert(extension.to_string(), web_base.trim_end_matches('/').to_string());
	}
}

impl ResourceResolver for ExtensionResourceResolver {
	fn resolve(&self, path: &str) -> Result<String> {
		let Some(relative) = path.strip_prefix(EXT_PATH_MARKER) else {
			return Ok(path.to_string());
		};

		let (extension, rest) = relative.split_once('/').unwrap_or((relative, ""));
		let web_base = self.extensions.get(extension).ok_or_else(|| {
			FronteditError::Configuration(format!(
				"unknown extension '{}' in resource path '{}'",
				extension, path
			))
		})?;

		let resolved = if rest.is_empty() {
			web_base.clone()
		} else {
			format!("{}/{}", web_base, rest)
		};
		debug!(path, resolved = resolved.as_str(), "resolved extension resource");
		Ok(resolved)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn resolver() -> ExtensionResourceResolver {
		let mut resolver = ExtensionResourceResolver::new();
		resolver.register("site_editor", "/assets/ext/site_editor/");
		resolver
	}

	#[test]
	fn resolves_marker_paths_under_registered_base() {
		let url = resolver().resolve("EXT:site_editor/rte/plugin.js").unwrap();

		assert_eq!(url, "/assets/ext/site_editor/rte/plugin.js");
	}

	#[test]
	fn unknown_extension_is_a_configuration_error() {
		let result = resolver().resolve("EXT:missing/plugin.js");

		assert!(matches!(result, Err(FronteditError::Configuration(_))));
	}

	#[test]
	fn resolved_urls_pass_through() {
		let url = resolver().resolve("/assets/ext/site_editor/rte/plugin.js").unwrap();

		assert_eq!(url, "/assets/ext/site_editor/rte/plugin.js");
	}
}
