//! Reverse resolution of named backend routes

use std::collections::HashMap;

use frontedit_core::{FronteditError, Result};

/// Ordered parameter block handed to [`RouteResolver::reverse`]
///
/// Parameters substitute `{name}` placeholders in the route pattern;
/// anything left over is rendered as a query string in insertion order.
#[derive(Clone, Debug, Default)]
pub struct RouteParams {
	pairs: Vec<(String, String)>,
}

impl RouteParams {
	/// Create an empty parameter block
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a parameter, keeping insertion order
	pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
		self.pairs.push((name.into(), value.to_string()));
		self
	}

	/// Look up a parameter value by name
	pub fn get(&self, name: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}

	/// Iterate the parameters in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.pairs
			.iter()
			.map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Whether the block is empty
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}
}

/// Resolves a route name and parameter block to a fully qualified URL
pub trait RouteResolver: Send + Sync {
	/// Build the URL for `name`, or [`FronteditError::NotFound`] for an
	/// unregistered name.
	fn reverse(&self, name: &str, params: &RouteParams) -> Result<String>;
}

/// In-memory route table mapping names to path patterns
///
/// Patterns may contain `{param}` placeholders; parameters not consumed
/// by a placeholder become query parameters.
///
/// # Examples
///
/// ```
/// use frontedit_urls::{RouteMap, RouteParams, RouteResolver};
///
/// let mut routes = RouteMap::new();
/// routes.register("record_edit", "/backend/record/edit");
///
/// let url = routes
///     .reverse("record_edit", &RouteParams::new().param("table", "tt_content").param("uid", 7))
///     .unwrap();
/// assert_eq!(url, "/backend/record/edit?table=tt_content&uid=7");
/// ```
#[derive(Debug, Default)]
pub struct RouteMap {
	routes: HashMap<String, String>,
}

impl RouteMap {
	/// Create an empty route table
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a route name with its path pattern
	pub fn register(&mut self, name: &str, pattern: &str) {
		self.routes.insert(name.to_string(), pattern.to_string());
	}

	/// Whether a route name is registered
	pub fn has_route(&self, name: &str) -> bool {
		self.routes.contains_key(name)
	}
}

impl RouteResolver for RouteMap {
	fn reverse(&self, name: &str, params: &RouteParams) -> Result<String> {
		let pattern = self
			.routes
			.get(name)
			.ok_or_else(|| FronteditError::NotFound(format!("route '{}'", name)))?;

		// Single pass over the pattern, substituting placeholders as they
		// are encountered.
		let mut path = String::with_capacity(pattern.len());
		let mut consumed = Vec::new();
		let mut chars = pattern.chars().peekable();
		while let Some(ch) = chars.next() {
			if ch == '{' {
				let placeholder: String = chars.by_ref().take_while(|&c| c != '}').collect();
				let value = params.get(&placeholder).ok_or_else(|| {
					FronteditError::Validation(format!(
						"route '{}' is missing parameter '{}'",
						name, placeholder
					))
				})?;
				path.push_str(value);
				consumed.push(placeholder);
			} else {
				path.push(ch);
			}
		}

		let query_pairs: Vec<(&str, &str)> = params
			.iter()
			.filter(|(key, _)| !consumed.iter().any(|used| used == key))
			.collect();
		if query_pairs.is_empty() {
			return Ok(path);
		}

		let query = serde_urlencoded::to_string(&query_pairs)
			.map_err(|e| FronteditError::Configuration(format!("query encoding: {}", e)))?;
		Ok(format!("{}?{}", path, query))
	}
}
