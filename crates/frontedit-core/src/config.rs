//! Operations over editor configuration trees
//!
//! An editor configuration is an arbitrarily nested tree of mappings,
//! sequences and scalars; [`serde_json::Value`] is the tagged union the
//! operations below walk structurally.

use serde_json::Value as JsonValue;

use crate::error::Result;

/// Marker prefix for extension-relative resource paths.
///
/// Any string value in a configuration tree that starts with this marker
/// must be rewritten to an absolute web-servable URL before the
/// configuration leaves the server.
pub const EXT_PATH_MARKER: &str = "EXT:";

/// Merge `overlay` into `base`, recursing into nested mappings.
///
/// Non-mapping overlay values (scalars and sequences alike) replace the
/// base value outright: replace-recursive semantics, not a deep union.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use frontedit_core::config::merge_replace_recursive;
///
/// let mut base = json!({"toolbar": {"items": ["bold"], "rows": 2}});
/// let overlay = json!({"toolbar": {"items": ["italic"]}});
/// merge_replace_recursive(&mut base, &overlay);
/// assert_eq!(base, json!({"toolbar": {"items": ["italic"], "rows": 2}}));
/// ```
pub fn merge_replace_recursive(base: &mut JsonValue, overlay: &JsonValue) {
	match (base, overlay) {
		(JsonValue::Object(base_map), JsonValue::Object(overlay_map)) => {
			for (key, overlay_value) in overlay_map {
				let recurse = overlay_value.is_object()
					&& base_map.get(key).is_some_and(JsonValue::is_object);
				if recurse {
					if let Some(base_value) = base_map.get_mut(key) {
						merge_replace_recursive(base_value, overlay_value);
					}
				} else {
					base_map.insert(key.clone(), overlay_value.clone());
				}
			}
		}
		(base, overlay) => *base = overlay.clone(),
	}
}

/// Rewrite every extension-relative path in the tree to an absolute URL.
///
/// Walks mappings and sequences at arbitrary depth; each string value
/// starting with [`EXT_PATH_MARKER`] is passed through `resolve` and
/// replaced with its result. Strings without the marker are untouched,
/// so resolving an already-resolved configuration is a no-op.
pub fn rewrite_resource_paths(
	value: &mut JsonValue,
	resolve: &mut dyn FnMut(&str) -> Result<String>,
) -> Result<()> {
	match value {
		JsonValue::Object(map) => {
			for (_, child) in map.iter_mut() {
				rewrite_resource_paths(child, resolve)?;
			}
		}
		JsonValue::Array(items) => {
			for child in items.iter_mut() {
				rewrite_resource_paths(child, resolve)?;
			}
		}
		JsonValue::String(text) => {
			if text.starts_with(EXT_PATH_MARKER) {
				let resolved = resolve(text)?;
				*text = resolved;
			}
		}
		_ => {}
	}
	Ok(())
}

/// Collapse a sequence-valued option into the comma-joined string the
/// client-side editor expects.
///
/// Scalars already in string form and absent keys are left alone.
/// Non-string sequence elements are rendered with their JSON display
/// form, matching how the editor would have received them.
pub fn flatten_list_option(config: &mut JsonValue, key: &str) {
	let Some(map) = config.as_object_mut() else {
		return;
	};
	let Some(JsonValue::Array(items)) = map.get(key) else {
		return;
	};
	let joined = items
		.iter()
		.map(|item| match item {
			JsonValue::String(text) => text.clone(),
			other => other.to_string(),
		})
		.collect::<Vec<_>>()
		.join(",");
	map.insert(key.to_string(), JsonValue::String(joined));
}
