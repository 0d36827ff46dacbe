//! Installation-level editor settings

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Per-installation editor settings
///
/// Deserialized from the installation's configuration; every field has a
/// working default so an absent section behaves like an empty one.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorSettings {
	/// Editor-specific override block deep-merged on top of every
	/// field's base configuration; override wins on key collision
	#[serde(skip_serializing_if = "Option::is_none")]
	pub overrides: Option<JsonValue>,
}
