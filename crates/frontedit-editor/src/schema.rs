//! Compiled record schemas as delivered by the CMS form layer

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use frontedit_core::Result;

/// Compiled field schema for one record type
///
/// Produced by the CMS's form-data compilation for a "new record" of the
/// table in question; derived fresh per request, never mutated in place.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompiledRecordSchema {
	/// Table the schema was compiled for
	pub table: String,
	/// Uid of the record under edit
	pub record_id: i64,
	/// Resolved record type value
	pub record_type: String,
	/// Page the record lives on
	pub parent_page_id: i64,
	/// The record's own language id; non-positive means the
	/// default/all-languages pseudo-language
	pub language_id: i64,
	/// Field schemas in declaration order
	pub fields: IndexMap<String, FieldSchema>,
}

/// Schema of a single field
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FieldSchema {
	/// Rich-text configuration; absent for fields that are not
	/// rich-text-enabled
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub rich_text: Option<RichTextSchema>,
}

/// Declared rich-text editing configuration of a field
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RichTextSchema {
	/// The field's declared default editor options
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub config: Option<JsonValue>,
	/// External plugin registrations in declaration order
	#[serde(default)]
	pub external_plugins: IndexMap<String, ExternalPluginSpec>,
}

/// One external plugin registration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExternalPluginSpec {
	/// Loadable plugin resource, extension-relative (`EXT:`) or already
	/// web-servable; a registration without one is a configuration error
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub resource: Option<String>,
	/// Named backend route backing the plugin's dynamic options
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub route: Option<String>,
	/// Plugin option block merged into the field configuration under the
	/// plugin's name
	#[serde(default = "empty_options")]
	pub options: JsonValue,
}

impl Default for ExternalPluginSpec {
	fn default() -> Self {
		Self {
			resource: None,
			route: None,
			options: empty_options(),
		}
	}
}

fn empty_options() -> JsonValue {
	JsonValue::Object(serde_json::Map::new())
}

/// Supplies compiled record schemas
///
/// Backed by the CMS's form-data compilation step; a record type without
/// a schema yields `Ok(None)` and resolution degrades to an empty result
/// mapping.
pub trait SchemaProvider: Send + Sync {
	/// Compile the field schema for a new record of `table`
	fn compile_for_new_record(&self, table: &str) -> Result<Option<CompiledRecordSchema>>;
}
