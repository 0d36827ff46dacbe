//! Wrapper input context and record-metadata lookups

use serde_json::{Map, Value as JsonValue};

/// Everything one wrap call needs to know about a rendered content block
///
/// Consumed once per rendered block; carries no retained identity.
#[derive(Clone, Debug)]
pub struct WrapperContext {
	/// Table of the wrapped record
	pub table: String,
	/// Uid of the wrapped record
	pub record_id: i64,
	/// Page the record lives on
	pub parent_page_id: i64,
	/// Column position of the record on its page
	pub column_position: i64,
	/// Whether the record is currently hidden
	pub is_hidden: bool,
	/// Human-readable display label of the record
	pub title: String,
	/// Already-rendered block content, embedded unescaped
	pub rendered_content: String,
	/// Field values pre-populated on a sibling created via the drop-zone
	pub default_values_for_new_sibling: Map<String, JsonValue>,
}

impl WrapperContext {
	/// Build a context from a record row as stored in the page cache.
	///
	/// Reads `uid`, `pid` and `colPos` from the row and derives the
	/// display title and hidden state with the lookups below.
	pub fn from_record(table: &str, row: &JsonValue, rendered_content: impl Into<String>) -> Self {
		Self {
			table: table.to_string(),
			record_id: row.get("uid").and_then(JsonValue::as_i64).unwrap_or(0),
			parent_page_id: row.get("pid").and_then(JsonValue::as_i64).unwrap_or(0),
			column_position: row.get("colPos").and_then(JsonValue::as_i64).unwrap_or(0),
			is_hidden: check_if_content_element_is_hidden(table, row),
			title: record_title(table, row),
			rendered_content: rendered_content.into(),
			default_values_for_new_sibling: Map::new(),
		}
	}

	/// Set the default field values for a new sibling
	pub fn with_default_values(mut self, values: Map<String, JsonValue>) -> Self {
		self.default_values_for_new_sibling = values;
		self
	}
}

/// Whether the record row is flagged hidden.
///
/// Output contract: a boolean literal, interpolated by the wrapper as
/// `"1"`/`"0"`. Accepts both numeric and boolean flag representations;
/// an absent flag means visible.
pub fn check_if_content_element_is_hidden(_table: &str, row: &JsonValue) -> bool {
	match row.get("hidden") {
		Some(JsonValue::Bool(flag)) => *flag,
		Some(JsonValue::Number(flag)) => flag.as_i64().unwrap_or(0) != 0,
		_ => false,
	}
}

/// Human-readable display label of the record row.
///
/// Content elements label themselves by their header; every other table
/// uses its title column. An unlabeled record falls back to `[No title]`.
pub fn record_title(table: &str, row: &JsonValue) -> String {
	let label_field = if table == "tt_content" { "header" } else { "title" };
	row.get(label_field)
		.and_then(JsonValue::as_str)
		.filter(|label| !label.is_empty())
		.unwrap_or("[No title]")
		.to_string()
}
