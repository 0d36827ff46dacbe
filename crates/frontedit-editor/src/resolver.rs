//! Per-field editor configuration resolution

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use tracing::debug;

use frontedit_core::config::{flatten_list_option, merge_replace_recursive, rewrite_resource_paths};
use frontedit_core::escape::quote_js_value;
use frontedit_core::{FronteditError, Result};
use frontedit_i18n::{resolve_content_language, Locales};
use frontedit_urls::{ResourceResolver, RouteParams, RouteResolver};

use crate::schema::{CompiledRecordSchema, RichTextSchema, SchemaProvider};
use crate::settings::EditorSettings;

/// Option keys the client expects as comma-joined strings, never as
/// sequences
const LIST_OPTION_KEYS: [&str; 3] = ["extraPlugins", "removePlugins", "removeButtons"];

/// Fully resolved editor configuration for one field
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEditorConfig {
	/// Merged and path-resolved option mapping, including
	/// `contentsLanguage` and the flattened plugin lists
	pub configuration: JsonValue,
	/// Plugin bootstrap script: one registration statement per external
	/// plugin, binding its name to the resolved resource URL
	pub external_plugins: String,
	/// Whether the field declared an editor configuration at all
	pub has_rich_text_configuration: bool,
}

impl ResolvedEditorConfig {
	/// The normalized content language the configuration carries
	pub fn content_language(&self) -> Option<&str> {
		self.configuration
			.get("contentsLanguage")
			.and_then(JsonValue::as_str)
	}

	/// The comma-joined list of plugins the client must load
	pub fn extra_plugin_names(&self) -> Option<&str> {
		self.configuration
			.get("extraPlugins")
			.and_then(JsonValue::as_str)
	}
}

/// Resolves the editor configuration for all rich-text fields of a
/// record type
///
/// Pure per request: the collaborators are read-only lookups, the output
/// is a function of the compiled schema and the installation settings.
pub struct EditorConfigResolver {
	schemas: Arc<dyn SchemaProvider>,
	resources: Arc<dyn ResourceResolver>,
	routes: Arc<dyn RouteResolver>,
	locales: Arc<dyn Locales>,
	settings: EditorSettings,
}

impl EditorConfigResolver {
	/// Create a resolver over the given collaborators
	pub fn new(
		schemas: Arc<dyn SchemaProvider>,
		resources: Arc<dyn ResourceResolver>,
		routes: Arc<dyn RouteResolver>,
		locales: Arc<dyn Locales>,
		settings: EditorSettings,
	) -> Self {
		Self {
			schemas,
			resources,
			routes,
			locales,
			settings,
		}
	}

	/// Resolve the editor configuration for every rich-text field of
	/// `table`.
	///
	/// Fields without a rich-text declaration are omitted from the
	/// result entirely. A record type without a schema yields an empty
	/// mapping.
	pub fn resolve_field_configurations(
		&self,
		table: &str,
	) -> Result<IndexMap<String, ResolvedEditorConfig>> {
		let Some(schema) = self.schemas.compile_for_new_record(table)? else {
			debug!(table, "no compiled schema, returning empty configuration");
			return Ok(IndexMap::new());
		};

		let mut configurations = IndexMap::new();
		for (field_name, field) in &schema.fields {
			let Some(rich_text) = &field.rich_text else {
				continue;
			};
			let resolved = self.resolve_field(&schema, field_name, rich_text)?;
			configurations.insert(field_name.clone(), resolved);
		}
		debug!(
			table,
			fields = configurations.len(),
			"resolved editor configurations"
		);
		Ok(configurations)
	}

	fn resolve_field(
		&self,
		schema: &CompiledRecordSchema,
		field_name: &str,
		rich_text: &RichTextSchema,
	) -> Result<ResolvedEditorConfig> {
		// An empty customConfig suppresses inheriting any external editor
		// preset; the field or override configuration may still set one.
		let mut configuration = json!({ "customConfig": "" });
		if let Some(config) = &rich_text.config
			&& config.is_object()
		{
			merge_replace_recursive(&mut configuration, config);
		}
		if let Some(overrides) = &self.settings.overrides
			&& overrides.is_object()
		{
			merge_replace_recursive(&mut configuration, overrides);
		}

		let language =
			resolve_content_language(schema.language_id, &configuration, self.locales.as_ref());

		rewrite_resource_paths(&mut configuration, &mut |path| self.resources.resolve(path))?;
		for key in LIST_OPTION_KEYS {
			flatten_list_option(&mut configuration, key);
		}

		let JsonValue::Object(mut options) = configuration else {
			return Err(FronteditError::Configuration(format!(
				"editor configuration of field '{}' is not a mapping",
				field_name
			)));
		};
		options.insert("contentsLanguage".to_string(), json!(language));

		let mut bootstrap_script = String::new();
		for (plugin_name, plugin) in &rich_text.external_plugins {
			let resource = plugin.resource.as_deref().ok_or_else(|| {
				FronteditError::Configuration(format!(
					"external plugin '{}' on field '{}' declares no resource path",
					plugin_name, field_name
				))
			})?;
			let resource_url = self.resources.resolve(resource)?;

			let mut plugin_options = match &plugin.options {
				JsonValue::Object(map) => map.clone(),
				_ => serde_json::Map::new(),
			};
			if let Some(route) = &plugin.route {
				let params = RouteParams::new()
					.param("table", &schema.table)
					.param("uid", schema.record_id)
					.param("fieldName", field_name)
					.param("recordType", &schema.record_type)
					.param("pid", schema.parent_page_id);
				let route_url = self.routes.reverse(route, &params)?;
				plugin_options.insert("routeUrl".to_string(), json!(route_url));
			}
			options.insert(plugin_name.clone(), JsonValue::Object(plugin_options));

			let extra_plugins = match options.get("extraPlugins").and_then(JsonValue::as_str) {
				Some(existing) if !existing.is_empty() => format!("{},{}", existing, plugin_name),
				_ => plugin_name.clone(),
			};
			options.insert("extraPlugins".to_string(), json!(extra_plugins));

			bootstrap_script.push_str("CKEDITOR.plugins.addExternal(");
			bootstrap_script.push_str(&quote_js_value(plugin_name));
			bootstrap_script.push(',');
			bootstrap_script.push_str(&quote_js_value(&resource_url));
			bootstrap_script.push_str(",'');");
		}

		Ok(ResolvedEditorConfig {
			configuration: JsonValue::Object(options),
			external_plugins: bootstrap_script,
			has_rich_text_configuration: true,
		})
	}
}
