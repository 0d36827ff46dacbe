//! Integration tests for editor configuration resolution

use std::collections::HashMap;
use std::sync::Arc;

use assert_json_diff::assert_json_include;
use indexmap::IndexMap;
use serde_json::{json, Value as JsonValue};

use frontedit_core::{FronteditError, Result};
use frontedit_editor::{
	CompiledRecordSchema, EditorConfigResolver, EditorSettings, ExternalPluginSpec, FieldSchema,
	RichTextSchema, SchemaProvider,
};
use frontedit_i18n::SystemLocales;
use frontedit_urls::{ExtensionResourceResolver, RouteMap};

struct StaticSchemas {
	schemas: HashMap<String, CompiledRecordSchema>,
}

impl SchemaProvider for StaticSchemas {
	fn compile_for_new_record(&self, table: &str) -> Result<Option<CompiledRecordSchema>> {
		Ok(self.schemas.get(table).cloned())
	}
}

fn content_schema(fields: IndexMap<String, FieldSchema>) -> CompiledRecordSchema {
	CompiledRecordSchema {
		table: "tt_content".to_string(),
		record_id: 1,
		record_type: "text".to_string(),
		parent_page_id: 37,
		language_id: 0,
		fields,
	}
}

fn rich_text_field(config: JsonValue) -> FieldSchema {
	FieldSchema {
		rich_text: Some(RichTextSchema {
			config: Some(config),
			external_plugins: IndexMap::new(),
		}),
	}
}

fn resolver_for(schema: CompiledRecordSchema, settings: EditorSettings) -> EditorConfigResolver {
	let mut schemas = HashMap::new();
	schemas.insert(schema.table.clone(), schema);

	let mut resources = ExtensionResourceResolver::new();
	resources.register("site_editor", "/assets/ext/site_editor");

	let mut routes = RouteMap::new();
	routes.register("rte_link_browser", "/backend/rte/link-browser");

	let mut locales = SystemLocales::new();
	locales.register_language(2, "de");
	locales.install("pt_BR");

	EditorConfigResolver::new(
		Arc::new(StaticSchemas { schemas }),
		Arc::new(resources),
		Arc::new(routes),
		Arc::new(locales),
		settings,
	)
}

#[test]
fn override_wins_at_every_nesting_depth() {
	let mut fields = IndexMap::new();
	fields.insert(
		"bodytext".to_string(),
		rich_text_field(json!({
			"toolbar": {"style": {"rows": 2, "compact": false}},
			"height": 300
		})),
	);
	let settings = EditorSettings {
		overrides: Some(json!({"toolbar": {"style": {"rows": 4}}})),
	};
	let resolver = resolver_for(content_schema(fields), settings);

	let configurations = resolver.resolve_field_configurations("tt_content").unwrap();

	let configuration = &configurations["bodytext"].configuration;
	assert_json_include!(
		actual: configuration,
		expected: json!({
			"toolbar": {"style": {"rows": 4, "compact": false}},
			"height": 300
		})
	);
}

#[test]
fn custom_config_defaults_to_empty_unless_overridden() {
	let mut fields = IndexMap::new();
	fields.insert("bodytext".to_string(), rich_text_field(json!({})));
	fields.insert(
		"header".to_string(),
		rich_text_field(json!({"customConfig": "EXT:site_editor/custom.js"})),
	);
	let resolver = resolver_for(content_schema(fields), EditorSettings::default());

	let configurations = resolver.resolve_field_configurations("tt_content").unwrap();

	assert_eq!(configurations["bodytext"].configuration["customConfig"], "");
	assert_eq!(
		configurations["header"].configuration["customConfig"],
		"/assets/ext/site_editor/custom.js"
	);
}

#[test]
fn extension_paths_are_resolved_at_arbitrary_depth() {
	let mut fields = IndexMap::new();
	fields.insert(
		"bodytext".to_string(),
		rich_text_field(json!({
			"contentsCss": ["EXT:site_editor/rte.css", "/web/base.css"],
			"stylesSet": {"import": "EXT:site_editor/styles.js"}
		})),
	);
	let resolver = resolver_for(content_schema(fields), EditorSettings::default());

	let configurations = resolver.resolve_field_configurations("tt_content").unwrap();

	let configuration = &configurations["bodytext"].configuration;
	assert_eq!(
		configuration["contentsCss"],
		json!(["/assets/ext/site_editor/rte.css", "/web/base.css"])
	);
	assert_eq!(
		configuration["stylesSet"]["import"],
		"/assets/ext/site_editor/styles.js"
	);
}

#[test]
fn list_options_are_flattened_to_strings() {
	let mut fields = IndexMap::new();
	fields.insert(
		"bodytext".to_string(),
		rich_text_field(json!({
			"extraPlugins": ["wordcount"],
			"removePlugins": ["image", "table"],
			"removeButtons": ["Underline"]
		})),
	);
	let resolver = resolver_for(content_schema(fields), EditorSettings::default());

	let configurations = resolver.resolve_field_configurations("tt_content").unwrap();

	let configuration = &configurations["bodytext"].configuration;
	assert_eq!(configuration["extraPlugins"], "wordcount");
	assert_eq!(configuration["removePlugins"], "image,table");
	assert_eq!(configuration["removeButtons"], "Underline");
}

#[test]
fn record_language_uses_iso_code() {
	let mut fields = IndexMap::new();
	fields.insert("bodytext".to_string(), rich_text_field(json!({})));
	let mut schema = content_schema(fields);
	schema.language_id = 2;
	let resolver = resolver_for(schema, EditorSettings::default());

	let configurations = resolver.resolve_field_configurations("tt_content").unwrap();

	assert_eq!(configurations["bodytext"].content_language(), Some("de"));
}

#[test]
fn default_language_is_normalized_and_verified() {
	let mut fields = IndexMap::new();
	fields.insert(
		"bodytext".to_string(),
		rich_text_field(json!({"defaultContentLanguage": "PT_br"})),
	);
	let resolver = resolver_for(content_schema(fields), EditorSettings::default());

	let configurations = resolver.resolve_field_configurations("tt_content").unwrap();

	assert_eq!(configurations["bodytext"].content_language(), Some("pt_BR"));
}

#[test]
fn external_plugins_extend_configuration_and_bootstrap_script() {
	let mut external_plugins = IndexMap::new();
	external_plugins.insert(
		"linkbrowser".to_string(),
		ExternalPluginSpec {
			resource: Some("EXT:site_editor/plugins/linkbrowser/plugin.js".to_string()),
			route: Some("rte_link_browser".to_string()),
			options: json!({"allowedTypes": "page,url"}),
		},
	);
	external_plugins.insert(
		"wordcount".to_string(),
		ExternalPluginSpec {
			resource: Some("/assets/vendor/wordcount/plugin.js".to_string()),
			route: None,
			options: json!({}),
		},
	);
	let mut fields = IndexMap::new();
	fields.insert(
		"bodytext".to_string(),
		FieldSchema {
			rich_text: Some(RichTextSchema {
				config: Some(json!({"extraPlugins": ["autogrow"]})),
				external_plugins,
			}),
		},
	);
	let resolver = resolver_for(content_schema(fields), EditorSettings::default());

	let configurations = resolver.resolve_field_configurations("tt_content").unwrap();
	let resolved = &configurations["bodytext"];

	// Plugin names append to the statically configured list in
	// registration order.
	assert_eq!(
		resolved.extra_plugin_names(),
		Some("autogrow,linkbrowser,wordcount")
	);

	// The route-backed plugin carries its reversed URL with the full
	// parameter block.
	assert_eq!(
		resolved.configuration["linkbrowser"]["allowedTypes"],
		"page,url"
	);
	assert_eq!(
		resolved.configuration["linkbrowser"]["routeUrl"],
		"/backend/rte/link-browser?table=tt_content&uid=1&fieldName=bodytext&recordType=text&pid=37"
	);

	assert_eq!(
		resolved.external_plugins,
		"CKEDITOR.plugins.addExternal('linkbrowser',\
		'/assets/ext/site_editor/plugins/linkbrowser/plugin.js','');\
		CKEDITOR.plugins.addExternal('wordcount',\
		'/assets/vendor/wordcount/plugin.js','');"
	);
}

#[test]
fn plugin_without_resource_is_a_configuration_error() {
	let mut external_plugins = IndexMap::new();
	external_plugins.insert("broken".to_string(), ExternalPluginSpec::default());
	let mut fields = IndexMap::new();
	fields.insert(
		"bodytext".to_string(),
		FieldSchema {
			rich_text: Some(RichTextSchema {
				config: Some(json!({})),
				external_plugins,
			}),
		},
	);
	let resolver = resolver_for(content_schema(fields), EditorSettings::default());

	let result = resolver.resolve_field_configurations("tt_content");

	assert!(matches!(result, Err(FronteditError::Configuration(_))));
}

#[test]
fn fields_without_rich_text_are_omitted() {
	let mut fields = IndexMap::new();
	fields.insert("header".to_string(), FieldSchema::default());
	fields.insert("bodytext".to_string(), rich_text_field(json!({})));
	let resolver = resolver_for(content_schema(fields), EditorSettings::default());

	let configurations = resolver.resolve_field_configurations("tt_content").unwrap();

	assert_eq!(configurations.len(), 1);
	assert!(configurations.contains_key("bodytext"));
	assert!(configurations["bodytext"].has_rich_text_configuration);
}

#[test]
fn missing_schema_resolves_to_empty_mapping() {
	let resolver = resolver_for(
		content_schema(IndexMap::new()),
		EditorSettings::default(),
	);

	let configurations = resolver.resolve_field_configurations("tx_news").unwrap();

	assert!(configurations.is_empty());
}

#[test]
fn serialized_shape_uses_camel_case_keys() {
	let mut fields = IndexMap::new();
	fields.insert("bodytext".to_string(), rich_text_field(json!({})));
	let resolver = resolver_for(content_schema(fields), EditorSettings::default());

	let configurations = resolver.resolve_field_configurations("tt_content").unwrap();
	let serialized = serde_json::to_value(&configurations).unwrap();

	let entry = &serialized["bodytext"];
	assert!(entry.get("configuration").is_some());
	assert_eq!(entry["externalPlugins"], "");
	assert_eq!(entry["hasRichTextConfiguration"], true);
}
