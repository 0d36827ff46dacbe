//! # frontedit-editor
//!
//! Resolves, per editable field of a content record, the configuration
//! object the browser-side rich-text editor widget receives: base field
//! configuration merged with installation overrides, content language,
//! resolved resource URLs, and dynamically registered external plugins.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

mod resolver;
mod schema;
mod settings;

pub use resolver::{EditorConfigResolver, ResolvedEditorConfig};
pub use schema::{
	CompiledRecordSchema, ExternalPluginSpec, FieldSchema, RichTextSchema, SchemaProvider,
};
pub use settings::EditorSettings;
