//! # frontedit
//!
//! Server-side glue for an in-page content-editing overlay: resolves the
//! rich-text editor configuration delivered per editable field of a
//! content record, and assembles the wrapper and drop-zone markup that
//! makes rendered content blocks interactively editable and movable.
//!
//! The CMS's storage, routing and session subsystems stay outside this
//! workspace; frontedit consumes them through narrow collaborator traits
//! ([`SchemaProvider`](editor::SchemaProvider),
//! [`RouteResolver`](urls::RouteResolver),
//! [`ResourceResolver`](urls::ResourceResolver),
//! [`Locales`](i18n::Locales), [`TreeCommands`](tree::TreeCommands)) and
//! ships in-memory implementations for tests and standalone use.
//!
//! ## Quick Example
//!
//! ```rust
//! use std::sync::Arc;
//! use frontedit::prelude::*;
//!
//! let mut routes = RouteMap::new();
//! routes.register("record_edit", "/backend/record/edit");
//! routes.register("record_new", "/backend/record/new");
//!
//! let wrapper = ContentEditableWrapper::new(Arc::new(routes), "/page/4");
//! let context = WrapperContext {
//!     table: "tt_content".to_string(),
//!     record_id: 1,
//!     parent_page_id: 37,
//!     column_position: 0,
//!     is_hidden: false,
//!     title: "Teaser".to_string(),
//!     rendered_content: "<p>Hello</p>".to_string(),
//!     default_values_for_new_sibling: Default::default(),
//! };
//! let markup = wrapper.wrap_editable(&context).unwrap();
//! assert!(markup.starts_with("<div class=\"frontedit__ce\""));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub use frontedit_core::{config, error, escape, FronteditError, Result};

pub use frontedit_editor as editor;
pub use frontedit_http as http;
pub use frontedit_i18n as i18n;
pub use frontedit_markup as markup;
pub use frontedit_tree as tree;
pub use frontedit_urls as urls;

/// Convenient re-exports of commonly used items
pub mod prelude {
	pub use frontedit_core::{FronteditError, Result};
	pub use frontedit_editor::{
		CompiledRecordSchema, EditorConfigResolver, EditorSettings, ExternalPluginSpec,
		FieldSchema, ResolvedEditorConfig, RichTextSchema, SchemaProvider,
	};
	pub use frontedit_http::{AuthContext, Handler, Request, Response};
	pub use frontedit_i18n::{Locales, SystemLocales};
	pub use frontedit_markup::{ContentEditableWrapper, WrapperContext};
	pub use frontedit_tree::{InMemoryTreeCommands, PageTreeCrudHandler, TreeCommands, TreeNode};
	pub use frontedit_urls::{
		with_return_url, ExtensionResourceResolver, ResourceResolver, RouteMap, RouteParams,
		RouteResolver,
	};
}
