//! Editable-wrapper and drop-zone string builders

use std::sync::Arc;

use frontedit_core::escape::escape_html_attribute;
use frontedit_core::{FronteditError, Result};
use frontedit_urls::{with_return_url, RouteParams, RouteResolver};

use crate::context::WrapperContext;

/// Route name of the backend record editor
const ROUTE_RECORD_EDIT: &str = "record_edit";

/// Route name of the backend new-record wizard
const ROUTE_RECORD_NEW: &str = "record_new";

/// Wraps rendered content blocks with the markup the editing overlay's
/// drag/drop and inline-edit scripts hook into
///
/// One instance per rendered page request; `return_url` is the URL of
/// that page, recorded on every action link so the backend navigates
/// back after the action completes.
pub struct ContentEditableWrapper {
	routes: Arc<dyn RouteResolver>,
	return_url: String,
}

impl ContentEditableWrapper {
	/// Create a wrapper for one rendered page
	pub fn new(routes: Arc<dyn RouteResolver>, return_url: impl Into<String>) -> Self {
		Self {
			routes,
			return_url: return_url.into(),
		}
	}

	/// Wrap a rendered content block in the editable container.
	///
	/// The control span carries the record coordinates and action URLs
	/// the overlay scripts address by attribute name; the rendered
	/// content follows it unescaped. Hidden and visible records produce
	/// output differing only in the `data-hidden` flag and the icon set.
	pub fn wrap_editable(&self, context: &WrapperContext) -> Result<String> {
		let edit_url = self.render_edit_url(&context.table, context.record_id)?;
		let new_url = self.render_new_url(context)?;

		Ok(format!(
			concat!(
				"<div class=\"frontedit__ce\" title=\"{title}\" data-movable=\"1\"",
				" ondragstart=\"window.parent.FrontEdit.dragCeStart(event)\"",
				" ondragend=\"window.parent.FrontEdit.dragCeEnd(event)\">",
				"<span class=\"frontedit__inline-actions\" data-table=\"{table}\"",
				" data-uid=\"{uid}\" data-hidden=\"{hidden}\" data-cid=\"{cid}\"",
				" data-edit-url=\"{edit_url}\" data-new-url=\"{new_url}\">{icons}</span>",
				"{content}</div>",
			),
			title = escape_html_attribute(&context.title),
			table = context.table,
			uid = context.record_id,
			hidden = if context.is_hidden { "1" } else { "0" },
			cid = context.column_position,
			edit_url = edit_url,
			new_url = new_url,
			icons = render_inline_action_icons(context.is_hidden),
			content = context.rendered_content,
		))
	}

	/// Append the drop-zone marker after a rendered content block.
	///
	/// The marker addresses the position a dropped sibling is created
	/// at: the anchor record to insert after, the target column, and an
	/// attribute-escaped JSON encoding of the default field values.
	pub fn wrap_with_dropzone(&self, context: &WrapperContext) -> Result<String> {
		let new_url = self.render_new_url(context)?;
		let default_values =
			serde_json::to_string(&context.default_values_for_new_sibling).map_err(|e| {
				FronteditError::Configuration(format!("default values serialization: {}", e))
			})?;

		Ok(format!(
			concat!(
				"{content}",
				"<div class=\"frontedit__dropzone\"",
				" ondrop=\"window.parent.FrontEdit.dropCe(event)\"",
				" ondragover=\"window.parent.FrontEdit.dragCeOver(event)\"",
				" ondragleave=\"window.parent.FrontEdit.dragCeLeave(event)\"",
				" data-new-url=\"{new_url}\" data-moveafter=\"{uid}\"",
				" data-colpos=\"{colpos}\" data-defvals=\"{defvals}\"></div>",
			),
			content = context.rendered_content,
			new_url = new_url,
			uid = context.record_id,
			colpos = context.column_position,
			defvals = escape_html_attribute(&default_values),
		))
	}

	/// URL opening the backend editor for the record, with return
	/// navigation recorded
	pub fn render_edit_url(&self, table: &str, record_id: i64) -> Result<String> {
		let params = RouteParams::new()
			.param("table", table)
			.param("uid", record_id);
		let url = self.routes.reverse(ROUTE_RECORD_EDIT, &params)?;
		Ok(with_return_url(&url, &self.return_url))
	}

	fn render_new_url(&self, context: &WrapperContext) -> Result<String> {
		let params = RouteParams::new()
			.param("table", &context.table)
			.param("insertAfter", context.record_id)
			.param("pid", context.parent_page_id);
		let url = self.routes.reverse(ROUTE_RECORD_NEW, &params)?;
		Ok(with_return_url(&url, &self.return_url))
	}
}

/// Inline action icons for the record's current visibility state
fn render_inline_action_icons(hidden: bool) -> String {
	let (action, label) = if hidden {
		("unhide", "Unhide")
	} else {
		("hide", "Hide")
	};
	format!(
		concat!(
			"<span class=\"frontedit__action\" data-action=\"{action}\" title=\"{label}\"></span>",
			"<span class=\"frontedit__action\" data-action=\"delete\" title=\"Delete\"></span>",
		),
		action = action,
		label = label,
	)
}
