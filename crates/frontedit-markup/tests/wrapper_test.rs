//! Byte-exactness tests for the wrapper and drop-zone builders

use std::sync::Arc;

use serde_json::{json, Map};

use frontedit_markup::{ContentEditableWrapper, WrapperContext};
use frontedit_urls::RouteMap;

const RETURN_URL: &str = "/page/4";

fn wrapper() -> ContentEditableWrapper {
	let mut routes = RouteMap::new();
	routes.register("record_edit", "/backend/record/edit");
	routes.register("record_new", "/backend/record/new");
	ContentEditableWrapper::new(Arc::new(routes), RETURN_URL)
}

fn content_context(is_hidden: bool) -> WrapperContext {
	WrapperContext {
		table: "tt_content".to_string(),
		record_id: 1,
		parent_page_id: 37,
		column_position: 0,
		is_hidden,
		title: "Test title".to_string(),
		rendered_content: "This is my content".to_string(),
		default_values_for_new_sibling: Map::new(),
	}
}

fn expected_edit_url() -> String {
	format!(
		"/backend/record/edit?table=tt_content&uid=1&returnUrl={}",
		"%2Fpage%2F4"
	)
}

fn expected_new_url() -> String {
	format!(
		"/backend/record/new?table=tt_content&insertAfter=1&pid=37&returnUrl={}",
		"%2Fpage%2F4"
	)
}

fn expected_icons(hidden: bool) -> String {
	let (action, label) = if hidden { ("unhide", "Unhide") } else { ("hide", "Hide") };
	format!(
		"<span class=\"frontedit__action\" data-action=\"{}\" title=\"{}\"></span>\
		<span class=\"frontedit__action\" data-action=\"delete\" title=\"Delete\"></span>",
		action, label
	)
}

fn expected_wrap(hidden: bool) -> String {
	format!(
		"<div class=\"frontedit__ce\" title=\"Test title\" data-movable=\"1\" \
		ondragstart=\"window.parent.FrontEdit.dragCeStart(event)\" \
		ondragend=\"window.parent.FrontEdit.dragCeEnd(event)\">\
		<span class=\"frontedit__inline-actions\" data-table=\"tt_content\" \
		data-uid=\"1\" data-hidden=\"{}\" data-cid=\"0\" \
		data-edit-url=\"{}\" data-new-url=\"{}\">{}</span>\
		This is my content</div>",
		if hidden { "1" } else { "0" },
		expected_edit_url(),
		expected_new_url(),
		expected_icons(hidden),
	)
}

#[test]
fn wrap_editable_produces_expected_markup() {
	let output = wrapper().wrap_editable(&content_context(false)).unwrap();

	assert_eq!(output, expected_wrap(false));
}

#[test]
fn hidden_record_differs_only_in_flag_and_icons() {
	let visible = wrapper().wrap_editable(&content_context(false)).unwrap();
	let hidden = wrapper().wrap_editable(&content_context(true)).unwrap();

	assert_eq!(hidden, expected_wrap(true));
	assert_eq!(
		visible
			.replace("data-hidden=\"0\"", "data-hidden=\"1\"")
			.replace(&expected_icons(false), &expected_icons(true)),
		hidden
	);
}

#[test]
fn wrap_editable_escapes_the_title_attribute() {
	let mut context = content_context(false);
	context.title = "Say \"hi\" & <go>".to_string();

	let output = wrapper().wrap_editable(&context).unwrap();

	assert!(output.contains("title=\"Say &quot;hi&quot; &amp; &lt;go&gt;\""));
}

#[test]
fn dropzone_follows_content_with_position_metadata() {
	let output = wrapper().wrap_with_dropzone(&content_context(false)).unwrap();

	let expected = format!(
		"This is my content\
		<div class=\"frontedit__dropzone\" \
		ondrop=\"window.parent.FrontEdit.dropCe(event)\" \
		ondragover=\"window.parent.FrontEdit.dragCeOver(event)\" \
		ondragleave=\"window.parent.FrontEdit.dragCeLeave(event)\" \
		data-new-url=\"{}\" data-moveafter=\"1\" \
		data-colpos=\"0\" data-defvals=\"{{}}\"></div>",
		expected_new_url(),
	);
	assert_eq!(output, expected);
}

#[test]
fn dropzone_escapes_default_values_json() {
	let mut values = Map::new();
	values.insert("colPos".to_string(), json!(0));
	values.insert("CType".to_string(), json!("textmedia"));
	let context = content_context(false).with_default_values(values);

	let output = wrapper().wrap_with_dropzone(&context).unwrap();

	assert!(output.contains(
		"data-defvals=\"{&quot;CType&quot;:&quot;textmedia&quot;,&quot;colPos&quot;:0}\""
	));
}

#[test]
fn same_input_produces_identical_output() {
	let context = content_context(false);
	let wrapper = wrapper();

	assert_eq!(
		wrapper.wrap_editable(&context).unwrap(),
		wrapper.wrap_editable(&context).unwrap()
	);
}
