//! HTTP verb dispatch for the page tree endpoint

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use hyper::Method;
use serde_json::json;
use tracing::{debug, warn};

use frontedit_core::{FronteditError, Result};
use frontedit_http::{Handler, Request, Response};

use crate::commands::TreeCommands;

/// Tree actions reachable through the endpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
	Update,
	Save,
	Delete,
}

/// CRUD endpoint for the page tree
///
/// GET, HEAD and PUT dispatch to update, POST to save and DELETE to
/// delete; any other verb is rejected before dispatch. Update and save
/// share the label-update routine. GET and HEAD are kept on update for
/// compatibility with the overlay's client script; since update refuses
/// requests without a form body, a bodyless GET ends in a 400 before any
/// tree command runs.
pub struct PageTreeCrudHandler {
	commands: Arc<dyn TreeCommands>,
}

impl PageTreeCrudHandler {
	/// Create the handler over the given tree commands
	pub fn new(commands: Arc<dyn TreeCommands>) -> Self {
		Self { commands }
	}

	fn resolve_action(method: &Method) -> Option<Action> {
		if method == Method::GET || method == Method::HEAD || method == Method::PUT {
			Some(Action::Update)
		} else if method == Method::POST {
			Some(Action::Save)
		} else if method == Method::DELETE {
			Some(Action::Delete)
		} else {
			None
		}
	}

	fn client_error(message: &str) -> Result<Response> {
		warn!(reason = message, "rejecting page tree request");
		Response::bad_request().json(&json!({
			"success": false,
			"message": message,
		}))
	}

	fn require_session(request: &Request) -> Result<()> {
		if request.auth.is_authenticated() {
			Ok(())
		} else {
			Err(FronteditError::Authorization(
				"This action is only allowed with an authenticated editing session!".to_string(),
			))
		}
	}

	fn require_field<'a>(
		body: &'a HashMap<String, String>,
		field: &str,
	) -> std::result::Result<&'a str, String> {
		match body.get(field).map(String::as_str) {
			Some(value) if !value.is_empty() => Ok(value),
			_ => Err(format!("Property \"{}\" is missing from the body!", field)),
		}
	}

	fn update(&self, request: &Request) -> Result<Response> {
		Self::require_session(request)?;
		if request.body.is_empty() {
			return Self::client_error("A body is missing in the request!");
		}
		let body = match request.form_data() {
			Ok(body) => body,
			Err(error) => return Self::client_error(&error.to_string()),
		};
		let identifier = match Self::require_field(&body, "treeNodeIdentifier") {
			Ok(identifier) => identifier,
			Err(message) => return Self::client_error(&message),
		};
		let label = match Self::require_field(&body, "treeNodeLabel") {
			Ok(label) => label,
			Err(message) => return Self::client_error(&message),
		};

		let Some(node) = self.commands.get_node(identifier) else {
			return Self::client_error(&format!(
				"The page tree node with identifier \"{}\" does not exist!",
				identifier
			));
		};
		self.commands.update_node_label(&node, label)?;
		debug!(identifier, label, "updated page tree node label");

		Response::ok().json(&json!({
			"success": true,
			"message": label,
		}))
	}

	fn delete(&self, request: &Request) -> Result<Response> {
		Self::require_session(request)?;
		if request.body.is_empty() {
			return Self::client_error("A body is missing in the request!");
		}
		let body = match request.form_data() {
			Ok(body) => body,
			Err(error) => return Self::client_error(&error.to_string()),
		};
		let identifier = match Self::require_field(&body, "treeNodeIdentifier") {
			Ok(identifier) => identifier,
			Err(message) => return Self::client_error(&message),
		};

		let Some(node) = self.commands.get_node(identifier) else {
			return Self::client_error(&format!(
				"The page tree node with identifier \"{}\" does not exist!",
				identifier
			));
		};
		self.commands.remove_node(&node)?;
		debug!(identifier, "removed page tree node");

		Response::ok().json(&json!({
			"success": true,
			"message": identifier,
		}))
	}
}

#[async_trait]
impl Handler for PageTreeCrudHandler {
	async fn handle(&self, request: Request) -> Result<Response> {
		let Some(action) = Self::resolve_action(&request.method) else {
			return Self::client_error("Bad Request.");
		};
		match action {
			// Save shares the label-update routine with update.
			Action::Update | Action::Save => self.update(&request),
			Action::Delete => self.delete(&request),
		}
	}
}
