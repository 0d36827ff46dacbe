//! HTTP request representation

use std::collections::HashMap;

use bytes::Bytes;
use hyper::{HeaderMap, Method};
use serde::de::DeserializeOwned;

use frontedit_core::{FronteditError, Result};

use crate::auth::AuthContext;

/// HTTP request as seen by the frontedit handlers
#[derive(Clone, Debug)]
pub struct Request {
	/// Request method
	pub method: Method,
	/// Request path, without scheme or host
	pub path: String,
	/// Request headers
	pub headers: HeaderMap,
	/// Raw request body
	pub body: Bytes,
	/// Authorization context established by the session layer
	pub auth: AuthContext,
}

impl Request {
	/// Start building a request
	///
	/// # Examples
	///
	/// ```
	/// use frontedit_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::POST)
	///     .path("/frontedit/page-tree")
	///     .form_body(&[("treeNodeIdentifier", "12")])
	///     .build();
	/// assert_eq!(request.method, Method::POST);
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}

	/// Parse the body as urlencoded form data
	pub fn form_data(&self) -> Result<HashMap<String, String>> {
		serde_urlencoded::from_bytes(&self.body)
			.map_err(|e| FronteditError::Validation(format!("malformed form body: {}", e)))
	}

	/// Parse the body as JSON
	pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
		serde_json::from_slice(&self.body)
			.map_err(|e| FronteditError::Validation(format!("malformed JSON body: {}", e)))
	}
}

/// Builder for [`Request`]
#[derive(Debug)]
pub struct RequestBuilder {
	method: Method,
	path: String,
	headers: HeaderMap,
	body: Bytes,
	auth: AuthContext,
}

impl Default for RequestBuilder {
	fn default() -> Self {
		Self {
			method: Method::GET,
			path: "/".to_string(),
			headers: HeaderMap::new(),
			body: Bytes::new(),
			auth: AuthContext::anonymous(),
		}
	}
}

impl RequestBuilder {
	/// Set the request method
	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	/// Set the request path
	pub fn path(mut self, path: impl Into<String>) -> Self {
		self.path = path.into();
		self
	}

	/// Set the request headers
	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	/// Set the raw request body
	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Set an urlencoded form body from key/value pairs
	pub fn form_body(mut self, fields: &[(&str, &str)]) -> Self {
		let encoded = serde_urlencoded::to_string(fields).unwrap_or_default();
		self.body = Bytes::from(encoded);
		self
	}

	/// Set the authorization context
	pub fn auth(mut self, auth: AuthContext) -> Self {
		self.auth = auth;
		self
	}

	/// Finish building
	pub fn build(self) -> Request {
		Request {
			method: self.method,
			path: self.path,
			headers: self.headers,
			body: self.body,
			auth: self.auth,
		}
	}
}
