//! HTTP response representation

use bytes::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;

use frontedit_core::{FronteditError, Result};

/// HTTP response produced by the frontedit handlers
#[derive(Clone, Debug)]
pub struct Response {
	/// Response status
	pub status: StatusCode,
	/// Response headers
	pub headers: HeaderMap,
	/// Response body
	pub body: Bytes,
}

impl Response {
	/// Create a new response with the given status code
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// Create a response with HTTP 200 OK status
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Create a response with HTTP 400 Bad Request status
	pub fn bad_request() -> Self {
		Self::new(StatusCode::BAD_REQUEST)
	}

	/// Create a response with HTTP 401 Unauthorized status
	pub fn unauthorized() -> Self {
		Self::new(StatusCode::UNAUTHORIZED)
	}

	/// Set the response body
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Serialize `value` as the JSON response body
	///
	/// # Examples
	///
	/// ```
	/// use frontedit_http::Response;
	/// use serde_json::json;
	///
	/// let response = Response::ok()
	///     .json(&json!({"success": true, "message": "Renamed"}))
	///     .unwrap();
	/// assert_eq!(
	///     response.headers["content-type"].to_str().unwrap(),
	///     "application/json"
	/// );
	/// ```
	pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self> {
		let body = serde_json::to_vec(value)
			.map_err(|e| FronteditError::Configuration(format!("response serialization: {}", e)))?;
		self.headers
			.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		self.body = Bytes::from(body);
		Ok(self)
	}
}
