//! # frontedit-http
//!
//! A deliberately small HTTP seam: just enough request/response
//! vocabulary for the frontedit handlers to be driven by whatever server
//! embeds them. The CMS's own routing and session layers live outside
//! this workspace; they hand a [`Request`] in and get a [`Response`]
//! back.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

mod auth;
mod request;
mod response;

pub use auth::AuthContext;
pub use request::{Request, RequestBuilder};
pub use response::Response;

use async_trait::async_trait;
use frontedit_core::Result;

/// Request handler seam
///
/// Implemented by the frontedit endpoints; the embedding server calls
/// [`Handler::handle`] once per request.
#[async_trait]
pub trait Handler: Send + Sync {
	/// Handle a single request
	async fn handle(&self, request: Request) -> Result<Response>;
}
