//! # frontedit-urls
//!
//! URL plumbing for the editing overlay: reverse resolution of named
//! backend routes, rewriting of extension-relative resource paths to
//! web-servable URLs, and the return-URL post-processing applied to
//! every action link embedded in editable markup.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

mod resources;
mod routes;

pub use resources::{ExtensionResourceResolver, ResourceResolver};
pub use routes::{RouteMap, RouteParams, RouteResolver};

/// Append a `returnUrl` query parameter so that activating `url` records
/// a navigation back to `return_to`.
///
/// # Examples
///
/// ```
/// use frontedit_urls::with_return_url;
///
/// assert_eq!(
///     with_return_url("/backend/record-edit?uid=1", "/page/4"),
///     "/backend/record-edit?uid=1&returnUrl=%2Fpage%2F4"
/// );
/// assert_eq!(
///     with_return_url("/backend/record-new", "/page/4"),
///     "/backend/record-new?returnUrl=%2Fpage%2F4"
/// );
/// ```
pub fn with_return_url(url: &str, return_to: &str) -> String {
	let separator = if url.contains('?') { '&' } else { '?' };
	let encoded = serde_urlencoded::to_string([("returnUrl", return_to)]).unwrap_or_default();
	format!("{}{}{}", url, separator, encoded)
}
