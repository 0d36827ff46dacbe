//! # frontedit-core
//!
//! Shared building blocks for the frontedit workspace: the common error
//! type, the configuration-tree operations used when resolving editor
//! configurations, and the escaping helpers the markup builders rely on.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod escape;

/// Common error types
pub mod error {
	use thiserror::Error;

	/// Errors surfaced by the frontedit crates
	#[derive(Error, Debug)]
	pub enum FronteditError {
		/// Missing or malformed client input, unknown identifiers,
		/// unsupported HTTP verbs. Mapped to 400 at the HTTP boundary.
		#[error("{0}")]
		Validation(String),

		/// No authenticated editing session. Aborts the request.
		#[error("{0}")]
		Authorization(String),

		/// Malformed server-side configuration, e.g. an external plugin
		/// registration without a resource path.
		#[error("configuration error: {0}")]
		Configuration(String),

		/// A reverse lookup missed, e.g. an unregistered route name.
		#[error("not found: {0}")]
		NotFound(String),
	}

	/// Result type used throughout the frontedit crates
	pub type Result<T> = std::result::Result<T, FronteditError>;
}

pub use error::{FronteditError, Result};
