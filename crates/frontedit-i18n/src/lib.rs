//! # frontedit-i18n
//!
//! The locale knowledge the editor configuration needs: which locales the
//! installation knows about, which ISO code a record language maps to,
//! and the normalization applied to configured default languages.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

mod content;
mod registry;

pub use content::{normalize_locale, resolve_content_language};
pub use registry::{Locales, SystemLocales};
