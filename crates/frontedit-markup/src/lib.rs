//! # frontedit-markup
//!
//! Assembles the markup that makes rendered content blocks interactively
//! editable: the editable-container wrapper with its control span and
//! action URLs, and the drop-zone marker accepting drag-and-drop
//! placement of new sibling blocks. All builders are pure: same input,
//! byte-identical output.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

mod context;
mod wrapper;

pub use context::{check_if_content_element_is_hidden, record_title, WrapperContext};
pub use wrapper::ContentEditableWrapper;
