//! # frontedit-tree
//!
//! The page-tree endpoint of the editing overlay: one HTTP surface
//! dispatching verbs onto tree actions, validating the request body and
//! editing session, and driving the CMS's tree commands through a narrow
//! collaborator trait.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

mod commands;
mod handler;

pub use commands::{InMemoryTreeCommands, TreeCommands, TreeNode};
pub use handler::PageTreeCrudHandler;
