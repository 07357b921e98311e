//! Framework-free view layer.
//!
//! Views are plain functions from state to an `Element` tree. Styling is
//! left to an external stylesheet; the tree only carries class names.

pub mod classes;
pub mod element;

pub use classes::ClassList;
pub use element::{Element, Node, ACTION_ATTR};
