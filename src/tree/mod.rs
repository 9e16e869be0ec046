//! Display tree for normalized documents.
//!
//! [`build_tree`] turns a [`crate::model::NormalizedDocument`] into labeled
//! [`TreeNode`]s with path-derived ids; [`render_tree`] draws them as text.

mod builder;
mod node;
mod render;

pub use builder::{build_tree, TreeBuilder, NO_URL, SUBMODELS_ROOT};
pub use node::{display_value, find_in, TreeNode};
pub use render::{render_tree, truncate_label, RenderOptions};

pub(crate) use render::ansi_color;
