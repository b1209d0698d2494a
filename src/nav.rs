//! Navigation derived from the authorization grant: the sidebar link tree, the route allow-list,
//! and the sidebar highlight rule.
//!
//! Nothing here is stored. Both the tree and the allow-list are recomputed from the current grant,
//! so they cannot drift from it.

pub mod active;
pub mod allow;
pub mod icon;
pub mod tree;

pub use active::is_active;
pub use allow::{AllowList, flatten};
pub use icon::Icon;
pub use tree::{CompileOptions, LinkTree, MenuFallback, NavEntry, compile, compile_with};
