//! Compiles an [`AuthorizationGrant`] into the sidebar link tree.

// self
use crate::{
	_prelude::*,
	auth::{AuthorizationGrant, Menu},
	nav::Icon,
};

/// Ordered top-level navigation entries.
pub type LinkTree = Vec<NavEntry>;

/// One sidebar entry; nesting is at most one level deep.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
	/// Display title.
	pub title: String,
	/// Target route; empty for parent entries that only group children.
	pub href: String,
	/// Icon chosen by title.
	pub icon: Icon,
	/// Nested entries.
	#[serde(rename = "sub", default, skip_serializing_if = "Vec::is_empty")]
	pub children: Vec<NavEntry>,
}
impl NavEntry {
	/// Builds a childless entry whose icon is looked up by `title`.
	pub fn link(title: impl Into<String>, href: impl Into<String>) -> Self {
		let title = title.into();
		let icon = Icon::for_title(&title);

		Self { title, href: href.into(), icon, children: Vec::new() }
	}

	/// Returns `true` for entries that group children.
	pub fn is_parent(&self) -> bool {
		!self.children.is_empty()
	}
}

/// What to emit for a menu whose sub-menus are all hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuFallback {
	/// Emit a direct link to the first sub-menu's URL, visible or not.
	#[default]
	FirstSubMenu,
	/// Omit the menu from navigation and from the allow-list.
	Unlisted,
}

/// Options accepted by [`compile_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompileOptions {
	/// Policy for menus without visible sub-menus.
	#[serde(default)]
	pub fallback: MenuFallback,
}

/// Compiles the grant with default options; an absent grant yields an empty tree.
pub fn compile(grant: Option<&AuthorizationGrant>) -> LinkTree {
	compile_with(grant, CompileOptions::default())
}

/// Compiles the grant, preserving role, then menu, then sub-menu order.
pub fn compile_with(grant: Option<&AuthorizationGrant>, options: CompileOptions) -> LinkTree {
	let Some(grant) = grant else {
		return Vec::new();
	};

	grant.menus().filter_map(|menu| compile_menu(menu, options.fallback)).collect()
}

fn compile_menu(menu: &Menu, fallback: MenuFallback) -> Option<NavEntry> {
	let children = menu
		.sub_menus
		.iter()
		.filter(|sub| sub.is_visible())
		.filter_map(|sub| sub.name.as_deref().map(|name| NavEntry::link(name, sub.url.as_str())))
		.collect::<Vec<_>>();

	if !children.is_empty() {
		return Some(NavEntry { children, ..NavEntry::link(menu.name.as_str(), "") });
	}

	match fallback {
		MenuFallback::FirstSubMenu => {
			let href = menu.sub_menus.first().map(|sub| sub.url.as_str()).unwrap_or_default();

			Some(NavEntry::link(menu.name.as_str(), href))
		},
		MenuFallback::Unlisted => None,
	}
}
