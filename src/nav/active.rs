//! Active-link matching for the sidebar.

/// Sidebar highlight rule: `pathname` is under `nav_href` once the leading `/` is dropped from both.
///
/// The root entry (`"/"`) only highlights on the root path; every other href highlights itself and
/// everything nested below it.
pub fn is_active(nav_href: &str, pathname: &str) -> bool {
	let nav = nav_href.strip_prefix('/').unwrap_or(nav_href);
	let path = pathname.strip_prefix('/').unwrap_or(pathname);

	if nav.is_empty() {
		return path.is_empty();
	}

	path.starts_with(nav)
}
