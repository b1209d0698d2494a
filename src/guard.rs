//! Route guard: decides whether a protected view may render for the current path.
//!
//! The allow-list is recomputed from the grant on every visit; nothing is cached between
//! navigations, so a mid-session role change takes effect on the next render.

// self
use crate::{
	_prelude::*,
	auth::AuthorizationGrant,
	config::RouteTable,
	nav::{AllowList, CompileOptions},
	obs,
	session::SessionContext,
	shell::Navigator,
};

/// Redirect targets used by the guard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardRoutes {
	/// Target when nothing at all is permitted.
	pub no_access: String,
	/// Target when the current path is not permitted.
	pub fallback: String,
}
impl Default for GuardRoutes {
	fn default() -> Self {
		Self::from(&RouteTable::default())
	}
}
impl From<&RouteTable> for GuardRoutes {
	fn from(routes: &RouteTable) -> Self {
		Self { no_access: routes.no_access.clone(), fallback: routes.dashboard.clone() }
	}
}

/// Why a path was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DenyReason {
	/// The allow-list is empty.
	NoAccess,
	/// The path is not in a non-empty allow-list.
	NotPermitted,
}

/// Outcome of [`decide`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
	/// Render the protected view.
	Permit,
	/// Replace history with `redirect_to`.
	Deny {
		/// Why the path was refused.
		reason: DenyReason,
		/// Redirect target.
		redirect_to: String,
	},
}
impl GuardDecision {
	/// Stable label suitable for span or metric fields.
	pub const fn label(&self) -> &'static str {
		match self {
			Self::Permit => "permit",
			Self::Deny { reason: DenyReason::NoAccess, .. } => "deny_no_access",
			Self::Deny { reason: DenyReason::NotPermitted, .. } => "deny_not_permitted",
		}
	}
}

/// Pure guard decision for `path` against `allow`.
pub fn decide(allow: &AllowList, path: &str, routes: &GuardRoutes) -> GuardDecision {
	if allow.is_empty() {
		return GuardDecision::Deny {
			reason: DenyReason::NoAccess,
			redirect_to: routes.no_access.clone(),
		};
	}
	if !allow.contains(path) {
		return GuardDecision::Deny {
			reason: DenyReason::NotPermitted,
			redirect_to: routes.fallback.clone(),
		};
	}

	GuardDecision::Permit
}

/// Guard lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
	/// No visit evaluated yet.
	#[default]
	Unresolved,
	/// Last visit was refused.
	Denied {
		/// Where the guard redirected to.
		redirect_to: String,
	},
	/// Last visit was permitted.
	Permitted,
}

/// What the shell renders for a guarded route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page<V> {
	/// Neutral placeholder; never the protected content.
	Loading,
	/// The protected view.
	View(V),
}
impl<V> Page<V> {
	/// Returns the view when permitted.
	pub fn into_view(self) -> Option<V> {
		match self {
			Self::Loading => None,
			Self::View(v) => Some(v),
		}
	}

	/// Returns `true` for the placeholder.
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}
}

/// Stateful guard wrapping one protected view.
pub struct RouteGuard<N>
where
	N: ?Sized + Navigator,
{
	navigator: Arc<N>,
	routes: GuardRoutes,
	options: CompileOptions,
	state: Mutex<GuardState>,
}
impl<N> RouteGuard<N>
where
	N: ?Sized + Navigator,
{
	/// Creates a guard in the [`GuardState::Unresolved`] state.
	pub fn new(navigator: Arc<N>, routes: GuardRoutes, options: CompileOptions) -> Self {
		Self { navigator, routes, options, state: Mutex::new(GuardState::Unresolved) }
	}

	/// Current state.
	pub fn state(&self) -> GuardState {
		self.state.lock().clone()
	}

	/// Evaluates a visit to `path` with the given grant.
	///
	/// On denial the navigator's history entry is replaced and `view` is dropped unrendered.
	pub fn visit<V, F>(&self, path: &str, grant: Option<&AuthorizationGrant>, view: F) -> Page<V>
	where
		F: FnOnce() -> V,
	{
		let allow = AllowList::from_grant(grant, self.options);
		let decision = decide(&allow, path, &self.routes);

		obs::record_guard_decision(decision.label());
		crate::obs::event!(debug, path, decision = decision.label(), "route guard evaluated");

		match decision {
			GuardDecision::Permit => {
				*self.state.lock() = GuardState::Permitted;

				Page::View(view())
			},
			GuardDecision::Deny { redirect_to, .. } => {
				*self.state.lock() = GuardState::Denied { redirect_to: redirect_to.clone() };

				self.navigator.replace(&redirect_to);

				Page::Loading
			},
		}
	}

	/// Evaluates a visit using the grant currently held by `session`.
	pub fn visit_session<V, F>(&self, path: &str, session: &SessionContext, view: F) -> Page<V>
	where
		F: FnOnce() -> V,
	{
		self.visit(path, session.grant().as_ref(), view)
	}
}
impl<N> Debug for RouteGuard<N>
where
	N: ?Sized + Navigator,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RouteGuard")
			.field("routes", &self.routes)
			.field("options", &self.options)
			.field("state", &*self.state.lock())
			.finish()
	}
}
