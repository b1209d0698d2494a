//! Session store: credential, expiry, profile, and grant behind one injectable handle.
//!
//! [`SessionContext`] is cheap to clone and shared by the client, the route guard, and the shell.
//! Every mutation runs under a single write lock and is persisted before the lock is released,
//! so readers only ever see whole states. The persisted value is the envelope
//! `{"state": {...}, "version": 0}` stored under the configured key.

// self
use crate::{
	_prelude::*,
	auth::{AuthorizationGrant, Credential, SessionExpiry, UserProfile},
	nav::{AllowList, CompileOptions},
	store::{MemoryStorage, SessionStorage, StoreError},
};

/// Snapshot of everything the session holds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
	/// Signed-in user's profile.
	#[serde(rename = "userDetail", default)]
	pub profile: Option<UserProfile>,
	/// Signed-in user's authorization grant.
	#[serde(rename = "userAuthorization", default)]
	pub grant: Option<AuthorizationGrant>,
	/// Bearer credential.
	#[serde(rename = "token", default)]
	pub credential: Option<Credential>,
	/// Credential expiry.
	#[serde(rename = "expirationTime", default)]
	pub expiry: Option<SessionExpiry>,
}
impl SessionState {
	/// Returns `true` once a credential is stored.
	pub fn is_authenticated(&self) -> bool {
		self.credential.is_some()
	}

	/// Returns `true` when an expiry is stored and `now` is at or past it.
	pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
		self.expiry.as_ref().is_some_and(|expiry| expiry.is_expired_at(now))
	}

	/// Returns `true` when credential, expiry, profile, and grant are all present.
	pub fn is_complete(&self) -> bool {
		self.credential.is_some()
			&& self.expiry.is_some()
			&& self.profile.is_some()
			&& self.grant.is_some()
	}
}

/// Envelope written to durable storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
	/// Persisted session fields.
	pub state: SessionState,
	/// Layout version.
	#[serde(default)]
	pub version: u32,
}
impl PersistedSession {
	/// Layout version written by this crate.
	pub const VERSION: u32 = 0;
}

/// Shared handle to the session store.
#[derive(Clone)]
pub struct SessionContext(Arc<SessionInner>);
impl SessionContext {
	/// Opens the session persisted under `key`, treating absent or corrupt data as logged out.
	pub fn open(storage: Arc<dyn SessionStorage>, key: impl Into<String>) -> Self {
		let key = key.into();
		let state = restore(storage.as_ref(), &key);

		Self(Arc::new(SessionInner {
			key,
			storage,
			tracked: RwLock::new(Tracked { state, generation: 0 }),
		}))
	}

	/// Opens an empty session over fresh in-memory storage.
	pub fn in_memory(key: impl Into<String>) -> Self {
		Self::open(Arc::new(MemoryStorage::default()), key)
	}

	/// Storage key the session persists under.
	pub fn key(&self) -> &str {
		&self.0.key
	}

	/// Clones the current state.
	pub fn snapshot(&self) -> SessionState {
		self.0.tracked.read().state.clone()
	}

	/// Counter bumped by every credential change and every [`SessionContext::clear_all`].
	pub fn generation(&self) -> u64 {
		self.0.tracked.read().generation
	}

	/// Current credential, if any.
	pub fn credential(&self) -> Option<Credential> {
		self.0.tracked.read().state.credential.clone()
	}

	/// Current expiry, if any.
	pub fn expiry(&self) -> Option<SessionExpiry> {
		self.0.tracked.read().state.expiry.clone()
	}

	/// Current grant, if any.
	pub fn grant(&self) -> Option<AuthorizationGrant> {
		self.0.tracked.read().state.grant.clone()
	}

	/// Returns `true` once a credential is stored.
	pub fn is_authenticated(&self) -> bool {
		self.0.tracked.read().state.is_authenticated()
	}

	/// Returns `true` when the stored expiry is at or before `now`.
	pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
		self.0.tracked.read().state.is_expired_at(now)
	}

	/// Allow-list derived from the current grant.
	pub fn allow_list(&self, options: CompileOptions) -> AllowList {
		AllowList::from_grant(self.0.tracked.read().state.grant.as_ref(), options)
	}

	/// Replaces the profile.
	pub fn set_profile(&self, profile: UserProfile) -> Result<(), StoreError> {
		self.mutate(false, |state| state.profile = Some(profile))
	}

	/// Replaces the grant.
	pub fn set_grant(&self, grant: AuthorizationGrant) -> Result<(), StoreError> {
		self.mutate(false, |state| state.grant = Some(grant))
	}

	/// Replaces the credential.
	pub fn set_credential(&self, credential: Credential) -> Result<(), StoreError> {
		self.mutate(true, |state| state.credential = Some(credential))
	}

	/// Replaces the expiry.
	pub fn set_expiry(&self, expiry: SessionExpiry) -> Result<(), StoreError> {
		self.mutate(false, |state| state.expiry = Some(expiry))
	}

	/// Stores a freshly issued credential and its expiry in one transition.
	pub fn set_login(&self, credential: Credential, expiry: SessionExpiry) -> Result<(), StoreError> {
		self.mutate(true, |state| {
			state.credential = Some(credential);
			state.expiry = Some(expiry);
		})
	}

	/// Resets every field in one transition.
	pub fn clear_all(&self) -> Result<(), StoreError> {
		self.mutate(true, |state| *state = SessionState::default())
	}

	// The in-memory state is always updated; a persistence failure is reported afterwards.
	fn mutate<F>(&self, bump: bool, apply: F) -> Result<(), StoreError>
	where
		F: FnOnce(&mut SessionState),
	{
		let mut tracked = self.0.tracked.write();

		apply(&mut tracked.state);

		if bump {
			tracked.generation = tracked.generation.wrapping_add(1);
		}

		crate::obs::event!(
			debug,
			key = %self.0.key,
			generation = tracked.generation,
			authenticated = tracked.state.is_authenticated(),
			"session updated"
		);

		let envelope =
			PersistedSession { state: tracked.state.clone(), version: PersistedSession::VERSION };
		let serialized = serde_json::to_string(&envelope)
			.map_err(|e| StoreError::Serialization { message: e.to_string() })?;

		self.0.storage.write(&self.0.key, serialized)
	}
}
impl Debug for SessionContext {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let tracked = self.0.tracked.read();

		f.debug_struct("SessionContext")
			.field("key", &self.0.key)
			.field("generation", &tracked.generation)
			.field("authenticated", &tracked.state.is_authenticated())
			.finish()
	}
}

struct SessionInner {
	key: String,
	storage: Arc<dyn SessionStorage>,
	tracked: RwLock<Tracked>,
}

struct Tracked {
	state: SessionState,
	generation: u64,
}

fn restore(storage: &dyn SessionStorage, key: &str) -> SessionState {
	let raw = match storage.read(key) {
		Ok(Some(raw)) => raw,
		Ok(None) => return SessionState::default(),
		Err(e) => {
			crate::obs::event!(warn, key, error = %e, "session storage unreadable; starting signed out");

			return SessionState::default();
		},
	};

	match serde_json::from_str::<PersistedSession>(&raw) {
		Ok(envelope) => envelope.state,
		Err(e) => {
			crate::obs::event!(warn, key, error = %e, "persisted session is corrupt; starting signed out");

			SessionState::default()
		},
	}
}
