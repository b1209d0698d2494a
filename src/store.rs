//! Durable key-value storage contracts backing the session store.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

// self
use crate::_prelude::*;

/// Key-value storage that survives page reloads (or process restarts).
///
/// Values are opaque strings; the session layer owns the serialization format.
pub trait SessionStorage
where
	Self: Send + Sync,
{
	/// Returns the value stored under `key`, if any.
	fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

	/// Stores or replaces the value under `key`.
	fn write(&self, key: &str, value: String) -> Result<(), StoreError>;

	/// Deletes the value under `key`; missing keys are not an error.
	fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Error type produced by [`SessionStorage`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
