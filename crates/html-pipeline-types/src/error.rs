//! Error type for the fallible edges of the node representation.

/// Errors raised while parsing event names or loading render options.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The event name is not one of the known [`EventType`](crate::EventType)s.
	#[error("Unknown event type: {0}")]
	UnknownEventType(String),
	/// Render options could not be deserialized.
	#[error("Invalid render options: {0}")]
	InvalidRenderOptions(#[from] serde_json::Error),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
