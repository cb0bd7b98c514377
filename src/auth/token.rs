//! Issued OAuth 1.0a token artifact.

// self
use crate::{_prelude::*, auth::Secret};

/// Immutable OAuth 1.0a credential set issued by a successful token exchange.
///
/// The record carries the base URL of the instance that issued it so later
/// signing knows which realm it belongs to. The crate attaches no expiry or
/// destruction logic—callers own persistence, and the serde implementation
/// round-trips the plain secret values for that purpose. Once created the
/// record is never mutated, so it can be shared across tasks and signed with
/// concurrently without synchronization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsoToken {
	/// Base URL of the SSO instance that issued this token.
	pub base_url: String,
	/// OAuth consumer key.
	pub consumer_key: String,
	/// OAuth consumer secret; redacted in debug output.
	pub consumer_secret: Secret,
	/// OAuth token key.
	pub token_key: String,
	/// OAuth token secret; redacted in debug output.
	pub token_secret: Secret,
	/// Human-readable label chosen when the token was issued.
	pub token_name: String,
}
