//! Transient credential input for the token exchange.

// self
use crate::{_prelude::*, auth::Secret};

/// Email/password credentials plus a human-readable label for the token being
/// requested. The label is the caller's name for the issued token, distinct
/// from the token's actual key and secret.
#[derive(Clone, Debug)]
pub struct Credentials {
	/// Account email address.
	pub email: String,
	/// Account password; redacted in debug output.
	pub password: Secret,
	/// Caller-chosen label for the issued token.
	pub token_name: String,
}
impl Credentials {
	/// Bundles the exchange inputs.
	pub fn new(
		email: impl Into<String>,
		password: impl Into<String>,
		token_name: impl Into<String>,
	) -> Self {
		Self { email: email.into(), password: Secret::new(password), token_name: token_name.into() }
	}
}
