//! Ubuntu SSO server endpoint resolution.

// self
use crate::_prelude::*;

/// Location of an Ubuntu SSO service instance.
///
/// The base URL is stored verbatim without a trailing slash. No normalization
/// happens on construction—`url::Url` is deliberately not used for storage
/// because it appends a trailing slash to origin-only URLs, which would break
/// endpoint derivation by simple concatenation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UbuntuSsoServer {
	base_url: Cow<'static, str>,
}
impl UbuntuSsoServer {
	/// The production Ubuntu SSO service.
	pub const PRODUCTION: Self = Self { base_url: Cow::Borrowed("https://login.ubuntu.com") };
	/// The staging Ubuntu SSO service.
	pub const STAGING: Self = Self { base_url: Cow::Borrowed("https://login.staging.ubuntu.com") };

	/// Points at a custom SSO deployment.
	///
	/// The base URL is used as-is; callers must supply a canonical form without
	/// a trailing slash.
	pub fn custom(base_url: impl Into<String>) -> Self {
		Self { base_url: Cow::Owned(base_url.into()) }
	}

	/// Returns the base URL of this instance.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Derives the token-issuance endpoint for this instance.
	pub fn token_url(&self) -> String {
		format!("{}/api/v2/tokens", self.base_url)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn production_server_resolves_token_url() {
		assert_eq!(
			UbuntuSsoServer::PRODUCTION.token_url(),
			"https://login.ubuntu.com/api/v2/tokens",
		);
	}

	#[test]
	fn staging_server_resolves_token_url() {
		assert_eq!(
			UbuntuSsoServer::STAGING.token_url(),
			"https://login.staging.ubuntu.com/api/v2/tokens",
		);
	}

	#[test]
	fn custom_server_keeps_base_url_verbatim() {
		let server = UbuntuSsoServer::custom("http://127.0.0.1:8080");

		assert_eq!(server.base_url(), "http://127.0.0.1:8080");
		assert_eq!(server.token_url(), "http://127.0.0.1:8080/api/v2/tokens");
	}
}
