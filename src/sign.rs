//! OAuth 1.0a PLAINTEXT request signing.
//!
//! The signature in this variant is not a digest: it is the percent-encoded
//! consumer secret and token secret joined with `&`, which the server verifies
//! by direct string comparison. Swapping in HMAC-SHA1 would change the server
//! contract, not just the client.

// crates.io
use rand::{Rng, distr::Alphanumeric};
#[cfg(feature = "reqwest")]
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use time::OffsetDateTime;
// self
#[cfg(feature = "reqwest")] use crate::error::SigningError;
use crate::auth::SsoToken;

const NONCE_LEN: usize = 16;

/// Percent-encodes `input` per OAuth's encoding rules: RFC 3986 unreserved
/// characters pass through, every other UTF-8 byte becomes `%XX` with
/// uppercase hex. Space encodes as `%20`, never `+`.
pub fn percent_encode(input: &str) -> String {
	let mut encoded = String::with_capacity(input.len());

	for byte in input.bytes() {
		match byte {
			b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' =>
				encoded.push(byte as char),
			_ => {
				encoded.push('%');
				encoded.push_str(&format!("{byte:02X}"));
			},
		}
	}

	encoded
}

fn nonce() -> String {
	rand::rng().sample_iter(Alphanumeric).take(NONCE_LEN).map(char::from).collect()
}

fn timestamp() -> String {
	OffsetDateTime::now_utc().unix_timestamp().to_string()
}

impl SsoToken {
	/// Builds the `Authorization` header value for one request.
	///
	/// A fresh nonce and timestamp are generated per call, so two calls over
	/// the same token differ only in those two parameters. Nonce uniqueness
	/// within a short window is sufficient for this protocol variant; a
	/// collision weakens replay protection but never corrupts the signature.
	pub fn authorization_header(&self) -> String {
		self.authorization_header_with(&nonce(), &timestamp())
	}

	fn authorization_header_with(&self, nonce: &str, timestamp: &str) -> String {
		let signature = format!(
			"{}&{}",
			percent_encode(self.consumer_secret.expose()),
			percent_encode(self.token_secret.expose()),
		);

		format!(
			"OAuth realm=\"API\", oauth_consumer_key=\"{}\", oauth_token=\"{}\", \
			 oauth_signature_method=\"PLAINTEXT\", oauth_signature=\"{}\", \
			 oauth_timestamp=\"{}\", oauth_nonce=\"{}\", oauth_version=\"1.0\"",
			percent_encode(&self.consumer_key),
			percent_encode(&self.token_key),
			percent_encode(&signature),
			percent_encode(timestamp),
			percent_encode(nonce),
		)
	}

	/// Inserts the `Authorization` header into `headers`, replacing any prior
	/// value. The header map is untouched when the value cannot be
	/// constructed.
	#[cfg(feature = "reqwest")]
	pub fn sign_headers(&self, headers: &mut HeaderMap) -> Result<(), SigningError> {
		let value = HeaderValue::from_str(&self.authorization_header())
			.map_err(SigningError::invalid_header_value)?;

		headers.insert(AUTHORIZATION, value);

		Ok(())
	}

	/// Signs an outgoing [`reqwest::Request`] in place.
	#[cfg(feature = "reqwest")]
	pub fn sign(&self, request: &mut reqwest::Request) -> Result<(), SigningError> {
		self.sign_headers(request.headers_mut())
	}
}
