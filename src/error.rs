//! Client-level error types shared across the exchange and signing paths.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// The four failure kinds named by the wire contract—transport, protocol,
/// deserialization, and signing—stay distinguishable by matching on the
/// variant; no path downgrades a failure into a logged-and-ignored default.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Server responded with a non-success status.
	#[error(transparent)]
	Protocol(#[from] ProtocolError),
	/// Server responded 2xx but the body could not be decoded.
	#[error(transparent)]
	Deserialization(#[from] DeserializationError),
	/// Signature material could not be turned into an authorization header.
	#[error(transparent)]
	Signing(#[from] SigningError),
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Token endpoint URL cannot be parsed.
	#[error("Token endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Exchange request payload could not be serialized.
	#[error("Token request payload could not be serialized.")]
	SerializeRequest {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the token endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the token endpoint.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Non-success responses from the token endpoint.
#[derive(Debug, ThisError)]
pub enum ProtocolError {
	/// Token endpoint answered outside the 2xx range.
	#[error("Token endpoint returned HTTP {status}: {body}")]
	UnexpectedStatus {
		/// HTTP status code returned by the token endpoint.
		status: u16,
		/// Raw response body, passed through verbatim for diagnostics.
		body: String,
	},
}

/// Failures decoding a 2xx token-endpoint response.
#[derive(Debug, ThisError)]
pub enum DeserializationError {
	/// Body is not valid JSON or lacks one of the required token fields.
	#[error("Token endpoint returned an undecodable body.")]
	InvalidResponse {
		/// Structured parsing failure including the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status the body arrived with.
		status: u16,
	},
}

/// Failures assembling the OAuth authorization header.
#[derive(Debug, ThisError)]
pub enum SigningError {
	/// Assembled value is not a valid HTTP header.
	#[error("OAuth authorization header could not be constructed.")]
	InvalidHeaderValue {
		/// Header construction failure reported by the HTTP stack.
		#[source]
		source: BoxError,
	},
}
impl SigningError {
	/// Wraps a header construction failure.
	pub fn invalid_header_value(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::InvalidHeaderValue { source: Box::new(src) }
	}
}
