//! Transport primitives for the token exchange.
//!
//! [`TokenHttpClient`] is the crate's only dependency on an HTTP stack: one
//! JSON `POST`, reported back as a status code plus the raw body. The default
//! [`ReqwestHttpClient`] covers most callers; bespoke stacks implement the
//! trait themselves and hand the client to
//! [`SsoClient::with_http_client`](crate::exchange::SsoClient::with_http_client).

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::CONTENT_TYPE;
// self
use crate::_prelude::*;

/// Raw outcome of a token-exchange `POST`.
#[derive(Clone, Debug)]
pub struct HttpResponse {
	/// HTTP status code returned by the token endpoint.
	pub status: u16,
	/// Full response body.
	pub body: Vec<u8>,
}

/// Boxed future returned by [`TokenHttpClient::post_json`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing the token exchange.
///
/// Implementations issue exactly one request per call and never retry. A
/// non-2xx answer is still an [`HttpResponse`]; the error channel is reserved
/// for transport failures (DNS, TCP, TLS). Timeouts are the implementation's
/// concern—callers needing them configure the underlying client before
/// wrapping it.
pub trait TokenHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Issues a single `POST` with a JSON body and `application/json` content
	/// type, returning the status and raw body.
	fn post_json(&self, url: Url, body: Vec<u8>) -> TransportFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one
/// place. Wrap a preconfigured client with [`ReqwestHttpClient::with_client`]
/// to carry custom timeouts or proxy settings into the exchange.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl TokenHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn post_json(&self, url: Url, body: Vec<u8>) -> TransportFuture<'_, ReqwestError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client
				.post(url)
				.header(CONTENT_TYPE, "application/json")
				.body(body)
				.send()
				.await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(HttpResponse { status, body })
		})
	}
}
