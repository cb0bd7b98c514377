//! Token exchange flow: trades email/password credentials for an SSO token.

// self
use crate::{
	_prelude::*,
	auth::{Credentials, Secret, SsoToken},
	error::{ConfigError, DeserializationError, ProtocolError, TransportError},
	http::TokenHttpClient,
	obs::ExchangeSpan,
	server::UbuntuSsoServer,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Wire payload sent to the token endpoint. Field order fixes the serialized
/// key order: `email`, `password`, `token_name`.
#[derive(Serialize)]
struct TokenRequestPayload<'a> {
	email: &'a str,
	password: &'a str,
	token_name: &'a str,
}

/// Subset of the token endpoint response the client consumes; server-side
/// metadata (`href`, `date_created`, `date_updated`) is ignored.
#[derive(Deserialize)]
struct TokenResponsePayload {
	consumer_key: String,
	consumer_secret: String,
	token_key: String,
	token_secret: String,
	token_name: String,
}

/// Client specialized for the crate's default reqwest transport.
#[cfg(feature = "reqwest")]
pub type ReqwestSsoClient = SsoClient<ReqwestHttpClient>;

/// Client bound to a single SSO instance.
///
/// Owns the server resolver and the HTTP transport so the exchange itself can
/// focus on the wire protocol. Each [`get_token`](SsoClient::get_token) call
/// is independent and reentrant; the client holds no mutable state.
#[derive(Clone)]
pub struct SsoClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// HTTP client used for the exchange request.
	pub http_client: Arc<C>,
	/// SSO instance this client talks to.
	pub server: UbuntuSsoServer,
}
impl<C> SsoClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(server: UbuntuSsoServer, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), server }
	}

	/// Exchanges credentials for a long-lived OAuth token.
	///
	/// Issues exactly one `POST {base_url}/api/v2/tokens` with the JSON body
	/// `{"email":…,"password":…,"token_name":…}`. No retry happens on failure;
	/// re-invoking is the caller's decision. On success the returned token
	/// carries the server's base URL alongside the credential fields from the
	/// response.
	pub async fn get_token(&self, credentials: &Credentials) -> Result<SsoToken> {
		let span = ExchangeSpan::new(self.server.base_url());

		span.instrument(async move {
			let url = Url::parse(&self.server.token_url())
				.map_err(|source| ConfigError::InvalidEndpoint { source })?;
			let body = serde_json::to_vec(&TokenRequestPayload {
				email: &credentials.email,
				password: credentials.password.expose(),
				token_name: &credentials.token_name,
			})
			.map_err(|source| ConfigError::SerializeRequest { source })?;
			let response =
				self.http_client.post_json(url, body).await.map_err(TransportError::network)?;

			if !(200..300).contains(&response.status) {
				return Err(ProtocolError::UnexpectedStatus {
					status: response.status,
					body: String::from_utf8_lossy(&response.body).into_owned(),
				}
				.into());
			}

			let mut deserializer = serde_json::Deserializer::from_slice(&response.body);
			let payload: TokenResponsePayload =
				serde_path_to_error::deserialize(&mut deserializer).map_err(|source| {
					DeserializationError::InvalidResponse { source, status: response.status }
				})?;

			Ok(SsoToken {
				base_url: self.server.base_url().to_owned(),
				consumer_key: payload.consumer_key,
				consumer_secret: Secret::new(payload.consumer_secret),
				token_key: payload.token_key,
				token_secret: Secret::new(payload.token_secret),
				token_name: payload.token_name,
			})
		})
		.await
	}
}
#[cfg(feature = "reqwest")]
impl SsoClient<ReqwestHttpClient> {
	/// Creates a client with the crate's default reqwest transport.
	pub fn new(server: UbuntuSsoServer) -> Self {
		Self::with_http_client(server, ReqwestHttpClient::default())
	}
}
impl<C> Debug for SsoClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SsoClient").field("server", &self.server).finish()
	}
}
