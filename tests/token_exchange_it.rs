#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use usso_client::{
	auth::Credentials,
	error::{DeserializationError, Error, ProtocolError},
	exchange::ReqwestSsoClient,
	server::UbuntuSsoServer,
};

const EMAIL: &str = "foo@bar.com";
const PASSWORD: &str = "foobarpwd";
const TOKEN_NAME: &str = "foo";
const TOKEN_KEY: &str = "abcs";
const TOKEN_SECRET: &str = "mTBgLxtTRUdfqewqgrqsvxlijbMWkPBajgKcoZCrDwv";
const CONSUMER_KEY: &str = "rfyzhdQ";
const CONSUMER_SECRET: &str = "rwDkQkkdfdfdeAslkmmxAOjOAT";

fn test_client(server: &MockServer) -> ReqwestSsoClient {
	ReqwestSsoClient::new(UbuntuSsoServer::custom(server.base_url()))
}

fn credentials() -> Credentials {
	Credentials::new(EMAIL, PASSWORD, TOKEN_NAME)
}

fn success_body() -> String {
	json!({
		"date_updated": "2013-01-16 14:03:36",
		"date_created": "2013-01-16 14:03:36",
		"href": format!("/api/v2/tokens/{TOKEN_KEY}"),
		"token_name": TOKEN_NAME,
		"token_key": TOKEN_KEY,
		"token_secret": TOKEN_SECRET,
		"consumer_key": CONSUMER_KEY,
		"consumer_secret": CONSUMER_SECRET,
	})
	.to_string()
}

#[tokio::test]
async fn get_token_returns_token_and_sends_exact_payload() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v2/tokens")
				.header("content-type", "application/json")
				.body("{\"email\":\"foo@bar.com\",\"password\":\"foobarpwd\",\"token_name\":\"foo\"}");
			then.status(200).header("content-type", "application/json").body(success_body());
		})
		.await;
	let token = test_client(&server)
		.get_token(&credentials())
		.await
		.expect("Token exchange should succeed against a well-formed response.");

	assert_eq!(token.base_url, server.base_url());
	assert_eq!(token.consumer_key, CONSUMER_KEY);
	assert_eq!(token.consumer_secret.expose(), CONSUMER_SECRET);
	assert_eq!(token.token_key, TOKEN_KEY);
	assert_eq!(token.token_secret.expose(), TOKEN_SECRET);
	assert_eq!(token.token_name, TOKEN_NAME);

	mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_surfaces_protocol_error() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/tokens");
			then.status(401)
				.header("content-type", "application/json")
				.body("{\"error\": \"invalid credentials\"}");
		})
		.await;
	let err = test_client(&server)
		.get_token(&credentials())
		.await
		.expect_err("Non-2xx responses should never yield a token.");

	match err {
		Error::Protocol(ProtocolError::UnexpectedStatus { status, body }) => {
			assert_eq!(status, 401);
			assert!(body.contains("invalid credentials"), "Body should carry the diagnostics.");
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn malformed_json_surfaces_deserialization_error() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/tokens");
			then.status(200).header("content-type", "text/html").body("<html>not json</html>");
		})
		.await;
	let err = test_client(&server)
		.get_token(&credentials())
		.await
		.expect_err("Non-JSON bodies should never yield a token.");

	assert!(matches!(
		err,
		Error::Deserialization(DeserializationError::InvalidResponse { status: 200, .. }),
	));
}

#[tokio::test]
async fn missing_token_fields_surface_deserialization_error() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/tokens");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"consumer_key\":\"ck\",\"token_key\":\"tk\"}");
		})
		.await;
	let err = test_client(&server)
		.get_token(&credentials())
		.await
		.expect_err("Responses missing required fields should never yield a token.");

	assert!(matches!(err, Error::Deserialization(DeserializationError::InvalidResponse { .. })));
}

#[tokio::test]
async fn each_call_issues_exactly_one_request() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v2/tokens");
			then.status(503).body("service unavailable");
		})
		.await;
	let client = test_client(&server);
	let _ = client
		.get_token(&credentials())
		.await
		.expect_err("A 503 response should surface as a protocol error.");

	mock.assert_calls_async(1).await;
}
