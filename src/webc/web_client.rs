use crate::webc::{Error, Result};
use async_trait::async_trait;
use reqwest::Method;
use std::fmt;

// region:    --- HttpTransport

/// The transport the provisioning service sends its requests through.
///
/// Timeouts and TLS (the remote service expects mTLS) are the responsibility of the implementation.
#[async_trait]
pub trait HttpTransport: Send + Sync {
	async fn execute(&self, request: WebRequest) -> Result<WebResponse>;
}

// endregion: --- HttpTransport

// region:    --- WebRequest / WebResponse

#[derive(Debug, Clone)]
pub struct WebRequest {
	pub method: Method,
	pub url: String,
	pub headers: Vec<(String, String)>,
	pub body: Option<Vec<u8>>,
}

/// Getters
impl WebRequest {
	/// Returns the first header value matching `name` (case insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	/// Returns the body as a `&str` if present and valid UTF-8.
	pub fn body_as_str(&self) -> Option<&str> {
		self.body.as_deref().and_then(|bytes| std::str::from_utf8(bytes).ok())
	}
}

/// The raw response of the remote service.
/// Unlike a typical web client, a non-2xx status is not an error at this level,
/// the caller decides which status codes are meaningful.
#[derive(Debug, Clone)]
pub struct WebResponse {
	pub status: u16,
	pub body: String,
}

impl WebResponse {
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}
}

// endregion: --- WebRequest / WebResponse

// region:    --- WebClient

/// Default `HttpTransport` backed by a `reqwest::Client`.
///
/// For the mTLS setup, build the `reqwest::Client` with its identity and give it with `from_reqwest_client`.
#[derive(Clone, Default)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
}

impl fmt::Debug for WebClient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WebClient").finish_non_exhaustive()
	}
}

/// Constructors
impl WebClient {
	pub fn from_reqwest_client(reqwest_client: reqwest::Client) -> Self {
		Self { reqwest_client }
	}
}

#[async_trait]
impl HttpTransport for WebClient {
	async fn execute(&self, request: WebRequest) -> Result<WebResponse> {
		let WebRequest {
			method,
			url,
			headers,
			body,
		} = request;

		let mut reqwest_builder = self.reqwest_client.request(method, &url);
		for (key, value) in headers {
			reqwest_builder = reqwest_builder.header(key, value);
		}
		if let Some(body) = body {
			reqwest_builder = reqwest_builder.body(body);
		}

		let reqwest_req = reqwest_builder.build().map_err(|err| Error::InvalidRequest {
			url: url.clone(),
			cause: err.to_string(),
		})?;

		let reqwest_res = self.reqwest_client.execute(reqwest_req).await?;
		let status = reqwest_res.status().as_u16();
		let body = reqwest_res.text().await?;

		Ok(WebResponse { status, body })
	}
}

// endregion: --- WebClient
