use crate::http::{HttpRequest, MethodType};
use crate::webc::{AsyncTransport, BodyReader, BodyStream, Error, RawResponse, Result, Transport};
use futures::TryStreamExt;
use std::time::Duration;

/// Default async transport, backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct WebClient {
	client: reqwest::Client,
}

/// Constructors
impl WebClient {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Wraps a pre-configured client (custom TLS, proxy, pool settings).
	#[must_use]
	pub fn from_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

impl AsyncTransport for WebClient {
	async fn send(&self, request: &HttpRequest, timeout: Duration) -> Result<RawResponse<BodyStream>> {
		let mut builder = self
			.client
			.request(to_reqwest_method(request.method), &request.url)
			.query(&request.query)
			.timeout(timeout);

		for (key, value) in &request.headers {
			builder = builder.header(key.as_str(), value.as_str());
		}
		if let Some(format) = request.accept_format {
			builder = builder.header("Accept", format.as_mime());
		}
		if let Some(content) = &request.content {
			builder = builder.body(content.clone());
		}

		// Non-2xx statuses are normal responses here; only sends with no response fail.
		let response = builder.send().await?;

		let status = response.status().as_u16();
		let headers = copy_headers(response.headers());
		let body: BodyStream = Box::pin(response.bytes_stream().map_err(Error::from));

		Ok(RawResponse { status, headers, body })
	}
}

/// Blocking twin of [`WebClient`].
#[derive(Debug, Clone, Default)]
pub struct BlockingWebClient {
	client: reqwest::blocking::Client,
}

/// Constructors
impl BlockingWebClient {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn from_client(client: reqwest::blocking::Client) -> Self {
		Self { client }
	}
}

impl Transport for BlockingWebClient {
	fn send(&self, request: &HttpRequest, timeout: Duration) -> Result<RawResponse<BodyReader>> {
		let mut builder = self
			.client
			.request(to_reqwest_method(request.method), &request.url)
			.query(&request.query)
			.timeout(timeout);

		for (key, value) in &request.headers {
			builder = builder.header(key.as_str(), value.as_str());
		}
		if let Some(format) = request.accept_format {
			builder = builder.header("Accept", format.as_mime());
		}
		if let Some(content) = &request.content {
			builder = builder.body(content.to_vec());
		}

		let response = builder.send()?;

		let status = response.status().as_u16();
		let headers = copy_headers(response.headers());
		// `reqwest::blocking::Response` is the body reader; headers were copied above.
		let body: BodyReader = Box::new(response);

		Ok(RawResponse { status, headers, body })
	}
}

fn to_reqwest_method(method: MethodType) -> reqwest::Method {
	match method {
		MethodType::Get => reqwest::Method::GET,
		MethodType::Post => reqwest::Method::POST,
		MethodType::Put => reqwest::Method::PUT,
		MethodType::Delete => reqwest::Method::DELETE,
		MethodType::Head => reqwest::Method::HEAD,
		MethodType::Options => reqwest::Method::OPTIONS,
	}
}

fn copy_headers(headers: &reqwest::header::HeaderMap) -> Vec<(String, String)> {
	headers
		.iter()
		.map(|(key, value)| {
			(
				key.as_str().to_string(),
				String::from_utf8_lossy(value.as_bytes()).into_owned(),
			)
		})
		.collect()
}
