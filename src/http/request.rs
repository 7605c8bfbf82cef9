use crate::http::{FormatType, MethodType};
use bytes::Bytes;
use std::collections::HashMap;

/// An outgoing HTTP request, built fresh per call and never reused.
///
/// Header keys are unique and kept case-sensitive as given. The request is mutated only by
/// the [`Signer`](crate::auth::Signer) before transmission (authentication headers/query
/// parameters get added there).
#[derive(Debug, Clone)]
pub struct HttpRequest {
	pub method: MethodType,
	pub url: String,
	pub headers: HashMap<String, String>,
	pub query: Vec<(String, String)>,
	pub content: Option<Bytes>,
	pub accept_format: Option<FormatType>,
	pub encoding: Option<String>,
}

/// Constructors
impl HttpRequest {
	pub fn new(method: MethodType, url: impl Into<String>) -> Self {
		Self {
			method,
			url: url.into(),
			headers: HashMap::new(),
			query: Vec::new(),
			content: None,
			accept_format: None,
			encoding: None,
		}
	}

	#[must_use]
	pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(key.into(), value.into());
		self
	}

	#[must_use]
	pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.push((key.into(), value.into()));
		self
	}

	#[must_use]
	pub fn with_accept_format(mut self, format: FormatType) -> Self {
		self.accept_format = Some(format);
		self
	}

	#[must_use]
	pub fn with_content(mut self, content: impl Into<Bytes>) -> Self {
		self.content = Some(content.into());
		self
	}
}
