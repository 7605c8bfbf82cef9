use crate::Error;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The HTTP verb of a request (and the verb a response was obtained with).
#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MethodType {
	Get,
	Post,
	Put,
	Delete,
	Head,
	Options,
}

/// Serialization implementations
impl MethodType {
	/// The wire form of the verb.
	#[must_use]
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Put => "PUT",
			Self::Delete => "DELETE",
			Self::Head => "HEAD",
			Self::Options => "OPTIONS",
		}
	}
}

impl FromStr for MethodType {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"GET" => Ok(Self::Get),
			"POST" => Ok(Self::Post),
			"PUT" => Ok(Self::Put),
			"DELETE" => Ok(Self::Delete),
			"HEAD" => Ok(Self::Head),
			"OPTIONS" => Ok(Self::Options),
			_ => Err(Error::InvalidMethod { method: s.to_string() }),
		}
	}
}
