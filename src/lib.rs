//! The `acs-core` crate is the transport and trust layer of an ACS-style cloud-API client.
//! It turns a logical API call into an authenticated HTTP request, normalizes the raw HTTP
//! response into a structured [`http::HttpResponse`], and resolves which network endpoint a
//! given (product, region) pair should be sent to, including the secondary `DescribeEndpoints`
//! round-trip when the endpoint is not statically known.
//!
//! The pluggable seams are traits: [`auth::Signer`] for request authentication,
//! [`webc::Transport`] / [`webc::AsyncTransport`] for the wire (reqwest-backed defaults are
//! provided), and [`reader::Reader`] for turning body text into the format-agnostic document
//! tree consumed by [`unmarshal::UnmarshallerContext`].
//!
//! ```
//! use acs_core::http::{HttpResponse, MethodType};
//!
//! let response = HttpResponse::from_parts(
//! 	200,
//! 	vec![("Content-Type".to_string(), "application/json; charset=utf-8".to_string())],
//! 	br#"{"ok":true}"#.to_vec(),
//! 	MethodType::Get,
//! );
//! assert_eq!(response.encoding.as_deref(), Some("UTF-8"));
//! ```

// region:    --- Modules

mod error;

pub use error::{Error, Result};

pub mod auth;
pub mod endpoint;
pub mod http;
pub mod reader;
pub mod unmarshal;
pub mod webc;

// -- Flatten the commonly used types at the crate root
pub use auth::{Credential, ProductDomain, Signer};
pub use endpoint::{DescribeEndpointService, LocationConfig, ResolvedEndpoint};
pub use http::{FormatType, HttpRequest, HttpResponse, MethodType};

// endregion: --- Modules
