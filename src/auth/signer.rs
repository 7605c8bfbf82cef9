use crate::auth::Credential;
use crate::http::{FormatType, HttpRequest};
use crate::Result;
use serde::{Deserialize, Serialize};

/// The (product, domain) pair a request is signed against. For endpoint discovery this is
/// the discovery service's own pair, not the target product's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDomain {
	pub product_name: String,
	pub domain_name: String,
}

impl ProductDomain {
	pub fn new(product_name: impl Into<String>, domain_name: impl Into<String>) -> Self {
		Self {
			product_name: product_name.into(),
			domain_name: domain_name.into(),
		}
	}
}

/// A capability that authenticates an outgoing request with a credential.
///
/// Implementations take the request, add their authentication headers/query parameters, and
/// hand it back ready to send. The concrete signature algorithm is the implementation's
/// business; this crate only routes the request through it.
pub trait Signer {
	fn sign(
		&self,
		request: HttpRequest,
		credential: &Credential,
		format: FormatType,
		domain: &ProductDomain,
	) -> Result<HttpRequest>;
}
