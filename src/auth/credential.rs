/// An opaque identity/secret pair, owned by the caller and passed by reference into the
/// [`Signer`](crate::auth::Signer). This crate never mutates it.
#[derive(Clone)]
pub struct Credential {
	access_key_id: String,
	access_key_secret: String,
	security_token: Option<String>,
}

/// Constructors
impl Credential {
	pub fn new(access_key_id: impl Into<String>, access_key_secret: impl Into<String>) -> Self {
		Self {
			access_key_id: access_key_id.into(),
			access_key_secret: access_key_secret.into(),
			security_token: None,
		}
	}

	/// For STS-style temporary credentials.
	#[must_use]
	pub fn with_security_token(mut self, token: impl Into<String>) -> Self {
		self.security_token = Some(token.into());
		self
	}
}

/// Getters
impl Credential {
	#[must_use]
	pub fn access_key_id(&self) -> &str {
		&self.access_key_id
	}

	#[must_use]
	pub fn access_key_secret(&self) -> &str {
		&self.access_key_secret
	}

	#[must_use]
	pub fn security_token(&self) -> Option<&str> {
		self.security_token.as_deref()
	}
}

// The secret must never reach log output.
impl core::fmt::Debug for Credential {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
		fmt.debug_struct("Credential")
			.field("access_key_id", &self.access_key_id)
			.field("access_key_secret", &"REDACTED")
			.field("security_token", &self.security_token.as_ref().map(|_| "REDACTED"))
			.finish()
	}
}

// region:    --- Tests


// endregion: --- Tests
