use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

/// Transport-level failure with no usable response payload.
#[derive(Debug, From)]
pub enum Error {
	#[from]
	Reqwest(reqwest::Error),

	#[from]
	Io(std::io::Error),
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
