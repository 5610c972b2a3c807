use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Which input of a transform turned out to be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
	Payload,
	Base,
}

impl fmt::Display for Input {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Input::Payload => write!(f, "payload has no bytes"),
			Input::Base => write!(f, "base audio holds fewer than 3 samples on channel 0"),
		}
	}
}

#[derive(Error, Debug)]
pub enum Error {
	#[error("empty input: {0}")]
	EmptyInput(Input),

	#[error("malformed container: {0}")]
	MalformedContainer(String),

	#[error("degenerate arithmetic: {0}")]
	ArithmeticDegenerate(String),

	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl Error {
	pub fn malformed<S: Into<String>>(msg: S) -> Self {
		Error::MalformedContainer(msg.into())
	}

	pub fn degenerate<S: Into<String>>(msg: S) -> Self {
		Error::ArithmeticDegenerate(msg.into())
	}

	pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
		Error::InvalidArgument(msg.into())
	}

	pub fn is_empty_input(&self) -> bool {
		matches!(self, Error::EmptyInput(_))
	}
}
