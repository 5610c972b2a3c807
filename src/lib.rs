//! Hide arbitrary bytes inside WAV audio.
//!
//! Payload bytes become signed 8-bit samples, are looped to fill the carrier
//! and interleaved after every third carrier sample. Decoding reads back every
//! fourth sample of the combined stream.
//!
//! - `codecs`: byte to sample mapping
//! - `transform`: loop padding and 3:1 interleaving
//! - `driver`: encode/decode directions and rate coupling
//! - `container`: WAV reading and writing
//! - `cli`: argument parsing and file pipelines
//! - `show`: capacity reports

pub mod cli;
pub mod codecs;
pub mod container;
pub mod core;
pub mod driver;
pub mod error;
pub mod io;
pub mod show;
pub mod transform;

pub use driver::{EmbedOptions, Embedded, decode_file, encode_file, encode_file_with};
pub use error::{Error, Input, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
	pub verbose: bool,
	pub debug: bool,
}

impl Config {
	pub fn log_level(&self) -> Option<&'static str> {
		if self.debug {
			Some("debug")
		} else if self.verbose {
			Some("info")
		} else {
			None
		}
	}
}

/// Installs the log subscriber; stays quiet unless verbose or debug is set.
pub fn init(config: Config) {
	let level = config.log_level().unwrap_or("warn");
	let _ = tracing_subscriber::fmt()
		.with_env_filter(level)
		.with_writer(std::io::stderr)
		.try_init();
}
