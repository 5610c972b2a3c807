use clap::{Parser, Subcommand};

pub const DEFAULT_COMBINED_OUTPUT: &str = "combined_audio.wav";
pub const DEFAULT_EXTRACTED_OUTPUT: &str = "extracted_data.bin";

#[derive(Parser, Debug)]
#[command(name = "wavsteg")]
#[command(about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Args {
	#[arg(short, long, global = true, help = "Log progress")]
	pub verbose: bool,

	#[arg(short, long, global = true, help = "Log container and capacity details")]
	pub debug: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Embed binary data into base audio
	Create {
		#[arg(long, value_name = "FILE", help = "Binary file to embed")]
		target: String,

		#[arg(long, value_name = "FILE", help = "Base WAV audio file")]
		base: String,

		#[arg(long, value_name = "FILE", default_value = DEFAULT_COMBINED_OUTPUT, help = "Output WAV file")]
		output: String,

		#[arg(
			long,
			value_name = "N",
			default_value_t = crate::transform::DEFAULT_BASE_SCALE,
			help = "Base scale; base samples are multiplied by N * 0.5"
		)]
		scale: u8,
	},

	/// Extract embedded binary data from audio
	Drop {
		#[arg(long, value_name = "FILE", help = "WAV file with embedded data, or glob pattern")]
		target: String,

		#[arg(long, value_name = "FILE", default_value = DEFAULT_EXTRACTED_OUTPUT, help = "Output file or directory")]
		output: String,

		#[arg(long, value_name = "BYTES", help = "Keep only the first BYTES extracted bytes")]
		length: Option<usize>,
	},

	/// Show how many bytes a WAV file can carry
	Info {
		#[arg(long, value_name = "FILE", help = "WAV file or glob pattern")]
		target: String,
	},
}

impl Args {
	pub fn parse() -> Self {
		<Self as clap::Parser>::parse()
	}
}
