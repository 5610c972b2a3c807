use crate::container::{read_wav, write_wav};
use crate::driver::{EmbedOptions, capacity, decode_file, encode_file_with};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

pub struct CreatePipeline {
	payload_path: String,
	base_path: String,
	output_path: String,
	opts: EmbedOptions,
}

impl CreatePipeline {
	pub fn new(payload_path: String, base_path: String, output_path: String, opts: EmbedOptions) -> Self {
		Self { payload_path, base_path, output_path, opts }
	}

	pub fn run(&self) -> Result<()> {
		let payload = fs::read(&self.payload_path)?;
		let base = read_wav(&self.base_path)?;

		if base.channels > 1 {
			info!(channels = base.channels, "base is multi-channel, embedding into channel 0");
		}

		let capacity = capacity(base.nb_frames());
		if payload.len() > capacity {
			warn!(
				payload = payload.len(),
				capacity, "payload exceeds base capacity, trailing bytes will be dropped"
			);
		} else if payload.len() < capacity {
			debug!(payload = payload.len(), capacity, "payload will be looped to fill the base");
		}

		let embedded = encode_file_with(&payload, &base, self.opts)?;
		info!(
			frames = embedded.nb_frames,
			base_rate = base.sample_rate,
			combined_rate = embedded.sample_rate,
			"embedded payload"
		);

		write_wav(&self.output_path, &embedded.into_waveform())
	}
}

pub struct DropPipeline {
	input_path: String,
	output_path: String,
	length: Option<usize>,
}

impl DropPipeline {
	pub fn new(input_path: String, output_path: String, length: Option<usize>) -> Self {
		Self { input_path, output_path, length }
	}

	pub fn run(&self) -> Result<()> {
		let combined = read_wav(&self.input_path)?;

		if combined.channels > 1 {
			warn!(channels = combined.channels, "combined file is multi-channel, decoding channel 0");
		}

		let mut bytes = decode_file(&combined.channel(0));
		debug!(recovered = bytes.len(), "extracted signal");

		if let Some(length) = self.length {
			if length > bytes.len() {
				warn!(requested = length, recovered = bytes.len(), "fewer bytes embedded than requested");
			}
			bytes.truncate(length);
		}

		fs::write(&self.output_path, &bytes)?;
		info!(bytes = bytes.len(), output = %self.output_path, "wrote extracted data");
		Ok(())
	}
}

pub struct BatchDropPipeline {
	input_pattern: String,
	output_dir: String,
	length: Option<usize>,
}

impl BatchDropPipeline {
	pub fn new(input_pattern: String, output_dir: String, length: Option<usize>) -> Self {
		Self { input_pattern, output_dir, length }
	}

	pub fn run(&self) -> Result<()> {
		let files = expand_glob(&self.input_pattern)?;

		if files.is_empty() {
			return Err(Error::invalid_argument(format!(
				"no files matching pattern: {}",
				self.input_pattern
			)));
		}

		if Path::new(&self.output_dir).is_file() {
			return Err(Error::invalid_argument(format!(
				"batch output must be a directory: {}",
				self.output_dir
			)));
		}

		fs::create_dir_all(&self.output_dir)?;

		for input_path in files {
			let output_path = batch_output_path(&self.output_dir, &input_path);

			println!("Processing: {}", input_path);
			DropPipeline::new(input_path.clone(), output_path.clone(), self.length).run()?;
			println!("  -> {}", output_path);
		}

		Ok(())
	}
}

fn batch_output_path(output_dir: &str, input_path: &str) -> String {
	let stem = Path::new(input_path).file_stem().and_then(|n| n.to_str()).unwrap_or("extracted_data");
	format!("{}/{}.bin", output_dir, stem)
}

pub fn expand_glob(pattern: &str) -> Result<Vec<String>> {
	if !is_batch_pattern(pattern) {
		return Ok(vec![pattern.to_string()]);
	}

	let entries = glob::glob(pattern)
		.map_err(|e| Error::invalid_argument(format!("invalid glob pattern: {}", e)))?;

	let mut files = Vec::new();
	for entry in entries {
		match entry {
			Ok(path) => {
				if path.is_file() {
					files.push(path.to_string_lossy().to_string());
				}
			}
			Err(e) => {
				warn!("failed to read entry: {}", e);
			}
		}
	}

	Ok(files)
}

pub fn is_batch_pattern(input: &str) -> bool {
	input.contains('*')
}
