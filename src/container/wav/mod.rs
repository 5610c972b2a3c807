pub mod read;
pub mod write;

pub use read::WavReader;
pub use write::WavWriter;

use crate::core::Waveform;
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub const PCM_BIT_DEPTH: u16 = 16;
pub const UNSIGNED_BIT_DEPTH: u16 = 8;
pub const HEADER_SIZE: u64 = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
	pub channels: u16,
	pub sample_rate: u32,
	pub bit_depth: u16,
}

impl WavFormat {
	pub fn pcm16(channels: u16, sample_rate: u32) -> Self {
		Self { channels, sample_rate, bit_depth: PCM_BIT_DEPTH }
	}

	pub fn bytes_per_sample(&self) -> usize {
		(self.bit_depth / 8) as usize
	}

	pub fn bytes_per_frame(&self) -> usize {
		self.bytes_per_sample() * self.channels as usize
	}
}

pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<Waveform> {
	let input = BufReader::new(File::open(path)?);
	let mut reader = WavReader::new(input)?;
	reader.read_waveform()
}

pub fn write_wav<P: AsRef<Path>>(path: P, waveform: &Waveform) -> Result<()> {
	let output = BufWriter::new(File::create(path)?);
	let format = WavFormat::pcm16(waveform.channels, waveform.sample_rate);
	let mut writer = WavWriter::new(output, format)?;
	writer.write_samples(&waveform.samples)?;
	writer.finalize()
}
