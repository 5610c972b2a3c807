//! Encode and decode directions of the embedding.
//!
//! The combined stream carries 4 samples for every 3 base samples, so the
//! combined sample rate is the base rate scaled by the same 4/3 to keep the
//! base audio at its original playback speed.

use crate::codecs::{decode_signal, encode_payload};
use crate::core::{BASE_PER_FRAME, FRAME_LEN, Waveform};
use crate::error::{Error, Input, Result};
use crate::transform::{DEFAULT_BASE_SCALE, Interleave, extract, pad_loop};

#[derive(Debug, Clone, Copy)]
pub struct EmbedOptions {
	pub base_scale: u8,
}

impl Default for EmbedOptions {
	fn default() -> Self {
		Self { base_scale: DEFAULT_BASE_SCALE }
	}
}

/// Result of embedding a payload into a base waveform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embedded {
	pub samples: Vec<i16>,
	pub sample_rate: u32,
	/// Frames written, equal to the number of payload bytes carried
	/// including loop repeats.
	pub nb_frames: usize,
}

impl Embedded {
	pub fn into_waveform(self) -> Waveform {
		Waveform::mono(self.samples, self.sample_rate)
	}
}

pub fn combined_rate(base_rate: u32) -> Result<u32> {
	let rate = base_rate as u64 * FRAME_LEN as u64 / BASE_PER_FRAME as u64;
	u32::try_from(rate)
		.map_err(|_| Error::degenerate(format!("combined rate for {} Hz overflows", base_rate)))
}

/// Bytes a base of `nb_frames` channel-0 samples can carry.
pub fn capacity(nb_frames: usize) -> usize {
	Interleave::capacity(nb_frames)
}

/// Embeds `payload` into channel 0 of `base`; the combined rate derives
/// from `base.sample_rate`.
pub fn encode_file(payload: &[u8], base: &Waveform) -> Result<Embedded> {
	encode_file_with(payload, base, EmbedOptions::default())
}

pub fn encode_file_with(payload: &[u8], base: &Waveform, opts: EmbedOptions) -> Result<Embedded> {
	if payload.is_empty() {
		return Err(Error::EmptyInput(Input::Payload));
	}

	let base_samples = base.channel(0);
	let capacity = capacity(base_samples.len());
	if capacity == 0 {
		return Err(Error::EmptyInput(Input::Base));
	}

	let sample_rate = combined_rate(base.sample_rate)?;

	let signal = encode_payload(payload);
	let padded = pad_loop(&signal, capacity)?;
	let samples = Interleave::new(opts.base_scale).combine_samples(&base_samples, &padded);

	Ok(Embedded { nb_frames: samples.len() / FRAME_LEN, samples, sample_rate })
}

/// Recovers every embedded byte, loop repeats included.
pub fn decode_file(combined: &[i16]) -> Vec<u8> {
	decode_signal(&extract(combined))
}
