/// Interleaved 16-bit PCM samples together with their layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waveform {
	pub samples: Vec<i16>,
	pub channels: u16,
	pub sample_rate: u32,
}

impl Waveform {
	pub fn new(samples: Vec<i16>, channels: u16, sample_rate: u32) -> Self {
		Self { samples, channels: channels.max(1), sample_rate }
	}

	pub fn mono(samples: Vec<i16>, sample_rate: u32) -> Self {
		Self::new(samples, 1, sample_rate)
	}

	/// Number of sample instants, i.e. samples per channel. A partial
	/// trailing frame does not count.
	pub fn nb_frames(&self) -> usize {
		self.samples.len() / self.channels as usize
	}

	/// Samples of a single channel as a flat sequence.
	pub fn channel(&self, index: u16) -> Vec<i16> {
		if index >= self.channels {
			return Vec::new();
		}

		if self.channels == 1 {
			return self.samples.clone();
		}

		let channels = self.channels as usize;
		self.samples
			.chunks_exact(channels)
			.map(|frame| frame[index as usize])
			.collect()
	}
}
