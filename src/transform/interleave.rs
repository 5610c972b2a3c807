use crate::core::{BASE_PER_FRAME, FRAME_LEN, Waveform};

pub const DEFAULT_BASE_SCALE: u8 = 2;

/// Packs three base samples and one signal sample into every frame.
#[derive(Debug, Clone, Copy)]
pub struct Interleave {
	base_scale: u8,
}

impl Default for Interleave {
	fn default() -> Self {
		Self::new(DEFAULT_BASE_SCALE)
	}
}

impl Interleave {
	pub fn new(base_scale: u8) -> Self {
		Self { base_scale }
	}

	/// Multiplier applied to base samples; `1.0` for the default scale.
	pub fn factor(&self) -> f32 {
		self.base_scale as f32 * 0.5
	}

	/// Frames a base of `base_len` channel-0 samples can carry.
	pub fn capacity(base_len: usize) -> usize {
		base_len / BASE_PER_FRAME
	}

	/// Interleaves channel 0 of `base` with `signal`.
	pub fn combine(&self, base: &Waveform, signal: &[i8]) -> Vec<i16> {
		self.combine_samples(&base.channel(0), signal)
	}

	/// Interleaves a flat mono `base` with `signal`. Base or signal material
	/// beyond the usable frame count is dropped.
	pub fn combine_samples(&self, base: &[i16], signal: &[i8]) -> Vec<i16> {
		let usable = signal.len().min(Self::capacity(base.len()));
		let factor = self.factor();

		let mut combined = vec![0i16; usable * FRAME_LEN];
		for (frame_idx, group) in base.chunks_exact(BASE_PER_FRAME).take(usable).enumerate() {
			let offset = frame_idx * FRAME_LEN;
			for (slot, &sample) in group.iter().enumerate() {
				combined[offset + slot] = scale_sample(sample, factor);
			}
			combined[offset + BASE_PER_FRAME] = signal[frame_idx] as i16;
		}

		combined
	}
}

#[inline]
fn scale_sample(sample: i16, factor: f32) -> i16 {
	(sample as f32 * factor).clamp(i16::MIN as f32, i16::MAX as f32) as i16
}

/// Recovers the signal slot of every complete frame. A trailing partial frame
/// is ignored; slot values outside the `i8` range wrap.
pub fn extract(combined: &[i16]) -> Vec<i8> {
	combined.chunks_exact(FRAME_LEN).map(|frame| frame[BASE_PER_FRAME] as i8).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_half_scale_truncates_toward_zero() {
		let combined = Interleave::new(1).combine_samples(&[3, -3, 100], &[7]);
		assert_eq!(combined, vec![1, -1, 50, 7]);
	}

	#[test]
	fn test_large_scale_saturates() {
		let combined = Interleave::new(4).combine_samples(&[i16::MAX, i16::MIN, 10], &[0]);
		assert_eq!(combined, vec![i16::MAX, i16::MIN, 20, 0]);
	}

	#[test]
	fn test_extract_wraps_out_of_range_slot() {
		assert_eq!(extract(&[0, 0, 0, 200]), vec![-56]);
	}
}
