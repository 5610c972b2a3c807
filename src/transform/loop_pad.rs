use crate::error::{Error, Result};

/// Stretches `signal` to exactly `target_len` samples.
///
/// Longer inputs are cut to their prefix. Shorter inputs are repeated whole as
/// many times as they fit, followed by the prefix that fills the remainder.
pub fn pad_loop<T: Copy>(signal: &[T], target_len: usize) -> Result<Vec<T>> {
	if signal.len() >= target_len {
		return Ok(signal[..target_len].to_vec());
	}

	if signal.is_empty() {
		return Err(Error::degenerate(format!(
			"cannot loop an empty signal to {} samples (division by zero)",
			target_len
		)));
	}

	let repeats = target_len / signal.len();
	let remainder = target_len % signal.len();

	let mut output = Vec::with_capacity(target_len);
	for _ in 0..repeats {
		output.extend_from_slice(signal);
	}
	output.extend_from_slice(&signal[..remainder]);

	Ok(output)
}
