use super::SIGNAL_BIAS;

#[inline]
pub fn byte_to_sample(byte: u8) -> i8 {
	(byte as i16 - SIGNAL_BIAS) as i8
}

pub fn encode_payload(bytes: &[u8]) -> Vec<i8> {
	let mut signal = Vec::with_capacity(bytes.len());
	for &byte in bytes {
		signal.push(byte_to_sample(byte));
	}
	signal
}
