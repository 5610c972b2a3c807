use super::SIGNAL_BIAS;

#[inline]
pub fn sample_to_byte(sample: i8) -> u8 {
	((sample as i16 + SIGNAL_BIAS) & 0xFF) as u8
}

pub fn decode_signal(signal: &[i8]) -> Vec<u8> {
	signal.iter().map(|&sample| sample_to_byte(sample)).collect()
}
