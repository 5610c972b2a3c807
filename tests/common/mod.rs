#![allow(dead_code)]

pub fn generate_sine_wave(samples: usize, frequency: f32, sample_rate: u32) -> Vec<i16> {
	let mut data = Vec::with_capacity(samples);
	for i in 0..samples {
		let t = i as f32 / sample_rate as f32;
		let sample = (2.0 * std::f32::consts::PI * frequency * t).sin() * 16000.0;
		data.push(sample as i16);
	}
	data
}

pub fn wav_header(channels: u16, sample_rate: u32, bits_per_sample: u16, data_size: u32) -> Vec<u8> {
	let mut wav = Vec::new();

	wav.extend_from_slice(b"RIFF");
	wav.extend_from_slice(&(36 + data_size).to_le_bytes());
	wav.extend_from_slice(b"WAVE");

	wav.extend_from_slice(b"fmt ");
	wav.extend_from_slice(&16u32.to_le_bytes());
	wav.extend_from_slice(&1u16.to_le_bytes());
	wav.extend_from_slice(&channels.to_le_bytes());
	wav.extend_from_slice(&sample_rate.to_le_bytes());
	let byte_rate = sample_rate * channels as u32 * bits_per_sample as u32 / 8;
	wav.extend_from_slice(&byte_rate.to_le_bytes());
	let block_align = channels * bits_per_sample / 8;
	wav.extend_from_slice(&block_align.to_le_bytes());
	wav.extend_from_slice(&bits_per_sample.to_le_bytes());

	wav.extend_from_slice(b"data");
	wav.extend_from_slice(&data_size.to_le_bytes());

	wav
}

pub fn create_wav(samples: &[i16], channels: u16, sample_rate: u32) -> Vec<u8> {
	let mut wav = wav_header(channels, sample_rate, 16, (samples.len() * 2) as u32);
	for sample in samples {
		wav.extend_from_slice(&sample.to_le_bytes());
	}
	wav
}

pub fn create_mono_wav(sample_count: usize, sample_rate: u32) -> Vec<u8> {
	let samples = generate_sine_wave(sample_count, 440.0, sample_rate);
	create_wav(&samples, 1, sample_rate)
}

pub fn create_stereo_wav(sample_count: usize, sample_rate: u32) -> Vec<u8> {
	let left = generate_sine_wave(sample_count, 440.0, sample_rate);
	let right = generate_sine_wave(sample_count, 880.0, sample_rate);

	let mut samples = Vec::with_capacity(sample_count * 2);
	for (l, r) in left.iter().zip(right.iter()) {
		samples.push(*l);
		samples.push(*r);
	}

	create_wav(&samples, 2, sample_rate)
}
