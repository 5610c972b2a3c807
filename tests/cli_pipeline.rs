mod common;

use std::fs;
use tempfile::TempDir;
use wavsteg::cli::{BatchDropPipeline, CreatePipeline, DropPipeline, expand_glob};
use wavsteg::container::{read_wav, write_wav};
use wavsteg::core::Waveform;
use wavsteg::show::{CapacityInfo, Show, render_table};
use wavsteg::{EmbedOptions, Error, encode_file};

fn path_in(dir: &TempDir, name: &str) -> String {
	dir.path().join(name).to_string_lossy().to_string()
}

fn write_base(dir: &TempDir, name: &str, wav: Vec<u8>) -> String {
	let path = path_in(dir, name);
	fs::write(&path, wav).unwrap();
	path
}

#[test]
fn test_create_then_drop() {
	let dir = TempDir::new().unwrap();
	let payload: Vec<u8> = (0..=u8::MAX).collect();
	let payload_path = path_in(&dir, "payload.bin");
	fs::write(&payload_path, &payload).unwrap();

	let base_path = write_base(&dir, "base.wav", common::create_mono_wav(900, 44100));
	let combined_path = path_in(&dir, "combined.wav");

	CreatePipeline::new(payload_path, base_path, combined_path.clone(), EmbedOptions::default())
		.run()
		.unwrap();

	let combined = read_wav(&combined_path).unwrap();
	assert_eq!(combined.channels, 1);
	assert_eq!(combined.sample_rate, 58800);
	assert_eq!(combined.samples.len(), 300 * 4);

	let extracted_path = path_in(&dir, "extracted.bin");
	DropPipeline::new(combined_path, extracted_path.clone(), None).run().unwrap();

	let extracted = fs::read(&extracted_path).unwrap();
	assert_eq!(extracted.len(), 300);
	assert_eq!(&extracted[..256], &payload[..]);
	assert_eq!(&extracted[256..], &payload[..44]);
}

#[test]
fn test_drop_with_known_length() {
	let dir = TempDir::new().unwrap();
	let payload_path = path_in(&dir, "secret.txt");
	fs::write(&payload_path, b"attack at dawn").unwrap();

	let base_path = write_base(&dir, "base.wav", common::create_stereo_wav(600, 22050));
	let combined_path = path_in(&dir, "combined.wav");
	CreatePipeline::new(payload_path, base_path, combined_path.clone(), EmbedOptions::default())
		.run()
		.unwrap();

	let extracted_path = path_in(&dir, "secret.out");
	DropPipeline::new(combined_path, extracted_path.clone(), Some(14)).run().unwrap();
	assert_eq!(fs::read(&extracted_path).unwrap(), b"attack at dawn".to_vec());
}

#[test]
fn test_create_rejects_empty_payload() {
	let dir = TempDir::new().unwrap();
	let payload_path = path_in(&dir, "empty.bin");
	fs::write(&payload_path, b"").unwrap();
	let base_path = write_base(&dir, "base.wav", common::create_mono_wav(30, 8000));
	let combined_path = path_in(&dir, "combined.wav");

	let err = CreatePipeline::new(payload_path, base_path, combined_path.clone(), EmbedOptions::default())
		.run()
		.unwrap_err();

	assert!(err.is_empty_input());
	assert!(!dir.path().join("combined.wav").exists());
}

#[test]
fn test_create_rejects_missing_base() {
	let dir = TempDir::new().unwrap();
	let payload_path = path_in(&dir, "payload.bin");
	fs::write(&payload_path, b"x").unwrap();

	let err = CreatePipeline::new(
		payload_path,
		path_in(&dir, "missing.wav"),
		path_in(&dir, "combined.wav"),
		EmbedOptions::default(),
	)
	.run()
	.unwrap_err();

	assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_batch_drop() {
	let dir = TempDir::new().unwrap();
	let payload_path = path_in(&dir, "payload.bin");
	fs::write(&payload_path, b"xyz").unwrap();

	for name in ["one", "two"] {
		let base_path = write_base(&dir, &format!("{}_base.wav", name), common::create_mono_wav(9, 8000));
		let combined_path = path_in(&dir, &format!("{}.stego.wav", name));
		CreatePipeline::new(payload_path.clone(), base_path, combined_path, EmbedOptions::default())
			.run()
			.unwrap();
	}

	let pattern = path_in(&dir, "*.stego.wav");
	let out_dir = path_in(&dir, "out");
	BatchDropPipeline::new(pattern, out_dir.clone(), None).run().unwrap();

	assert_eq!(fs::read(dir.path().join("out/one.stego.bin")).unwrap(), b"xyz".to_vec());
	assert_eq!(fs::read(dir.path().join("out/two.stego.bin")).unwrap(), b"xyz".to_vec());
}

#[test]
fn test_batch_drop_without_matches() {
	let dir = TempDir::new().unwrap();
	let pattern = path_in(&dir, "*.wav");
	let err = BatchDropPipeline::new(pattern, path_in(&dir, "out"), None).run().unwrap_err();
	assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn test_expand_glob_plain_path() {
	assert_eq!(expand_glob("carrier.wav").unwrap(), vec!["carrier.wav".to_string()]);
}

#[test]
fn test_capacity_report() {
	let dir = TempDir::new().unwrap();
	let mono = write_base(&dir, "mono.wav", common::create_mono_wav(100, 44100));
	let stereo = write_base(&dir, "stereo.wav", common::create_stereo_wav(50, 12000));

	let infos = Show::new(vec![mono.clone(), stereo]).collect().unwrap();
	assert_eq!(infos.len(), 2);

	assert_eq!(infos[0].path, mono);
	assert_eq!(infos[0].nb_frames, 100);
	assert_eq!(infos[0].capacity, 33);
	assert_eq!(infos[0].combined_rate, Some(58800));

	assert_eq!(infos[1].channels, 2);
	assert_eq!(infos[1].nb_frames, 50);
	assert_eq!(infos[1].capacity, 16);
	assert_eq!(infos[1].combined_rate, Some(16000));

	let table = render_table(&infos);
	assert_eq!(table.len(), 2);
}

#[test]
fn test_capacity_report_rejects_non_wav() {
	let dir = TempDir::new().unwrap();
	let path = write_base(&dir, "notes.txt", b"not audio at all".to_vec());
	let err = CapacityInfo::analyze(&path).unwrap_err();
	assert!(matches!(err, Error::MalformedContainer(_)));
}

#[test]
fn test_combined_rate_beyond_header_range_is_rejected() {
	let dir = TempDir::new().unwrap();
	let base = Waveform::mono(vec![0; 9], 1_800_000_000);
	let embedded = encode_file(b"abc", &base).unwrap();
	assert_eq!(embedded.sample_rate, 2_400_000_000);

	let err = write_wav(path_in(&dir, "combined.wav"), &embedded.into_waveform()).unwrap_err();
	assert!(matches!(err, Error::MalformedContainer(_)));
}

#[test]
fn test_create_with_8_bit_carrier() {
	let dir = TempDir::new().unwrap();
	let payload_path = path_in(&dir, "payload.bin");
	fs::write(&payload_path, b"hi!").unwrap();

	let mut wav = common::wav_header(1, 11025, 8, 9);
	wav.extend_from_slice(&[128, 130, 126, 0, 255, 128, 64, 192, 128]);
	let base_path = write_base(&dir, "base8.wav", wav);
	let combined_path = path_in(&dir, "combined.wav");

	CreatePipeline::new(payload_path, base_path, combined_path.clone(), EmbedOptions::default())
		.run()
		.unwrap();

	let combined = read_wav(&combined_path).unwrap();
	assert_eq!(combined.sample_rate, 14700);
	assert_eq!(&combined.samples[0..3], &[0, 2, -2]);
	assert_eq!(&combined.samples[4..7], &[-128, 127, 0]);

	let extracted_path = path_in(&dir, "extracted.bin");
	DropPipeline::new(combined_path, extracted_path.clone(), None).run().unwrap();
	assert_eq!(fs::read(&extracted_path).unwrap(), b"hi!".to_vec());
}
