use super::{PCM_BIT_DEPTH, UNSIGNED_BIT_DEPTH, WavFormat};
use crate::core::Waveform;
use crate::error::{Error, Result};
use crate::io::ReadPrimitives;
use std::io::{self, Read};
use tracing::{debug, warn};

const FORMAT_PCM: u16 = 0x0001;
const FORMAT_EXTENSIBLE: u16 = 0xFFFE;
const FMT_CORE_SIZE: u64 = 16;
const UNSIGNED_BIAS: i16 = 128;

pub struct WavReader<R: Read> {
	reader: R,
	format: WavFormat,
	data_remaining: u64,
}

impl<R: Read> WavReader<R> {
	pub fn new(mut reader: R) -> Result<Self> {
		Self::read_riff_header(&mut reader)?;
		let (format, data_size) = Self::read_chunks(&mut reader)?;

		debug!(
			channels = format.channels,
			sample_rate = format.sample_rate,
			data_size,
			"parsed wav header"
		);

		Ok(Self { reader, format, data_remaining: data_size })
	}

	pub fn format(&self) -> WavFormat {
		self.format
	}

	/// Declared size of the sample data that has not been read yet.
	pub fn data_remaining(&self) -> u64 {
		self.data_remaining
	}

	fn read_riff_header(reader: &mut R) -> Result<()> {
		let mut buf = [0u8; 12];
		reader.read_exact(&mut buf).map_err(|e| eof_as_malformed(e, "file shorter than RIFF header"))?;

		if &buf[0..4] != b"RIFF" {
			return Err(Error::malformed("not a RIFF file"));
		}

		if &buf[8..12] != b"WAVE" {
			return Err(Error::malformed("not a WAVE file"));
		}

		Ok(())
	}

	fn read_chunks(reader: &mut R) -> Result<(WavFormat, u64)> {
		let mut format = None;

		loop {
			let chunk_id = reader.read_tag().map_err(|e| eof_as_malformed(e, "missing data chunk"))?;
			let chunk_size =
				reader.read_u32_le().map_err(|e| eof_as_malformed(e, "truncated chunk header"))? as u64;

			match &chunk_id {
				b"fmt " => {
					format = Some(Self::read_fmt(reader, chunk_size)?);
				}
				b"data" => {
					let format = format.ok_or_else(|| Error::malformed("data chunk before fmt chunk"))?;
					return Ok((format, chunk_size));
				}
				_ => {
					debug!(chunk = %String::from_utf8_lossy(&chunk_id), size = chunk_size, "skipping chunk");
					reader
						.skip_bytes(chunk_size + (chunk_size & 1))
						.map_err(|e| eof_as_malformed(e, "truncated chunk"))?;
				}
			}
		}
	}

	fn read_fmt(reader: &mut R, chunk_size: u64) -> Result<WavFormat> {
		if chunk_size < FMT_CORE_SIZE {
			return Err(Error::malformed("fmt chunk too small"));
		}

		let mut fmt_buf = [0u8; FMT_CORE_SIZE as usize];
		reader.read_exact(&mut fmt_buf).map_err(|e| eof_as_malformed(e, "truncated fmt chunk"))?;

		let trailing = chunk_size - FMT_CORE_SIZE + (chunk_size & 1);
		reader.skip_bytes(trailing).map_err(|e| eof_as_malformed(e, "truncated fmt chunk"))?;

		let format_tag = u16::from_le_bytes([fmt_buf[0], fmt_buf[1]]);
		let channels = u16::from_le_bytes([fmt_buf[2], fmt_buf[3]]);
		let sample_rate = u32::from_le_bytes([fmt_buf[4], fmt_buf[5], fmt_buf[6], fmt_buf[7]]);
		let bit_depth = u16::from_le_bytes([fmt_buf[14], fmt_buf[15]]);

		if format_tag != FORMAT_PCM && format_tag != FORMAT_EXTENSIBLE {
			return Err(Error::malformed(format!("unsupported format tag {:#06x}", format_tag)));
		}

		if channels == 0 {
			return Err(Error::malformed("zero channels"));
		}

		if bit_depth != PCM_BIT_DEPTH && bit_depth != UNSIGNED_BIT_DEPTH {
			return Err(Error::malformed(format!(
				"only 8-bit and 16-bit PCM supported, found {}-bit",
				bit_depth
			)));
		}

		Ok(WavFormat { channels, sample_rate, bit_depth })
	}

	/// Reads the remaining sample data as `i16`. 8-bit unsigned samples are
	/// recentred on zero without rescaling. A data chunk that claims more bytes
	/// than the stream holds is read up to the end of the stream.
	pub fn read_samples(&mut self) -> Result<Vec<i16>> {
		let declared = self.data_remaining;
		let bytes = self.reader.read_up_to(declared)?;
		self.data_remaining = 0;

		if (bytes.len() as u64) < declared {
			warn!(declared, found = bytes.len(), "data chunk shorter than declared");
		}

		let samples = if self.format.bit_depth == UNSIGNED_BIT_DEPTH {
			bytes.iter().map(|&b| b as i16 - UNSIGNED_BIAS).collect()
		} else {
			bytes.chunks_exact(2).map(|c| i16::from_le_bytes([c[0], c[1]])).collect()
		};
		Ok(samples)
	}

	pub fn read_waveform(&mut self) -> Result<Waveform> {
		let samples = self.read_samples()?;
		Ok(Waveform::new(samples, self.format.channels, self.format.sample_rate))
	}
}

fn eof_as_malformed(err: io::Error, msg: &str) -> Error {
	if err.kind() == io::ErrorKind::UnexpectedEof {
		Error::malformed(msg)
	} else {
		Error::Io(err)
	}
}
