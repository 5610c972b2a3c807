use super::{HEADER_SIZE, WavFormat};
use crate::error::{Error, Result};
use std::io::{Seek, SeekFrom, Write};

pub struct WavWriter<W: Write + Seek> {
	writer: W,
	data_size: u32,
}

impl<W: Write + Seek> WavWriter<W> {
	pub fn new(mut writer: W, format: WavFormat) -> Result<Self> {
		Self::write_header(&mut writer, format, 0)?;
		Ok(Self { writer, data_size: 0 })
	}

	fn write_header(writer: &mut W, format: WavFormat, data_size: u32) -> Result<()> {
		let block_align = u16::try_from(format.bytes_per_frame())
			.map_err(|_| Error::malformed(format!("{} channels do not fit a frame", format.channels)))?;
		let byte_rate = u32::try_from(format.sample_rate as u64 * block_align as u64).map_err(|_| {
			Error::malformed(format!("byte rate for {} Hz does not fit the header", format.sample_rate))
		})?;

		writer.write_all(b"RIFF")?;
		writer.write_all(&(36 + data_size).to_le_bytes())?;
		writer.write_all(b"WAVE")?;

		writer.write_all(b"fmt ")?;
		writer.write_all(&16u32.to_le_bytes())?;
		writer.write_all(&1u16.to_le_bytes())?;
		writer.write_all(&format.channels.to_le_bytes())?;
		writer.write_all(&format.sample_rate.to_le_bytes())?;
		writer.write_all(&byte_rate.to_le_bytes())?;
		writer.write_all(&block_align.to_le_bytes())?;
		writer.write_all(&format.bit_depth.to_le_bytes())?;

		writer.write_all(b"data")?;
		writer.write_all(&data_size.to_le_bytes())?;

		Ok(())
	}

	pub fn write_samples(&mut self, samples: &[i16]) -> Result<()> {
		let len = samples.len() * 2;
		let data_size = u32::try_from(len)
			.ok()
			.and_then(|len| self.data_size.checked_add(len))
			.filter(|size| *size <= u32::MAX - 36)
			.ok_or_else(|| Error::malformed("sample data exceeds the RIFF size limit"))?;

		let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
		self.writer.write_all(&bytes)?;
		self.data_size = data_size;
		Ok(())
	}

	pub fn data_size(&self) -> u32 {
		self.data_size
	}

	pub fn finalize(&mut self) -> Result<()> {
		let current_pos = self.writer.stream_position()?;
		self.writer.seek(SeekFrom::Start(4))?;
		self.writer.write_all(&(36 + self.data_size).to_le_bytes())?;
		self.writer.seek(SeekFrom::Start(HEADER_SIZE - 4))?;
		self.writer.write_all(&self.data_size.to_le_bytes())?;
		self.writer.seek(SeekFrom::Start(current_pos))?;
		self.writer.flush()?;
		Ok(())
	}

	pub fn into_inner(self) -> W {
		self.writer
	}
}
