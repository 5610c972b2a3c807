use std::io::{self, Read};

/// Little-endian primitives for RIFF parsing on top of any [`Read`].
pub trait ReadPrimitives: Read + Sized {
	#[inline]
	fn read_tag(&mut self) -> io::Result<[u8; 4]> {
		let mut buf = [0u8; 4];
		self.read_exact(&mut buf)?;
		Ok(buf)
	}

	#[inline]
	fn read_u16_le(&mut self) -> io::Result<u16> {
		let mut buf = [0u8; 2];
		self.read_exact(&mut buf)?;
		Ok(u16::from_le_bytes(buf))
	}

	#[inline]
	fn read_u32_le(&mut self) -> io::Result<u32> {
		let mut buf = [0u8; 4];
		self.read_exact(&mut buf)?;
		Ok(u32::from_le_bytes(buf))
	}

	/// Discards `len` bytes, failing if the stream ends first.
	fn skip_bytes(&mut self, len: u64) -> io::Result<()> {
		let skipped = io::copy(&mut self.by_ref().take(len), &mut io::sink())?;
		if skipped < len {
			return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stream ended inside a chunk"));
		}
		Ok(())
	}

	/// Reads at most `len` bytes, stopping early at end of stream.
	fn read_up_to(&mut self, len: u64) -> io::Result<Vec<u8>> {
		let mut buf = Vec::with_capacity(len.min(1 << 20) as usize);
		self.by_ref().take(len).read_to_end(&mut buf)?;
		Ok(buf)
	}
}

impl<R: Read> ReadPrimitives for R {}
