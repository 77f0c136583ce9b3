use crate::atn::{AtnError, Result};

/// Simple bounded cursor over an immutable byte slice.
///
/// All multi-byte reads are big-endian, matching the action file format.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Create a cursor starting at `pos`.
	pub fn at(bytes: &'a [u8], pos: usize) -> Self {
		Self { bytes, pos: pos.min(bytes.len()) }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(AtnError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a four-byte tag.
	pub fn read_tag(&mut self) -> Result<[u8; 4]> {
		let raw = self.read_exact(4)?;
		let mut out = [0_u8; 4];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read a single byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		let raw = self.read_exact(1)?;
		Ok(raw[0])
	}

	/// Read a big-endian `u32`.
	pub fn read_u32_be(&mut self) -> Result<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(u32::from_be_bytes(buf))
	}

	/// Read a big-endian `i32`.
	pub fn read_i32_be(&mut self) -> Result<i32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(i32::from_be_bytes(buf))
	}

	/// Read a big-endian `i64`.
	pub fn read_i64_be(&mut self) -> Result<i64> {
		let raw = self.read_exact(8)?;
		let mut buf = [0_u8; 8];
		buf.copy_from_slice(raw);
		Ok(i64::from_be_bytes(buf))
	}

	/// Read a big-endian IEEE-754 `f64`, bit pattern preserved.
	pub fn read_f64_be(&mut self) -> Result<f64> {
		let raw = self.read_exact(8)?;
		let mut buf = [0_u8; 8];
		buf.copy_from_slice(raw);
		Ok(f64::from_bits(u64::from_be_bytes(buf)))
	}

	/// Read a count field that must fit in `usize` and stay non-negative.
	pub fn read_count(&mut self) -> Result<usize> {
		let at = self.pos;
		let raw = self.read_i32_be()?;
		usize::try_from(raw).map_err(|_| AtnError::CountOutOfRange {
			at,
			count: i64::from(raw),
		})
	}

	/// Read a length-prefixed UTF-16BE string.
	///
	/// The prefix counts UTF-16 code units, not bytes. Embedded NUL code
	/// units are legal and preserved.
	pub fn read_unicode_string(&mut self) -> Result<String> {
		let at = self.pos;
		let unit_count = self.read_count()?;
		let byte_len = unit_count.checked_mul(2).ok_or(AtnError::CountOutOfRange {
			at,
			count: unit_count as i64,
		})?;
		let raw = self.read_exact(byte_len)?;

		let mut units = Vec::with_capacity(unit_count);
		for pair in raw.chunks_exact(2) {
			units.push(u16::from_be_bytes([pair[0], pair[1]]));
		}
		String::from_utf16(&units).map_err(|_| AtnError::InvalidString { at })
	}

	/// Read a length-prefixed raw byte block, copied out of the input.
	pub fn read_data_block(&mut self) -> Result<Vec<u8>> {
		let len = self.read_count()?;
		Ok(self.read_exact(len)?.to_vec())
	}
}

/// Growable big-endian byte sink mirroring [`Cursor`].
#[derive(Default)]
pub struct Writer {
	bytes: Vec<u8>,
}

impl Writer {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self { bytes: Vec::new() }
	}

	/// Consume the writer and return the accumulated bytes.
	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}

	/// Current output length in bytes.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Whether nothing has been written yet.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Write a four-byte tag.
	pub fn write_tag(&mut self, tag: [u8; 4]) {
		self.bytes.extend_from_slice(&tag);
	}

	/// Write raw bytes with no length prefix.
	pub fn write_bytes(&mut self, bytes: &[u8]) {
		self.bytes.extend_from_slice(bytes);
	}

	/// Write a single byte.
	pub fn write_u8(&mut self, value: u8) {
		self.bytes.push(value);
	}

	/// Write a big-endian `u32`.
	pub fn write_u32_be(&mut self, value: u32) {
		self.bytes.extend_from_slice(&value.to_be_bytes());
	}

	/// Write a big-endian `i32`.
	pub fn write_i32_be(&mut self, value: i32) {
		self.bytes.extend_from_slice(&value.to_be_bytes());
	}

	/// Write a big-endian `i64`.
	pub fn write_i64_be(&mut self, value: i64) {
		self.bytes.extend_from_slice(&value.to_be_bytes());
	}

	/// Write a big-endian IEEE-754 `f64`, bit pattern preserved.
	pub fn write_f64_be(&mut self, value: f64) {
		self.bytes.extend_from_slice(&value.to_bits().to_be_bytes());
	}

	/// Write a count or length into a 4-byte wire field.
	pub fn write_count(&mut self, len: usize) -> Result<()> {
		let value = u32::try_from(len).map_err(|_| AtnError::LengthOverflow { len })?;
		self.write_u32_be(value);
		Ok(())
	}

	/// Write a length-prefixed UTF-16BE string.
	pub fn write_unicode_string(&mut self, text: &str) -> Result<()> {
		let units: Vec<u16> = text.encode_utf16().collect();
		self.write_count(units.len())?;
		for unit in units {
			self.bytes.extend_from_slice(&unit.to_be_bytes());
		}
		Ok(())
	}

	/// Write a length-prefixed raw byte block.
	pub fn write_data_block(&mut self, data: &[u8]) -> Result<()> {
		self.write_count(data.len())?;
		self.write_bytes(data);
		Ok(())
	}
}

#[cfg(test)]
mod tests;
