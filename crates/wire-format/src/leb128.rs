// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Unsigned LEB128, the length prefix of row-oriented strings, arrays and maps.

use colwire_type::{CodecError, Result, return_error};

use crate::buffer::take_array;

const MAX_LEN: usize = 10;

pub fn write_leb128(value: u64, out: &mut Vec<u8>) {
	// io::Write for Vec<u8> never fails
	let _ = ::leb128::write::unsigned(out, value);
}

/// Reads one prefix at `pos`, returning the value and the position after it.
pub fn read_leb128(buf: &[u8], pos: usize) -> Result<(u64, usize)> {
	let mut value = 0u64;
	for i in 0..MAX_LEN {
		let [byte] = take_array::<1>(buf, pos + i)?;
		let bits = u64::from(byte & 0x7f);
		let shift = 7 * i as u32;
		// the tenth byte only has room for the top bit of a u64
		if i == MAX_LEN - 1 && bits > 1 {
			break;
		}
		value |= bits << shift;
		if byte & 0x80 == 0 {
			return Ok((value, pos + i + 1));
		}
	}
	return_error!(CodecError::LengthOverflow {
		position: pos
	})
}

/// Reads a prefix that counts elements held in memory.
pub fn read_length(buf: &[u8], pos: usize) -> Result<(usize, usize)> {
	let (value, next) = read_leb128(buf, pos)?;
	match usize::try_from(value) {
		Ok(len) => Ok((len, next)),
		Err(_) => return_error!(CodecError::LengthOverflow {
			position: pos
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn encoded(value: u64) -> Vec<u8> {
		let mut out = Vec::new();
		write_leb128(value, &mut out);
		out
	}

	#[test]
	fn test_known_encodings() {
		assert_eq!(encoded(0), vec![0x00]);
		assert_eq!(encoded(1), vec![0x01]);
		assert_eq!(encoded(127), vec![0x7f]);
		assert_eq!(encoded(128), vec![0x80, 0x01]);
		assert_eq!(encoded(300), vec![0xac, 0x02]);
		assert_eq!(encoded(u64::MAX).len(), 10);
	}

	#[test]
	fn test_read_returns_next_position() {
		let buf = [0xff, 0xac, 0x02, 0x07];
		assert_eq!(read_leb128(&buf, 1).unwrap(), (300, 3));
		assert_eq!(read_leb128(&buf, 3).unwrap(), (7, 4));
	}

	#[test]
	fn test_read_max() {
		let buf = encoded(u64::MAX);
		assert_eq!(read_leb128(&buf, 0).unwrap(), (u64::MAX, 10));
	}

	#[test]
	fn test_truncated() {
		let err = read_leb128(&[0x80, 0x80], 0).unwrap_err();
		assert_eq!(err.code(), "CODEC_003");
	}

	#[test]
	fn test_overflow() {
		let err = read_leb128(&[0xff; 11], 0).unwrap_err();
		assert_eq!(err.code(), "CODEC_004");

		let mut too_big = vec![0xff; 9];
		too_big.push(0x02);
		let err = read_leb128(&too_big, 0).unwrap_err();
		assert_eq!(err.code(), "CODEC_004");
	}

	#[test]
	fn test_reader_accepts_writer_output() {
		let mut buf = Vec::new();
		for value in [0, 127, 128, 16_383, 16_384, u64::from(u32::MAX), 1 << 63] {
			write_leb128(value, &mut buf);
		}

		let mut pos = 0;
		for expected in [0, 127, 128, 16_383, 16_384, u64::from(u32::MAX), 1 << 63] {
			let (value, next) = read_leb128(&buf, pos).unwrap();
			assert_eq!(value, expected);
			pos = next;
		}
		assert_eq!(pos, buf.len());
	}
}
