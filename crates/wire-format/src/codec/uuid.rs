// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colwire_type::{Result, TypeDef, Uuid, Value, return_error};
use tracing::trace;

use super::{Codec, expect_parameters, mismatch};
use crate::buffer::{take_array, take_rows};

const WIDTH: usize = 16;

/// `UUID` columns.
///
/// The wire stores the identifier as two little-endian 64-bit words, high
/// word first: each 8-byte half of the standard byte order is reversed on
/// its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UuidCodec;

impl UuidCodec {
	pub fn from_type_def(def: &TypeDef) -> Result<Self> {
		expect_parameters(def, 0)?;
		Ok(Self)
	}

	pub fn type_name(&self) -> &str {
		"UUID"
	}
}

fn words(chunk: &[u8]) -> (u64, u64) {
	let mut high = [0u8; 8];
	let mut low = [0u8; 8];
	high.copy_from_slice(&chunk[..8]);
	low.copy_from_slice(&chunk[8..WIDTH]);
	(u64::from_le_bytes(high), u64::from_le_bytes(low))
}

impl Codec for UuidCodec {
	fn decode_one(&self, buf: &[u8], pos: usize) -> Result<(Value, usize)> {
		let raw = take_array::<WIDTH>(buf, pos)?;
		let (high, low) = words(&raw);

		let mut bytes = [0u8; WIDTH];
		bytes[..8].copy_from_slice(&high.to_be_bytes());
		bytes[8..].copy_from_slice(&low.to_be_bytes());
		Ok((Value::Uuid(Uuid::from_bytes(bytes)), pos + WIDTH))
	}

	fn encode_one(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
		let Value::Uuid(uuid) = value else {
			return_error!(mismatch(self.type_name(), value));
		};
		let (high, low) = uuid.as_bytes().split_at(8);
		out.extend(high.iter().rev());
		out.extend(low.iter().rev());
		Ok(())
	}

	/// Reassembles every row from its two words in a single pass, through
	/// the unchecked constructor: the bits come straight off the wire.
	fn decode_bulk(&self, buf: &[u8], pos: usize, rows: usize, _swap: bool) -> Result<(Vec<Value>, usize)> {
		let bytes = take_rows(buf, pos, rows, WIDTH)?;
		let values = bytes
			.chunks_exact(WIDTH)
			.map(|chunk| {
				let (high, low) = words(chunk);
				Value::Uuid(Uuid::from_u128_unchecked((u128::from(high) << 64) | u128::from(low)))
			})
			.collect();
		trace!(rows, "decoded uuid column");
		Ok((values, pos + bytes.len()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const STANDARD: [u8; 16] =
		[0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff];
	const WIRE: [u8; 16] =
		[0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11, 0x00, 0xff, 0xee, 0xdd, 0xcc, 0xbb, 0xaa, 0x99, 0x88];

	#[test]
	fn test_encode_reverses_each_half() {
		let mut out = Vec::new();
		UuidCodec.encode_one(&Value::Uuid(Uuid::from_bytes(STANDARD)), &mut out).unwrap();
		assert_eq!(out, WIRE);
	}

	#[test]
	fn test_decode_one() {
		let (value, pos) = UuidCodec.decode_one(&WIRE, 0).unwrap();
		assert_eq!(value, Value::Uuid(Uuid::from_bytes(STANDARD)));
		assert_eq!(pos, 16);
	}

	#[test]
	fn test_roundtrip() {
		let uuid = Uuid::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
		let mut out = Vec::new();
		UuidCodec.encode_one(&Value::Uuid(uuid), &mut out).unwrap();
		assert_eq!(UuidCodec.decode_one(&out, 0).unwrap(), (Value::Uuid(uuid), 16));
	}

	#[test]
	fn test_bulk_matches_row_path() {
		let second = Uuid::parse("f47ac10b-58cc-4372-a567-0e02b2c3d479").unwrap();
		let mut buf = WIRE.to_vec();
		UuidCodec.encode_one(&Value::Uuid(second), &mut buf).unwrap();

		let (values, pos) = UuidCodec.decode_bulk(&buf, 0, 2, false).unwrap();
		assert_eq!(values, vec![Value::Uuid(Uuid::from_bytes(STANDARD)), Value::Uuid(second)]);
		assert_eq!(pos, 32);
	}

	#[test]
	fn test_truncated() {
		assert_eq!(UuidCodec.decode_one(&WIRE[..15], 0).unwrap_err().code(), "CODEC_003");
		assert_eq!(UuidCodec.decode_bulk(&WIRE, 0, 2, false).unwrap_err().code(), "CODEC_003");
	}

	#[test]
	fn test_encode_wrong_variant() {
		let err = UuidCodec.encode_one(&Value::string("00112233"), &mut Vec::new()).unwrap_err();
		assert_eq!(err.code(), "CODEC_005");
	}
}
