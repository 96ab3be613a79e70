// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colwire_type::{CodecError, Operation, Result, TypeDef, Value, ValueMap, return_error};

use super::{Codec, ColumnCodec, check_count, expect_parameters, mismatch, unsupported};
use crate::{
	Registry,
	leb128::{read_length, write_leb128},
};

/// `Map(K, V)`: a LEB128 pair count, then each key followed by its value.
///
/// Keys are unique after decoding; a repeated key keeps the last value.
#[derive(Debug, Clone, PartialEq)]
pub struct MapCodec {
	name: String,
	key: Box<ColumnCodec>,
	value: Box<ColumnCodec>,
}

impl MapCodec {
	pub fn new(def: &TypeDef, registry: &Registry) -> Result<Self> {
		expect_parameters(def, 2)?;
		let key = registry.resolve(&def.values()[0])?;
		let value = registry.resolve(&def.values()[1])?;

		Ok(Self {
			name: def.to_string(),
			key: Box::new(key),
			value: Box::new(value),
		})
	}

	pub fn type_name(&self) -> &str {
		&self.name
	}
}

impl Codec for MapCodec {
	fn decode_one(&self, buf: &[u8], pos: usize) -> Result<(Value, usize)> {
		let (len, mut pos) = read_length(buf, pos)?;
		check_count(len, self.key.min_width() + self.value.min_width(), buf, pos)?;
		let mut map = ValueMap::new();
		if map.try_reserve_exact(len).is_err() {
			return_error!(CodecError::LengthOverflow {
				position: pos
			});
		}
		for _ in 0..len {
			let (key, next) = self.key.decode_one(buf, pos)?;
			let (value, next) = self.value.decode_one(buf, next)?;
			map.insert(key, value);
			pos = next;
		}
		Ok((Value::Map(map), pos))
	}

	fn encode_one(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
		let Value::Map(map) = value else {
			return_error!(mismatch(&self.name, value));
		};
		write_leb128(map.len() as u64, out);
		for (key, value) in map {
			self.key.encode_one(key, out)?;
			self.value.encode_one(value, out)?;
		}
		Ok(())
	}

	fn decode_bulk(&self, _buf: &[u8], _pos: usize, _rows: usize, _swap: bool) -> Result<(Vec<Value>, usize)> {
		return_error!(unsupported(&self.name, Operation::DecodeBulk))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CodecConfig;

	fn map(name: &str) -> MapCodec {
		MapCodec::new(&TypeDef::parse(name).unwrap(), &Registry::new(CodecConfig::default())).unwrap()
	}

	#[test]
	fn test_value_is_encoded_with_value_codec() {
		let codec = map("Map(UInt8, String)");
		let mut out = Vec::new();
		codec.encode_one(&Value::map([(Value::UInt8(1), Value::string("a"))]), &mut out).unwrap();
		assert_eq!(out, vec![1, 1, 1, b'a']);
	}

	#[test]
	fn test_repeated_key_keeps_last() {
		let codec = map("Map(UInt8, UInt8)");
		let (value, pos) = codec.decode_one(&[2, 5, 1, 5, 2], 0).unwrap();
		assert_eq!(value, Value::map([(Value::UInt8(5), Value::UInt8(2))]));
		assert_eq!(pos, 5);
	}

	#[test]
	fn test_truncated_pair() {
		let codec = map("Map(UInt8, UInt16)");
		assert_eq!(codec.decode_one(&[1, 5, 1], 0).unwrap_err().code(), "CODEC_003");
	}

	#[test]
	fn test_wrong_arity() {
		let err = MapCodec::new(&TypeDef::parse("Map(String)").unwrap(), &Registry::new(CodecConfig::default()))
			.unwrap_err();
		assert_eq!(err.code(), "CODEC_006");
	}

	#[test]
	fn test_bulk_unsupported() {
		assert_eq!(map("Map(String, String)").decode_bulk(&[], 0, 0, false).unwrap_err().code(), "CODEC_002");
	}

	#[test]
	fn test_zero_width_count_overflow() {
		let codec = map("Map(Nothing, Nothing)");
		let mut buf = Vec::new();
		write_leb128(u64::MAX, &mut buf);
		assert_eq!(codec.decode_one(&buf, 0).unwrap_err().code(), "CODEC_004");
	}

	#[test]
	fn test_count_beyond_remaining_bytes() {
		let codec = map("Map(UInt8, String)");
		let mut buf = Vec::new();
		write_leb128(1 << 32, &mut buf);
		buf.extend_from_slice(&[1, 1, b'a']);
		assert_eq!(codec.decode_one(&buf, 0).unwrap_err().code(), "CODEC_003");
	}
}
