// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colwire_type::{CodecError, OrderedF32, OrderedF64, Result, TypeDef, Value, return_error};

use super::{Codec, expect_parameters, mismatch};
use crate::buffer::{take, take_rows};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
	Bool,
	Int8,
	Int16,
	Int32,
	Int64,
	Int128,
	UInt8,
	UInt16,
	UInt32,
	UInt64,
	UInt128,
	Float32,
	Float64,
}

impl NumberKind {
	pub const ALL: [NumberKind; 13] = [
		NumberKind::Bool,
		NumberKind::Int8,
		NumberKind::Int16,
		NumberKind::Int32,
		NumberKind::Int64,
		NumberKind::Int128,
		NumberKind::UInt8,
		NumberKind::UInt16,
		NumberKind::UInt32,
		NumberKind::UInt64,
		NumberKind::UInt128,
		NumberKind::Float32,
		NumberKind::Float64,
	];

	pub const fn name(self) -> &'static str {
		match self {
			NumberKind::Bool => "Bool",
			NumberKind::Int8 => "Int8",
			NumberKind::Int16 => "Int16",
			NumberKind::Int32 => "Int32",
			NumberKind::Int64 => "Int64",
			NumberKind::Int128 => "Int128",
			NumberKind::UInt8 => "UInt8",
			NumberKind::UInt16 => "UInt16",
			NumberKind::UInt32 => "UInt32",
			NumberKind::UInt64 => "UInt64",
			NumberKind::UInt128 => "UInt128",
			NumberKind::Float32 => "Float32",
			NumberKind::Float64 => "Float64",
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.name() == name)
	}

	/// Width in bytes on both wire formats.
	pub const fn width(self) -> usize {
		match self {
			NumberKind::Bool | NumberKind::Int8 | NumberKind::UInt8 => 1,
			NumberKind::Int16 | NumberKind::UInt16 => 2,
			NumberKind::Int32 | NumberKind::UInt32 | NumberKind::Float32 => 4,
			NumberKind::Int64 | NumberKind::UInt64 | NumberKind::Float64 => 8,
			NumberKind::Int128 | NumberKind::UInt128 => 16,
		}
	}

	fn from_bits(self, bits: u128) -> Value {
		match self {
			NumberKind::Bool => Value::Bool(bits != 0),
			NumberKind::Int8 => Value::Int8(bits as u8 as i8),
			NumberKind::Int16 => Value::Int16(bits as u16 as i16),
			NumberKind::Int32 => Value::Int32(bits as u32 as i32),
			NumberKind::Int64 => Value::Int64(bits as u64 as i64),
			NumberKind::Int128 => Value::Int128(bits as i128),
			NumberKind::UInt8 => Value::UInt8(bits as u8),
			NumberKind::UInt16 => Value::UInt16(bits as u16),
			NumberKind::UInt32 => Value::UInt32(bits as u32),
			NumberKind::UInt64 => Value::UInt64(bits as u64),
			NumberKind::UInt128 => Value::UInt128(bits),
			NumberKind::Float32 => Value::Float32(OrderedF32::from_bits(bits as u32)),
			NumberKind::Float64 => Value::Float64(OrderedF64::from_bits(bits as u64)),
		}
	}

	fn to_bits(self, value: &Value) -> Option<u128> {
		let bits = match (self, value) {
			(NumberKind::Bool, Value::Bool(v)) => u128::from(*v),
			(NumberKind::Int8, Value::Int8(v)) => *v as u8 as u128,
			(NumberKind::Int16, Value::Int16(v)) => *v as u16 as u128,
			(NumberKind::Int32, Value::Int32(v)) => *v as u32 as u128,
			(NumberKind::Int64, Value::Int64(v)) => *v as u64 as u128,
			(NumberKind::Int128, Value::Int128(v)) => *v as u128,
			(NumberKind::UInt8, Value::UInt8(v)) => u128::from(*v),
			(NumberKind::UInt16, Value::UInt16(v)) => u128::from(*v),
			(NumberKind::UInt32, Value::UInt32(v)) => u128::from(*v),
			(NumberKind::UInt64, Value::UInt64(v)) => u128::from(*v),
			(NumberKind::UInt128, Value::UInt128(v)) => *v,
			(NumberKind::Float32, Value::Float32(v)) => u128::from(v.to_bits()),
			(NumberKind::Float64, Value::Float64(v)) => u128::from(v.to_bits()),
			_ => return None,
		};
		Some(bits)
	}
}

/// Fixed-width integers, floats and `Bool`.
///
/// Row-oriented values are little-endian. Bulk columns hold `rows` words in
/// host order, byte-swapped when the caller says the wire order differs.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberCodec {
	kind: NumberKind,
}

impl NumberCodec {
	pub fn new(kind: NumberKind) -> Self {
		Self {
			kind,
		}
	}

	pub fn from_type_def(def: &TypeDef) -> Result<Self> {
		let Some(kind) = NumberKind::from_name(def.name()) else {
			return_error!(CodecError::InvalidParameter {
				type_name: def.to_string(),
				reason: "not a numeric type".to_string(),
			});
		};
		expect_parameters(def, 0)?;
		Ok(Self::new(kind))
	}

	pub fn kind(&self) -> NumberKind {
		self.kind
	}

	pub fn type_name(&self) -> &str {
		self.kind.name()
	}
}

fn read_bits(bytes: &[u8], little_endian: bool) -> u128 {
	let fold = |acc: u128, byte: &u8| (acc << 8) | u128::from(*byte);
	if little_endian {
		bytes.iter().rev().fold(0, fold)
	} else {
		bytes.iter().fold(0, fold)
	}
}

impl Codec for NumberCodec {
	fn decode_one(&self, buf: &[u8], pos: usize) -> Result<(Value, usize)> {
		let width = self.kind.width();
		let bytes = take(buf, pos, width)?;
		Ok((self.kind.from_bits(read_bits(bytes, true)), pos + width))
	}

	fn encode_one(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
		let Some(bits) = self.kind.to_bits(value) else {
			return_error!(mismatch(self.type_name(), value));
		};
		out.extend_from_slice(&bits.to_le_bytes()[..self.kind.width()]);
		Ok(())
	}

	fn decode_bulk(&self, buf: &[u8], pos: usize, rows: usize, swap: bool) -> Result<(Vec<Value>, usize)> {
		let width = self.kind.width();
		let bytes = take_rows(buf, pos, rows, width)?;
		let little_endian = cfg!(target_endian = "little") != swap;
		let values = bytes.chunks_exact(width).map(|word| self.kind.from_bits(read_bits(word, little_endian))).collect();
		Ok((values, pos + bytes.len()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn encode(kind: NumberKind, value: Value) -> Vec<u8> {
		let mut out = Vec::new();
		NumberCodec::new(kind).encode_one(&value, &mut out).unwrap();
		out
	}

	#[test]
	fn test_row_layout_is_little_endian() {
		assert_eq!(encode(NumberKind::UInt16, Value::UInt16(0x0102)), vec![0x02, 0x01]);
		assert_eq!(encode(NumberKind::Int32, Value::Int32(-2)), vec![0xfe, 0xff, 0xff, 0xff]);
		assert_eq!(encode(NumberKind::Float64, Value::float64(1.0)), 1.0f64.to_le_bytes().to_vec());
		assert_eq!(encode(NumberKind::Bool, Value::Bool(true)), vec![1]);
	}

	#[test]
	fn test_decode_one() {
		let codec = NumberCodec::new(NumberKind::Int64);
		let mut buf = vec![0x00];
		buf.extend_from_slice(&(-42i64).to_le_bytes());
		assert_eq!(codec.decode_one(&buf, 1).unwrap(), (Value::Int64(-42), 9));
	}

	#[test]
	fn test_extremes_roundtrip() {
		for (kind, value) in [
			(NumberKind::Int8, Value::Int8(i8::MIN)),
			(NumberKind::Int128, Value::Int128(i128::MIN)),
			(NumberKind::UInt128, Value::UInt128(u128::MAX)),
			(NumberKind::UInt64, Value::UInt64(u64::MAX)),
			(NumberKind::Float32, Value::float32(f32::NAN)),
			(NumberKind::Float64, Value::float64(-0.0)),
		] {
			let codec = NumberCodec::new(kind);
			let bytes = encode(kind, value.clone());
			assert_eq!(bytes.len(), kind.width());
			assert_eq!(codec.decode_one(&bytes, 0).unwrap(), (value, kind.width()));
		}
	}

	#[test]
	fn test_bool_nonzero_is_true() {
		let codec = NumberCodec::new(NumberKind::Bool);
		assert_eq!(codec.decode_one(&[7], 0).unwrap().0, Value::Bool(true));
	}

	#[test]
	fn test_truncated() {
		let codec = NumberCodec::new(NumberKind::UInt32);
		assert_eq!(codec.decode_one(&[1, 2, 3], 0).unwrap_err().code(), "CODEC_003");
	}

	#[test]
	fn test_encode_wrong_variant() {
		let codec = NumberCodec::new(NumberKind::UInt8);
		let err = codec.encode_one(&Value::Int8(1), &mut Vec::new()).unwrap_err();
		assert_eq!(err.code(), "CODEC_005");
	}

	#[test]
	fn test_decode_bulk_host_order() {
		let codec = NumberCodec::new(NumberKind::UInt32);
		let mut buf = Vec::new();
		for v in [1u32, 0x0102_0304, u32::MAX] {
			buf.extend_from_slice(&v.to_ne_bytes());
		}
		let (values, pos) = codec.decode_bulk(&buf, 0, 3, false).unwrap();
		assert_eq!(values, vec![Value::UInt32(1), Value::UInt32(0x0102_0304), Value::UInt32(u32::MAX)]);
		assert_eq!(pos, 12);
	}

	#[test]
	fn test_decode_bulk_swapped() {
		let codec = NumberCodec::new(NumberKind::Int16);
		let mut buf = Vec::new();
		for v in [-3i16, 0x0102] {
			buf.extend_from_slice(&v.swap_bytes().to_ne_bytes());
		}
		let (values, _) = codec.decode_bulk(&buf, 0, 2, true).unwrap();
		assert_eq!(values, vec![Value::Int16(-3), Value::Int16(0x0102)]);
	}

	#[test]
	fn test_from_type_def() {
		let codec = NumberCodec::from_type_def(&TypeDef::parse("Float32").unwrap()).unwrap();
		assert_eq!(codec.kind(), NumberKind::Float32);

		let err = NumberCodec::from_type_def(&TypeDef::parse("UInt8(3)").unwrap()).unwrap_err();
		assert_eq!(err.code(), "CODEC_006");
	}
}
