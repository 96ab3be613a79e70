// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colwire_type::{CodecError, Result, TypeDef, Value, return_error};
use tracing::trace;

use super::{Codec, ColumnCodec, check_count, expect_parameters, mismatch, reserve_values};
use crate::{
	Registry,
	buffer::read_u64_words,
	leb128::{read_length, write_leb128},
};

/// `Array(T)`.
///
/// Row-oriented: a LEB128 element count, then the elements. Bulk: `rows`
/// cumulative offsets (u64), then the flattened elements of every row.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayCodec {
	name: String,
	element: Box<ColumnCodec>,
}

impl ArrayCodec {
	/// Resolves the element codec. An element type that is itself an array
	/// is rejected before anything is built for it.
	pub fn new(def: &TypeDef, registry: &Registry) -> Result<Self> {
		expect_parameters(def, 1)?;
		let element_name = &def.values()[0];
		let nested = || CodecError::NestedArray {
			type_name: def.to_string(),
		};

		if TypeDef::parse(element_name)?.name() == "Array" {
			return_error!(nested());
		}
		let element = registry.resolve(element_name)?;
		if matches!(element, ColumnCodec::Array(_)) {
			return_error!(nested());
		}

		Ok(Self {
			name: def.to_string(),
			element: Box::new(element),
		})
	}

	pub fn type_name(&self) -> &str {
		&self.name
	}

	pub fn element(&self) -> &ColumnCodec {
		&self.element
	}
}

impl Codec for ArrayCodec {
	fn decode_one(&self, buf: &[u8], pos: usize) -> Result<(Value, usize)> {
		let (len, mut pos) = read_length(buf, pos)?;
		check_count(len, self.element.min_width(), buf, pos)?;
		let mut values = reserve_values(len, pos)?;
		for _ in 0..len {
			let (value, next) = self.element.decode_one(buf, pos)?;
			values.push(value);
			pos = next;
		}
		Ok((Value::Array(values), pos))
	}

	fn encode_one(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
		let Value::Array(values) = value else {
			return_error!(mismatch(&self.name, value));
		};
		write_leb128(values.len() as u64, out);
		for value in values {
			self.element.encode_one(value, out)?;
		}
		Ok(())
	}

	fn decode_bulk(&self, buf: &[u8], pos: usize, rows: usize, swap: bool) -> Result<(Vec<Value>, usize)> {
		let (offsets, mut pos) = read_u64_words(buf, pos, rows, swap)?;
		let mut column = Vec::with_capacity(rows);
		let mut last = 0u64;

		for (row, &offset) in offsets.iter().enumerate() {
			if offset < last {
				return_error!(CodecError::OffsetsNotMonotonic {
					type_name: self.name.clone(),
					row,
					previous: last,
					current: offset,
				});
			}
			let Ok(count) = usize::try_from(offset - last) else {
				return_error!(CodecError::LengthOverflow {
					position: pos
				});
			};
			last = offset;

			let (values, next) = self.element.decode_bulk(buf, pos, count, swap)?;
			pos = next;
			column.push(Value::Array(self.element.to_native(values)));
		}

		trace!(type_name = %self.name, rows, elements = last, "decoded array column");
		Ok((column, pos))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CodecConfig;

	fn array(name: &str) -> ArrayCodec {
		let registry = Registry::new(CodecConfig::default());
		ArrayCodec::new(&TypeDef::parse(name).unwrap(), &registry).unwrap()
	}

	fn offsets(values: &[u64]) -> Vec<u8> {
		values.iter().flat_map(|v| v.to_ne_bytes()).collect()
	}

	#[test]
	fn test_row_layout() {
		let codec = array("Array(UInt8)");
		let mut out = Vec::new();
		codec.encode_one(&Value::Array(vec![Value::UInt8(7), Value::UInt8(9)]), &mut out).unwrap();
		assert_eq!(out, vec![2, 7, 9]);
		assert_eq!(codec.decode_one(&out, 0).unwrap(), (Value::Array(vec![Value::UInt8(7), Value::UInt8(9)]), 3));
	}

	#[test]
	fn test_empty_row() {
		let codec = array("Array(String)");
		assert_eq!(codec.decode_one(&[0, 0xff], 0).unwrap(), (Value::Array(vec![]), 1));
	}

	#[test]
	fn test_count_past_end() {
		let codec = array("Array(UInt16)");
		assert_eq!(codec.decode_one(&[3, 1, 0, 2, 0], 0).unwrap_err().code(), "CODEC_003");
	}

	#[test]
	fn test_nested_array_rejected() {
		let registry = Registry::new(CodecConfig::default());
		let err = ArrayCodec::new(&TypeDef::parse("Array(Array(UInt8))").unwrap(), &registry).unwrap_err();
		assert_eq!(err.code(), "CODEC_001");
	}

	#[test]
	fn test_bulk_offsets() {
		let codec = array("Array(UInt8)");
		let mut buf = offsets(&[2, 2, 5]);
		buf.extend_from_slice(&[1, 2, 3, 4, 5, 0xee]);

		let (values, pos) = codec.decode_bulk(&buf, 0, 3, false).unwrap();
		assert_eq!(
			values,
			vec![
				Value::Array(vec![Value::UInt8(1), Value::UInt8(2)]),
				Value::Array(vec![]),
				Value::Array(vec![Value::UInt8(3), Value::UInt8(4), Value::UInt8(5)]),
			]
		);
		assert_eq!(pos, 24 + 5);
	}

	#[test]
	fn test_bulk_offsets_swapped() {
		let codec = array("Array(UInt8)");
		let swapped: Vec<u64> = [1u64, 3].iter().map(|v| v.swap_bytes()).collect();
		let mut buf = offsets(&swapped);
		buf.extend_from_slice(&[4, 5, 6]);

		let (values, _) = codec.decode_bulk(&buf, 0, 2, true).unwrap();
		assert_eq!(values[0], Value::Array(vec![Value::UInt8(4)]));
		assert_eq!(values[1], Value::Array(vec![Value::UInt8(5), Value::UInt8(6)]));
	}

	#[test]
	fn test_bulk_decreasing_offsets() {
		let codec = array("Array(UInt8)");
		let mut buf = offsets(&[3, 1]);
		buf.extend_from_slice(&[1, 2, 3]);
		assert_eq!(codec.decode_bulk(&buf, 0, 2, false).unwrap_err().code(), "CODEC_007");
	}

	#[test]
	fn test_bulk_elements_truncated() {
		let codec = array("Array(UInt32)");
		let mut buf = offsets(&[2]);
		buf.extend_from_slice(&[0; 7]);
		assert_eq!(codec.decode_bulk(&buf, 0, 1, false).unwrap_err().code(), "CODEC_003");
	}

	#[test]
	fn test_zero_width_elements() {
		let codec = array("Array(Nothing)");
		assert_eq!(codec.decode_one(&[3], 0).unwrap(), (Value::Array(vec![Value::Null; 3]), 1));
	}

	#[test]
	fn test_zero_width_count_overflow() {
		let codec = array("Array(Nothing)");
		let mut buf = Vec::new();
		write_leb128(u64::MAX, &mut buf);
		assert_eq!(codec.decode_one(&buf, 0).unwrap_err().code(), "CODEC_004");
	}

	#[test]
	fn test_count_beyond_remaining_bytes() {
		let codec = array("Array(UInt64)");
		let mut buf = Vec::new();
		write_leb128(1 << 40, &mut buf);
		buf.extend_from_slice(&[0; 16]);
		assert_eq!(codec.decode_one(&buf, 0).unwrap_err().code(), "CODEC_003");
	}

	#[test]
	fn test_bulk_zero_width_offset_overflow() {
		let codec = array("Array(Nothing)");
		let buf = offsets(&[1 << 60]);
		assert_eq!(codec.decode_bulk(&buf, 0, 1, false).unwrap_err().code(), "CODEC_004");
	}
}
