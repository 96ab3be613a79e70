// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colwire_type::{CodecError, Result, TypeDef, Value, return_error};

use super::{Codec, ColumnCodec, expect_parameters};
use crate::{
	Registry,
	buffer::{take, take_array},
};

/// `Nullable(T)`.
///
/// Row-oriented: a flag byte (1 = null, nothing follows; 0 = a `T` follows).
/// Bulk: a null map of `rows` bytes, then `rows` values of `T` with
/// placeholders in the null rows.
#[derive(Debug, Clone, PartialEq)]
pub struct NullableCodec {
	name: String,
	inner: Box<ColumnCodec>,
}

impl NullableCodec {
	pub fn new(def: &TypeDef, registry: &Registry) -> Result<Self> {
		expect_parameters(def, 1)?;
		let inner = registry.resolve(&def.values()[0])?;
		if matches!(inner, ColumnCodec::Nullable(_)) {
			return_error!(CodecError::NestedNullable {
				type_name: def.to_string(),
			});
		}

		Ok(Self {
			name: def.to_string(),
			inner: Box::new(inner),
		})
	}

	pub fn type_name(&self) -> &str {
		&self.name
	}
}

impl Codec for NullableCodec {
	fn decode_one(&self, buf: &[u8], pos: usize) -> Result<(Value, usize)> {
		match take_array::<1>(buf, pos)? {
			[0] => self.inner.decode_one(buf, pos + 1),
			_ => Ok((Value::Null, pos + 1)),
		}
	}

	fn encode_one(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
		if value.is_null() {
			out.push(1);
			return Ok(());
		}
		out.push(0);
		self.inner.encode_one(value, out)
	}

	fn decode_bulk(&self, buf: &[u8], pos: usize, rows: usize, swap: bool) -> Result<(Vec<Value>, usize)> {
		let null_map = take(buf, pos, rows)?;
		let (values, next) = self.inner.decode_bulk(buf, pos + rows, rows, swap)?;
		let column = values
			.into_iter()
			.zip(null_map)
			.map(|(value, &null)| {
				if null == 0 {
					value
				} else {
					Value::Null
				}
			})
			.collect();
		Ok((column, next))
	}

	fn to_native(&self, values: Vec<Value>) -> Vec<Value> {
		self.inner.to_native(values)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CodecConfig;

	fn nullable(name: &str) -> Result<NullableCodec> {
		NullableCodec::new(&TypeDef::parse(name).unwrap(), &Registry::new(CodecConfig::default()))
	}

	#[test]
	fn test_row_layout() {
		let codec = nullable("Nullable(UInt16)").unwrap();
		let mut out = Vec::new();
		codec.encode_one(&Value::Null, &mut out).unwrap();
		codec.encode_one(&Value::UInt16(258), &mut out).unwrap();
		assert_eq!(out, vec![1, 0, 2, 1]);

		assert_eq!(codec.decode_one(&out, 0).unwrap(), (Value::Null, 1));
		assert_eq!(codec.decode_one(&out, 1).unwrap(), (Value::UInt16(258), 4));
	}

	#[test]
	fn test_bulk() {
		let codec = nullable("Nullable(String)").unwrap();
		let buf = [0, 1, 0, 1, b'a', 0, 2, b'b', b'c'];
		let (values, pos) = codec.decode_bulk(&buf, 0, 3, false).unwrap();
		assert_eq!(values, vec![Value::string("a"), Value::Null, Value::string("bc")]);
		assert_eq!(pos, buf.len());
	}

	#[test]
	fn test_nested_nullable_rejected() {
		let err = nullable("Nullable(Nullable(UInt8))").unwrap_err();
		assert_eq!(err.code(), "CODEC_001");
	}

	#[test]
	fn test_truncated_flag() {
		let codec = nullable("Nullable(UInt8)").unwrap();
		assert_eq!(codec.decode_one(&[], 0).unwrap_err().code(), "CODEC_003");
	}
}
