// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colwire_type::{CodecError, Operation, Result, TypeDef, Value, return_error};

use super::{Codec, ColumnCodec, mismatch, unsupported};
use crate::Registry;

/// `Tuple(T1, T2, ...)`: the elements one after another, no framing.
#[derive(Debug, Clone, PartialEq)]
pub struct TupleCodec {
	name: String,
	elements: Vec<ColumnCodec>,
}

impl TupleCodec {
	pub fn new(def: &TypeDef, registry: &Registry) -> Result<Self> {
		if def.values().is_empty() {
			return_error!(CodecError::InvalidParameter {
				type_name: def.to_string(),
				reason: "a tuple needs at least one element type".to_string(),
			});
		}
		let elements = def.values().iter().map(|name| registry.resolve(name)).collect::<Result<Vec<_>>>()?;

		Ok(Self {
			name: def.to_string(),
			elements,
		})
	}

	pub fn type_name(&self) -> &str {
		&self.name
	}

	pub fn elements(&self) -> &[ColumnCodec] {
		&self.elements
	}
}

impl Codec for TupleCodec {
	fn decode_one(&self, buf: &[u8], mut pos: usize) -> Result<(Value, usize)> {
		let mut values = Vec::with_capacity(self.elements.len());
		for element in &self.elements {
			let (value, next) = element.decode_one(buf, pos)?;
			values.push(value);
			pos = next;
		}
		Ok((Value::Tuple(values), pos))
	}

	fn encode_one(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
		let Value::Tuple(values) = value else {
			return_error!(mismatch(&self.name, value));
		};
		if values.len() != self.elements.len() {
			return_error!(CodecError::ArityMismatch {
				type_name: self.name.clone(),
				expected: self.elements.len(),
				found: values.len(),
			});
		}
		for (element, value) in self.elements.iter().zip(values) {
			element.encode_one(value, out)?;
		}
		Ok(())
	}

	// no columnar layout is defined for tuples
	fn decode_bulk(&self, _buf: &[u8], _pos: usize, _rows: usize, _swap: bool) -> Result<(Vec<Value>, usize)> {
		return_error!(unsupported(&self.name, Operation::DecodeBulk))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CodecConfig;

	fn tuple(name: &str) -> TupleCodec {
		TupleCodec::new(&TypeDef::parse(name).unwrap(), &Registry::new(CodecConfig::default())).unwrap()
	}

	#[test]
	fn test_roundtrip() {
		let codec = tuple("Tuple(UInt8, String, Array(Int16))");
		let value = Value::Tuple(vec![
			Value::UInt8(1),
			Value::string("two"),
			Value::Array(vec![Value::Int16(-3)]),
		]);
		let mut out = Vec::new();
		codec.encode_one(&value, &mut out).unwrap();
		assert_eq!(out, vec![1, 3, b't', b'w', b'o', 1, 0xfd, 0xff]);
		assert_eq!(codec.decode_one(&out, 0).unwrap(), (value, out.len()));
	}

	#[test]
	fn test_arity_mismatch() {
		let codec = tuple("Tuple(UInt8, UInt8)");
		let err = codec.encode_one(&Value::Tuple(vec![Value::UInt8(1)]), &mut Vec::new()).unwrap_err();
		assert_eq!(err.code(), "CODEC_009");
	}

	#[test]
	fn test_bulk_unsupported() {
		let codec = tuple("Tuple(UInt8)");
		assert_eq!(codec.decode_bulk(&[1, 2], 0, 2, false).unwrap_err().code(), "CODEC_002");
	}

	#[test]
	fn test_empty_tuple_rejected() {
		let err = TupleCodec::new(&TypeDef::parse("Tuple()").unwrap(), &Registry::new(CodecConfig::default()))
			.unwrap_err();
		assert_eq!(err.code(), "CODEC_006");
	}
}
