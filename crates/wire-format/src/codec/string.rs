// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colwire_type::{Result, TypeDef, Value, return_error};

use super::{Codec, expect_parameters, mismatch};
use crate::{
	buffer::take,
	leb128::{read_length, write_leb128},
};

/// Variable-length `String`: a LEB128 byte count followed by the bytes.
/// Bulk columns are `rows` such values back to back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringCodec;

impl StringCodec {
	pub fn from_type_def(def: &TypeDef) -> Result<Self> {
		expect_parameters(def, 0)?;
		Ok(Self)
	}

	pub fn type_name(&self) -> &str {
		"String"
	}
}

impl Codec for StringCodec {
	fn decode_one(&self, buf: &[u8], pos: usize) -> Result<(Value, usize)> {
		let (len, pos) = read_length(buf, pos)?;
		let bytes = take(buf, pos, len)?;
		let value = match String::from_utf8(bytes.to_vec()) {
			Ok(text) => Value::String(text),
			Err(err) => Value::Bytes(err.into_bytes()),
		};
		Ok((value, pos + len))
	}

	fn encode_one(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
		let bytes = match value {
			Value::String(text) => text.as_bytes(),
			Value::Bytes(bytes) => bytes.as_slice(),
			_ => return_error!(mismatch(self.type_name(), value)),
		};
		write_leb128(bytes.len() as u64, out);
		out.extend_from_slice(bytes);
		Ok(())
	}

	fn decode_bulk(&self, buf: &[u8], mut pos: usize, rows: usize, _swap: bool) -> Result<(Vec<Value>, usize)> {
		let mut values = Vec::with_capacity(rows.min(buf.len().saturating_sub(pos)));
		for _ in 0..rows {
			let (value, next) = self.decode_one(buf, pos)?;
			values.push(value);
			pos = next;
		}
		Ok((values, pos))
	}
}
