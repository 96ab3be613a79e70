// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colwire_type::{Result, TypeDef, Value};

use super::{Codec, expect_parameters, reserve_values};

/// The `Nothing` type: always null, zero bytes on both wire formats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NothingCodec;

impl NothingCodec {
	pub fn from_type_def(def: &TypeDef) -> Result<Self> {
		expect_parameters(def, 0)?;
		Ok(Self)
	}

	pub fn type_name(&self) -> &str {
		"Nothing"
	}
}

impl Codec for NothingCodec {
	fn decode_one(&self, _buf: &[u8], pos: usize) -> Result<(Value, usize)> {
		Ok((Value::Null, pos))
	}

	fn encode_one(&self, _value: &Value, _out: &mut Vec<u8>) -> Result<()> {
		Ok(())
	}

	fn decode_bulk(&self, _buf: &[u8], pos: usize, rows: usize, _swap: bool) -> Result<(Vec<Value>, usize)> {
		let mut values = reserve_values(rows, pos)?;
		values.resize(rows, Value::Null);
		Ok((values, pos))
	}
}
