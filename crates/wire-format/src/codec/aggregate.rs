// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colwire_type::{CodecError, Operation, Result, TypeDef, Value, return_error};

use super::{Codec, ColumnCodec, unsupported};
use crate::Registry;

/// `AggregateFunction(f, T...)`: an engine internal aggregation state.
/// Its binary layout is engine specific, so every operation fails.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateFunctionCodec {
	name: String,
}

impl AggregateFunctionCodec {
	pub fn new(def: &TypeDef) -> Result<Self> {
		if def.values().is_empty() {
			return_error!(CodecError::InvalidParameter {
				type_name: def.to_string(),
				reason: "missing aggregate function name".to_string(),
			});
		}
		Ok(Self {
			name: def.to_string(),
		})
	}

	pub fn type_name(&self) -> &str {
		&self.name
	}
}

impl Codec for AggregateFunctionCodec {
	fn decode_one(&self, _buf: &[u8], _pos: usize) -> Result<(Value, usize)> {
		return_error!(unsupported(&self.name, Operation::DecodeOne))
	}

	fn encode_one(&self, _value: &Value, _out: &mut Vec<u8>) -> Result<()> {
		return_error!(unsupported(&self.name, Operation::EncodeOne))
	}

	fn decode_bulk(&self, _buf: &[u8], _pos: usize, _rows: usize, _swap: bool) -> Result<(Vec<Value>, usize)> {
		return_error!(unsupported(&self.name, Operation::DecodeBulk))
	}
}

/// `SimpleAggregateFunction(f, T)`: stored exactly like `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleAggregateFunctionCodec {
	name: String,
	inner: Box<ColumnCodec>,
}

impl SimpleAggregateFunctionCodec {
	pub fn new(def: &TypeDef, registry: &Registry) -> Result<Self> {
		let Some(inner_name) = def.value(1) else {
			return_error!(CodecError::InvalidParameter {
				type_name: def.to_string(),
				reason: "expected a function name and a value type".to_string(),
			});
		};
		let inner = registry.resolve(inner_name)?;

		Ok(Self {
			name: def.to_string(),
			inner: Box::new(inner),
		})
	}

	pub fn type_name(&self) -> &str {
		&self.name
	}

	pub fn inner(&self) -> &ColumnCodec {
		&self.inner
	}
}

impl Codec for SimpleAggregateFunctionCodec {
	fn decode_one(&self, buf: &[u8], pos: usize) -> Result<(Value, usize)> {
		self.inner.decode_one(buf, pos)
	}

	fn encode_one(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
		self.inner.encode_one(value, out)
	}

	fn decode_bulk(&self, _buf: &[u8], _pos: usize, _rows: usize, _swap: bool) -> Result<(Vec<Value>, usize)> {
		return_error!(unsupported(&self.name, Operation::DecodeBulk))
	}
}
