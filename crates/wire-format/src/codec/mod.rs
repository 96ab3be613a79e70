// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colwire_type::{CodecError, Operation, Result, TypeDef, Value, return_error};
use tracing::trace;

mod aggregate;
mod array;
mod fixed_string;
mod map;
mod nothing;
mod nullable;
mod number;
mod string;
mod tuple;
mod uuid;

pub use aggregate::{AggregateFunctionCodec, SimpleAggregateFunctionCodec};
pub use array::ArrayCodec;
pub use fixed_string::FixedStringCodec;
pub use map::MapCodec;
pub use nothing::NothingCodec;
pub use nullable::NullableCodec;
pub use number::{NumberCodec, NumberKind};
pub use string::StringCodec;
pub use tuple::TupleCodec;
pub use uuid::UuidCodec;

/// Operations every column type supports.
///
/// Decoders read from a caller-owned buffer starting at `pos` and return the
/// position of the first unconsumed byte. Encoders append exactly the bytes
/// of one value to `out`.
pub trait Codec {
	/// Row-oriented decode of one value.
	fn decode_one(&self, buf: &[u8], pos: usize) -> Result<(Value, usize)>;

	/// Row-oriented encode of one value.
	fn encode_one(&self, value: &Value, out: &mut Vec<u8>) -> Result<()>;

	/// Columnar decode of `rows` values. `swap` is set when the wire byte
	/// order differs from the host's.
	fn decode_bulk(&self, buf: &[u8], pos: usize, rows: usize, swap: bool) -> Result<(Vec<Value>, usize)>;

	/// Maps a bulk-decoded column to the form handed to the caller.
	fn to_native(&self, values: Vec<Value>) -> Vec<Value> {
		values
	}
}

/// A resolved codec tree. Composite variants own their children.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnCodec {
	Number(NumberCodec),
	String(StringCodec),
	Uuid(UuidCodec),
	FixedString(FixedStringCodec),
	Nothing(NothingCodec),
	Nullable(NullableCodec),
	Array(ArrayCodec),
	Tuple(TupleCodec),
	Map(MapCodec),
	AggregateFunction(AggregateFunctionCodec),
	SimpleAggregateFunction(SimpleAggregateFunctionCodec),
}

impl ColumnCodec {
	/// Type name the codec was built from, e.g. `Array(String)`.
	pub fn type_name(&self) -> &str {
		match self {
			ColumnCodec::Number(c) => c.type_name(),
			ColumnCodec::String(c) => c.type_name(),
			ColumnCodec::Uuid(c) => c.type_name(),
			ColumnCodec::FixedString(c) => c.type_name(),
			ColumnCodec::Nothing(c) => c.type_name(),
			ColumnCodec::Nullable(c) => c.type_name(),
			ColumnCodec::Array(c) => c.type_name(),
			ColumnCodec::Tuple(c) => c.type_name(),
			ColumnCodec::Map(c) => c.type_name(),
			ColumnCodec::AggregateFunction(c) => c.type_name(),
			ColumnCodec::SimpleAggregateFunction(c) => c.type_name(),
		}
	}

	/// Fewest bytes one row-oriented value occupies. Zero for `Nothing` and
	/// for composites built only from it.
	pub fn min_width(&self) -> usize {
		match self {
			ColumnCodec::Number(c) => c.kind().width(),
			ColumnCodec::String(_) => 1,
			ColumnCodec::Uuid(_) => 16,
			ColumnCodec::FixedString(c) => c.size(),
			ColumnCodec::Nothing(_) => 0,
			ColumnCodec::Nullable(_) => 1,
			ColumnCodec::Array(_) => 1,
			ColumnCodec::Tuple(c) => c.elements().iter().map(ColumnCodec::min_width).sum(),
			ColumnCodec::Map(_) => 1,
			ColumnCodec::AggregateFunction(_) => 0,
			ColumnCodec::SimpleAggregateFunction(c) => c.inner().min_width(),
		}
	}
}

macro_rules! dispatch {
	($self:ident, $codec:ident => $body:expr) => {
		match $self {
			ColumnCodec::Number($codec) => $body,
			ColumnCodec::String($codec) => $body,
			ColumnCodec::Uuid($codec) => $body,
			ColumnCodec::FixedString($codec) => $body,
			ColumnCodec::Nothing($codec) => $body,
			ColumnCodec::Nullable($codec) => $body,
			ColumnCodec::Array($codec) => $body,
			ColumnCodec::Tuple($codec) => $body,
			ColumnCodec::Map($codec) => $body,
			ColumnCodec::AggregateFunction($codec) => $body,
			ColumnCodec::SimpleAggregateFunction($codec) => $body,
		}
	};
}

impl Codec for ColumnCodec {
	fn decode_one(&self, buf: &[u8], pos: usize) -> Result<(Value, usize)> {
		dispatch!(self, c => c.decode_one(buf, pos))
	}

	fn encode_one(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
		dispatch!(self, c => c.encode_one(value, out))
	}

	fn decode_bulk(&self, buf: &[u8], pos: usize, rows: usize, swap: bool) -> Result<(Vec<Value>, usize)> {
		dispatch!(self, c => c.decode_bulk(buf, pos, rows, swap))
	}

	fn to_native(&self, values: Vec<Value>) -> Vec<Value> {
		dispatch!(self, c => c.to_native(values))
	}
}

/// Decodes a whole column of `rows` values and applies the codec's
/// post-decode transform.
pub fn decode_column(
	codec: &impl Codec,
	buf: &[u8],
	pos: usize,
	rows: usize,
	swap: bool,
) -> Result<(Vec<Value>, usize)> {
	let (values, next) = codec.decode_bulk(buf, pos, rows, swap)?;
	trace!(rows, start = pos, end = next, "decoded column");
	Ok((codec.to_native(values), next))
}

pub(crate) fn mismatch(type_name: &str, value: &Value) -> CodecError {
	CodecError::ValueMismatch {
		type_name: type_name.to_string(),
		found: value.kind(),
	}
}

pub(crate) fn unsupported(type_name: &str, operation: Operation) -> CodecError {
	CodecError::Unsupported {
		type_name: type_name.to_string(),
		operation,
	}
}

/// Checks a wire-supplied element count against the bytes left after `pos`,
/// given that every element takes at least `width` bytes.
pub(crate) fn check_count(count: usize, width: usize, buf: &[u8], pos: usize) -> Result<()> {
	let available = buf.len().saturating_sub(pos);
	if width > 0 && count > available / width {
		return_error!(CodecError::BufferUnderrun {
			position: pos,
			needed: count.saturating_mul(width),
			available,
		});
	}
	Ok(())
}

/// Preallocates `count` values. A count that cannot be held in memory is a
/// length overflow rather than an allocation failure.
pub(crate) fn reserve_values(count: usize, pos: usize) -> Result<Vec<Value>> {
	let mut values = Vec::new();
	if values.try_reserve_exact(count).is_err() {
		return_error!(CodecError::LengthOverflow {
			position: pos
		});
	}
	Ok(values)
}

/// Checks that `def` carries exactly `count` parameters.
pub(crate) fn expect_parameters(def: &TypeDef, count: usize) -> Result<()> {
	if def.values().len() != count {
		return_error!(CodecError::InvalidParameter {
			type_name: def.to_string(),
			reason: format!("expected {} type parameters, found {}", count, def.values().len()),
		});
	}
	Ok(())
}
