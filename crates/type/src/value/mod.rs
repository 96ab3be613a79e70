// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	hash::{Hash, Hasher},
	mem,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

mod ordered_f32;
mod ordered_f64;
pub mod uuid;

pub use ordered_f32::OrderedF32;
pub use ordered_f64::OrderedF64;
pub use self::uuid::Uuid;

/// Key/value pairs of a decoded `Map`. Keys are unique; equality ignores
/// insertion order.
pub type ValueMap = IndexMap<Value, Value>;

/// A decoded column value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
	/// Absence of a value: the `Nothing` type and null rows of `Nullable`
	Null,
	Bool(bool),
	Int8(i8),
	Int16(i16),
	Int32(i32),
	Int64(i64),
	Int128(i128),
	UInt8(u8),
	UInt16(u16),
	UInt32(u32),
	UInt64(u64),
	UInt128(u128),
	Float32(OrderedF32),
	Float64(OrderedF64),
	/// Text that decoded cleanly
	String(String),
	/// Raw bytes, e.g. a `FixedString` read in raw mode
	Bytes(Vec<u8>),
	Uuid(Uuid),
	Array(Vec<Value>),
	/// Fixed arity, heterogeneous
	Tuple(Vec<Value>),
	Map(ValueMap),
}

impl Value {
	pub fn string(v: impl Into<String>) -> Self {
		Value::String(v.into())
	}

	pub fn bytes(v: impl Into<Vec<u8>>) -> Self {
		Value::Bytes(v.into())
	}

	pub fn float32(v: f32) -> Self {
		Value::Float32(OrderedF32::from(v))
	}

	pub fn float64(v: f64) -> Self {
		Value::Float64(OrderedF64::from(v))
	}

	pub fn map(pairs: impl IntoIterator<Item = (Value, Value)>) -> Self {
		Value::Map(pairs.into_iter().collect())
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Variant name, used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Null => "Null",
			Value::Bool(_) => "Bool",
			Value::Int8(_) => "Int8",
			Value::Int16(_) => "Int16",
			Value::Int32(_) => "Int32",
			Value::Int64(_) => "Int64",
			Value::Int128(_) => "Int128",
			Value::UInt8(_) => "UInt8",
			Value::UInt16(_) => "UInt16",
			Value::UInt32(_) => "UInt32",
			Value::UInt64(_) => "UInt64",
			Value::UInt128(_) => "UInt128",
			Value::Float32(_) => "Float32",
			Value::Float64(_) => "Float64",
			Value::String(_) => "String",
			Value::Bytes(_) => "Bytes",
			Value::Uuid(_) => "UUID",
			Value::Array(_) => "Array",
			Value::Tuple(_) => "Tuple",
			Value::Map(_) => "Map",
		}
	}
}

impl Hash for Value {
	fn hash<H: Hasher>(&self, state: &mut H) {
		mem::discriminant(self).hash(state);
		match self {
			Value::Null => {}
			Value::Bool(v) => v.hash(state),
			Value::Int8(v) => v.hash(state),
			Value::Int16(v) => v.hash(state),
			Value::Int32(v) => v.hash(state),
			Value::Int64(v) => v.hash(state),
			Value::Int128(v) => v.hash(state),
			Value::UInt8(v) => v.hash(state),
			Value::UInt16(v) => v.hash(state),
			Value::UInt32(v) => v.hash(state),
			Value::UInt64(v) => v.hash(state),
			Value::UInt128(v) => v.hash(state),
			Value::Float32(v) => v.hash(state),
			Value::Float64(v) => v.hash(state),
			Value::String(v) => v.hash(state),
			Value::Bytes(v) => v.hash(state),
			Value::Uuid(v) => v.hash(state),
			Value::Array(v) | Value::Tuple(v) => v.hash(state),
			// equal maps may differ in order, so only the size is hashed
			Value::Map(v) => v.len().hash(state),
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => f.write_str("NULL"),
			Value::Bool(v) => Display::fmt(v, f),
			Value::Int8(v) => Display::fmt(v, f),
			Value::Int16(v) => Display::fmt(v, f),
			Value::Int32(v) => Display::fmt(v, f),
			Value::Int64(v) => Display::fmt(v, f),
			Value::Int128(v) => Display::fmt(v, f),
			Value::UInt8(v) => Display::fmt(v, f),
			Value::UInt16(v) => Display::fmt(v, f),
			Value::UInt32(v) => Display::fmt(v, f),
			Value::UInt64(v) => Display::fmt(v, f),
			Value::UInt128(v) => Display::fmt(v, f),
			Value::Float32(v) => Display::fmt(v, f),
			Value::Float64(v) => Display::fmt(v, f),
			Value::String(v) => write!(f, "'{}'", v),
			Value::Bytes(v) => write!(f, "0x{}", hex::encode(v)),
			Value::Uuid(v) => Display::fmt(v, f),
			Value::Array(values) => {
				f.write_str("[")?;
				write_list(f, values)?;
				f.write_str("]")
			}
			Value::Tuple(values) => {
				f.write_str("(")?;
				write_list(f, values)?;
				f.write_str(")")
			}
			Value::Map(map) => {
				f.write_str("{")?;
				for (i, (key, value)) in map.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}: {}", key, value)?;
				}
				f.write_str("}")
			}
		}
	}
}

fn write_list(f: &mut Formatter<'_>, values: &[Value]) -> fmt::Result {
	for (i, value) in values.iter().enumerate() {
		if i > 0 {
			f.write_str(", ")?;
		}
		Display::fmt(value, f)?;
	}
	Ok(())
}
