// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colwire_type::{CodecError, Result, TypeDef, Value, return_error};
use tracing::warn;

use super::{Codec, expect_parameters, mismatch};
use crate::{
	FixedStringFormat,
	buffer::{take, take_rows},
};

/// `FixedString(N)`: exactly `N` bytes per value on both wire formats.
///
/// Encoding appends the supplied bytes verbatim; the caller provides
/// exactly `N` of them.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedStringCodec {
	name: String,
	size: usize,
	format: FixedStringFormat,
}

impl FixedStringCodec {
	pub fn new(def: &TypeDef, format: FixedStringFormat) -> Result<Self> {
		expect_parameters(def, 1)?;
		let size = match def.value(0).map(str::parse::<usize>) {
			Some(Ok(size)) if size > 0 => size,
			_ => return_error!(CodecError::InvalidParameter {
				type_name: def.to_string(),
				reason: "size must be a positive integer".to_string(),
			}),
		};

		Ok(Self {
			name: def.to_string(),
			size,
			format,
		})
	}

	pub fn type_name(&self) -> &str {
		&self.name
	}

	pub fn size(&self) -> usize {
		self.size
	}

	fn render(&self, bytes: &[u8]) -> Value {
		match self.format {
			FixedStringFormat::Raw => Value::Bytes(bytes.to_vec()),
			FixedStringFormat::Hex => Value::String(hex::encode(bytes)),
			FixedStringFormat::Decode {
				encoding,
				on_error,
			} => match encoding.decode(bytes) {
				Some(text) => Value::String(text),
				None => {
					warn!(type_name = %self.name, encoding = encoding.name(), "undecodable fixed string, using fallback");
					on_error.recover(bytes)
				}
			},
		}
	}
}

impl Codec for FixedStringCodec {
	fn decode_one(&self, buf: &[u8], pos: usize) -> Result<(Value, usize)> {
		let bytes = take(buf, pos, self.size)?;
		Ok((self.render(bytes), pos + self.size))
	}

	fn encode_one(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
		match value {
			Value::Bytes(bytes) => out.extend_from_slice(bytes),
			Value::String(text) => {
				let encoding = self.format.encoding();
				let Some(bytes) = encoding.encode(text) else {
					return_error!(CodecError::Unencodable {
						type_name: self.name.clone(),
						encoding: encoding.name(),
						text: text.clone(),
					});
				};
				out.extend_from_slice(&bytes);
			}
			_ => return_error!(mismatch(&self.name, value)),
		}
		Ok(())
	}

	/// Slices the column into raw values; the output strategy is applied by
	/// [`Codec::to_native`].
	fn decode_bulk(&self, buf: &[u8], pos: usize, rows: usize, _swap: bool) -> Result<(Vec<Value>, usize)> {
		let bytes = take_rows(buf, pos, rows, self.size)?;
		let values = bytes.chunks_exact(self.size).map(|chunk| Value::Bytes(chunk.to_vec())).collect();
		Ok((values, pos + bytes.len()))
	}

	fn to_native(&self, values: Vec<Value>) -> Vec<Value> {
		if self.format == FixedStringFormat::Raw {
			return values;
		}
		values.into_iter()
			.map(|value| match value {
				Value::Bytes(bytes) => self.render(&bytes),
				other => other,
			})
			.collect()
	}
}
