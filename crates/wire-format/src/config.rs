// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colwire_type::{CodecError, Result, Value, error};
use serde::{Deserialize, Serialize};

/// Codec-wide settings. Copied into codecs when the registry builds them;
/// a different configuration needs a different registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
	#[serde(default)]
	pub fixed_string: FixedStringFormat,
}

impl CodecConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_fixed_string(mut self, format: FixedStringFormat) -> Self {
		self.fixed_string = format;
		self
	}

	/// Reads a configuration such as
	/// `{"fixed_string": {"method": "decode", "encoding": "utf8", "on_error": "hex"}}`.
	pub fn from_json(text: &str) -> Result<Self> {
		serde_json::from_str(text).map_err(|err| {
			error!(CodecError::InvalidConfig {
				reason: err.to_string()
			})
		})
	}
}

/// How `FixedString` values are handed to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum FixedStringFormat {
	/// The exact fixed-width bytes
	#[default]
	Raw,
	/// Text when the bytes decode, otherwise the `on_error` fallback
	Decode {
		#[serde(default)]
		encoding: TextEncoding,
		#[serde(default)]
		on_error: DecodeErrorPolicy,
	},
	/// Lowercase hexadecimal text, never decoded
	Hex,
}

impl FixedStringFormat {
	pub fn decode(encoding: TextEncoding, on_error: DecodeErrorPolicy) -> Self {
		FixedStringFormat::Decode {
			encoding,
			on_error,
		}
	}

	/// The text encoding used for text values on the encode path.
	pub fn encoding(&self) -> TextEncoding {
		match self {
			FixedStringFormat::Decode {
				encoding,
				..
			} => *encoding,
			_ => TextEncoding::Utf8,
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
	#[default]
	Utf8,
	/// ISO-8859-1; every byte maps to one character, so decoding never fails
	Latin1,
}

impl TextEncoding {
	pub fn name(self) -> &'static str {
		match self {
			TextEncoding::Utf8 => "UTF-8",
			TextEncoding::Latin1 => "ISO-8859-1",
		}
	}

	pub fn decode(self, bytes: &[u8]) -> Option<String> {
		match self {
			TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_string),
			TextEncoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
		}
	}

	pub fn encode(self, text: &str) -> Option<Vec<u8>> {
		match self {
			TextEncoding::Utf8 => Some(text.as_bytes().to_vec()),
			TextEncoding::Latin1 => text.chars().map(|c| u8::try_from(c).ok()).collect(),
		}
	}
}

/// Fallback when `FixedStringFormat::Decode` meets undecodable bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeErrorPolicy {
	#[default]
	Raw,
	Hex,
}

impl DecodeErrorPolicy {
	pub fn recover(self, bytes: &[u8]) -> Value {
		match self {
			DecodeErrorPolicy::Raw => Value::Bytes(bytes.to_vec()),
			DecodeErrorPolicy::Hex => Value::String(hex::encode(bytes)),
		}
	}
}
