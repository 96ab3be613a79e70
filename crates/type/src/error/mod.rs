// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

pub mod diagnostic;
mod r#macro;

pub use diagnostic::Diagnostic;

/// Error raised by the codec layer. Carries a structured [`Diagnostic`]
/// whose `code` identifies the failure kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl std::error::Error for Error {}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

/// The codec operation a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
	DecodeOne,
	EncodeOne,
	DecodeBulk,
}

impl Display for Operation {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Operation::DecodeOne => f.write_str("row decode"),
			Operation::EncodeOne => f.write_str("row encode"),
			Operation::DecodeBulk => f.write_str("bulk decode"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
	#[error("nested arrays are not supported: {type_name}")]
	NestedArray {
		type_name: String,
	},

	#[error("nested nullable types are not supported: {type_name}")]
	NestedNullable {
		type_name: String,
	},

	#[error("{operation} is not supported for {type_name}")]
	Unsupported {
		type_name: String,
		operation: Operation,
	},

	#[error("buffer underrun at position {position}: needed {needed} bytes, {available} available")]
	BufferUnderrun {
		position: usize,
		needed: usize,
		available: usize,
	},

	#[error("length prefix at position {position} overflows")]
	LengthOverflow {
		position: usize,
	},

	#[error("{type_name} cannot encode a {found} value")]
	ValueMismatch {
		type_name: String,
		found: &'static str,
	},

	#[error("invalid parameter for {type_name}: {reason}")]
	InvalidParameter {
		type_name: String,
		reason: String,
	},

	#[error("offsets of {type_name} decrease at row {row}: {previous} then {current}")]
	OffsetsNotMonotonic {
		type_name: String,
		row: usize,
		previous: u64,
		current: u64,
	},

	#[error("{type_name} cannot represent '{text}' in {encoding}")]
	Unencodable {
		type_name: String,
		encoding: &'static str,
		text: String,
	},

	#[error("{type_name} expects {expected} elements, got {found}")]
	ArityMismatch {
		type_name: String,
		expected: usize,
		found: usize,
	},

	#[error("invalid codec configuration: {reason}")]
	InvalidConfig {
		reason: String,
	},
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("unknown type: {name}")]
	UnknownType {
		name: String,
	},

	#[error("malformed type name '{text}': {reason}")]
	MalformedTypeName {
		text: String,
		reason: String,
	},

	#[error("invalid UUID '{text}'")]
	InvalidUuid {
		text: String,
	},
}

impl IntoDiagnostic for CodecError {
	fn into_diagnostic(self) -> Diagnostic {
		use diagnostic::codec;

		let message = self.to_string();
		match self {
			CodecError::NestedArray {
				type_name,
			} => codec::nested_array(message, type_name),
			CodecError::NestedNullable {
				type_name,
			} => codec::nested_nullable(message, type_name),
			CodecError::Unsupported {
				type_name,
				operation,
			} => codec::unsupported(message, type_name, operation),
			CodecError::BufferUnderrun {
				position,
				needed,
				available,
			} => codec::buffer_underrun(message, position, needed, available),
			CodecError::LengthOverflow {
				..
			} => codec::length_overflow(message),
			CodecError::ValueMismatch {
				type_name,
				found,
			} => codec::value_mismatch(message, type_name, found),
			CodecError::InvalidParameter {
				..
			} => codec::invalid_parameter(message),
			CodecError::OffsetsNotMonotonic {
				row,
				..
			} => codec::offsets_not_monotonic(message, row),
			CodecError::Unencodable {
				encoding,
				..
			} => codec::unencodable(message, encoding),
			CodecError::ArityMismatch {
				expected,
				found,
				..
			} => codec::arity_mismatch(message, expected, found),
			CodecError::InvalidConfig {
				..
			} => codec::invalid_config(message),
		}
	}
}

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		use diagnostic::r#type;

		let message = self.to_string();
		match self {
			TypeError::UnknownType {
				name,
			} => r#type::unknown_type(message, name),
			TypeError::MalformedTypeName {
				..
			} => r#type::malformed_type_name(message),
			TypeError::InvalidUuid {
				text,
			} => diagnostic::uuid::invalid_uuid_format(message, text),
		}
	}
}

impl From<CodecError> for Error {
	fn from(err: CodecError) -> Self {
		Error(err.into_diagnostic())
	}
}

impl From<TypeError> for Error {
	fn from(err: TypeError) -> Self {
		Error(err.into_diagnostic())
	}
}
