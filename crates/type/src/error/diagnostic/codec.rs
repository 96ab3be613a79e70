// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::{Diagnostic, Operation};

/// Array whose element type is itself an array
pub fn nested_array(message: String, type_name: String) -> Diagnostic {
	Diagnostic {
		code: "CODEC_001".to_string(),
		message,
		label: Some(format!("'{}' nests an array inside an array", type_name)),
		help: Some("flatten the column or wrap the inner array in a Tuple".to_string()),
		notes: vec!["array nesting is rejected when the codec is built, before any data is decoded".to_string()],
	}
}

/// Nullable whose inner type is itself nullable
pub fn nested_nullable(message: String, type_name: String) -> Diagnostic {
	Diagnostic {
		code: "CODEC_001".to_string(),
		message,
		label: Some(format!("'{}' nests a Nullable inside a Nullable", type_name)),
		help: Some("a single Nullable wrapper already admits null values".to_string()),
		notes: vec![],
	}
}

pub fn unsupported(message: String, type_name: String, operation: Operation) -> Diagnostic {
	let mut notes = vec![];
	if type_name.starts_with("AggregateFunction") {
		notes.push("aggregate function states use an engine specific binary layout".to_string());
	}
	if operation == Operation::DecodeBulk {
		notes.push("read the column in row-oriented format instead".to_string());
	}

	Diagnostic {
		code: "CODEC_002".to_string(),
		message,
		label: Some(format!("{} has no {} path", type_name, operation)),
		help: None,
		notes,
	}
}

pub fn buffer_underrun(message: String, position: usize, needed: usize, available: usize) -> Diagnostic {
	Diagnostic {
		code: "CODEC_003".to_string(),
		message,
		label: Some(format!("reading bytes {}..{} of a {} byte buffer", position, position.saturating_add(needed), position.saturating_add(available))),
		help: Some("the buffer is truncated or does not hold the declared type".to_string()),
		notes: vec![],
	}
}

pub fn length_overflow(message: String) -> Diagnostic {
	Diagnostic {
		code: "CODEC_004".to_string(),
		message,
		label: Some("LEB128 length prefix longer than 10 bytes or larger than 64 bits".to_string()),
		help: None,
		notes: vec![],
	}
}

pub fn value_mismatch(message: String, type_name: String, found: &'static str) -> Diagnostic {
	Diagnostic {
		code: "CODEC_005".to_string(),
		message,
		label: Some(format!("a {} value was passed to the {} codec", found, type_name)),
		help: Some("convert the value to the column type before encoding".to_string()),
		notes: vec![],
	}
}

pub fn invalid_parameter(message: String) -> Diagnostic {
	Diagnostic {
		code: "CODEC_006".to_string(),
		message,
		label: None,
		help: Some("check the parameters of the type name, e.g. FixedString(16) or Map(String, UInt64)".to_string()),
		notes: vec![],
	}
}

pub fn offsets_not_monotonic(message: String, row: usize) -> Diagnostic {
	Diagnostic {
		code: "CODEC_007".to_string(),
		message,
		label: Some(format!("offset of row {} is smaller than the offset before it", row)),
		help: Some("array offsets are cumulative element counts and never decrease".to_string()),
		notes: vec![],
	}
}

pub fn unencodable(message: String, encoding: &'static str) -> Diagnostic {
	Diagnostic {
		code: "CODEC_008".to_string(),
		message,
		label: Some(format!("text contains characters outside {}", encoding)),
		help: Some("pass raw bytes or configure a wider text encoding".to_string()),
		notes: vec![],
	}
}

pub fn arity_mismatch(message: String, expected: usize, found: usize) -> Diagnostic {
	Diagnostic {
		code: "CODEC_009".to_string(),
		message,
		label: Some(format!("expected {} elements, found {}", expected, found)),
		help: None,
		notes: vec![],
	}
}

pub fn invalid_config(message: String) -> Diagnostic {
	Diagnostic {
		code: "CODEC_010".to_string(),
		message,
		label: None,
		help: Some(r#"example: {"fixed_string": {"method": "decode", "encoding": "utf8", "on_error": "hex"}}"#.to_string()),
		notes: vec![],
	}
}
