// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::Diagnostic;

pub fn invalid_uuid_format(message: String, text: String) -> Diagnostic {
	let label = Some(format!("'{}' is not a valid UUID", text));

	let help = "use the hyphenated form (e.g., 550e8400-e29b-41d4-a716-446655440000)".to_string();
	let notes = vec![
		"valid: 550e8400-e29b-41d4-a716-446655440000".to_string(),
		"valid: 550e8400e29b41d4a716446655440000".to_string(),
	];

	Diagnostic {
		code: "TYPE_003".to_string(),
		message,
		label,
		help: Some(help),
		notes,
	}
}
