// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::Diagnostic;

/// Type name has no registered codec
pub fn unknown_type(message: String, name: String) -> Diagnostic {
	Diagnostic {
		code: "TYPE_001".to_string(),
		message,
		label: Some(format!("no codec is registered under '{}'", name)),
		help: Some("type names are case sensitive, e.g. UInt64 rather than uint64".to_string()),
		notes: vec![],
	}
}

/// Type name could not be split into name and parameters
pub fn malformed_type_name(message: String) -> Diagnostic {
	Diagnostic {
		code: "TYPE_002".to_string(),
		message,
		label: None,
		help: Some("use Name or Name(param, ...), e.g. Array(String)".to_string()),
		notes: vec![],
	}
}
