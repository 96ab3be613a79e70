// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

mod parse;

/// Structured form of a textual column type such as `Map(String, Array(UInt8))`.
///
/// Built once per type occurrence and read by codec constructors; parameters
/// are kept as text so nested types can be resolved recursively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDef {
	name: String,
	values: Vec<String>,
	arg_str: String,
}

impl TypeDef {
	pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
		let arg_str = if values.is_empty() {
			String::new()
		} else {
			format!("({})", values.join(", "))
		};
		Self {
			name: name.into(),
			values,
			arg_str,
		}
	}

	/// Base type name, e.g. `Array`.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Top-level parameters in declaration order, e.g. `["String"]`.
	pub fn values(&self) -> &[String] {
		&self.values
	}

	pub fn value(&self, index: usize) -> Option<&str> {
		self.values.get(index).map(String::as_str)
	}

	/// Parameter text as written, parentheses included; empty for bare names.
	pub fn arg_str(&self) -> &str {
		&self.arg_str
	}
}

impl Display for TypeDef {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}", self.name, self.arg_str)
	}
}
