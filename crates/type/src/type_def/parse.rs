// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::TypeDef;
use crate::{Result, TypeError, return_error};

impl TypeDef {
	/// Splits `Name(p1, p2, ...)` into its name and top-level parameters.
	///
	/// Commas inside nested parentheses or single-quoted literals do not
	/// split; parameters are trimmed but otherwise kept verbatim.
	pub fn parse(text: &str) -> Result<TypeDef> {
		let text = text.trim();
		if text.is_empty() {
			return_error!(malformed(text, "type name is empty"));
		}

		let Some(open) = text.find('(') else {
			validate_name(text, text)?;
			return Ok(TypeDef {
				name: text.to_string(),
				values: vec![],
				arg_str: String::new(),
			});
		};

		let name = text[..open].trim_end();
		validate_name(text, name)?;

		let (values, close) = split_parameters(text, open)?;
		if close + 1 != text.len() {
			return_error!(malformed(text, "unexpected characters after closing parenthesis"));
		}

		Ok(TypeDef {
			name: name.to_string(),
			values,
			arg_str: text[open..].to_string(),
		})
	}
}

fn malformed(text: &str, reason: &str) -> TypeError {
	TypeError::MalformedTypeName {
		text: text.to_string(),
		reason: reason.to_string(),
	}
}

fn validate_name(text: &str, name: &str) -> Result<()> {
	if name.is_empty() {
		return_error!(malformed(text, "type name is empty"));
	}
	if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
		return_error!(malformed(text, "type name may only contain letters, digits and '_'"));
	}
	Ok(())
}

/// Returns the parameters between `open` and its matching `)`, and the
/// byte index of that `)`.
fn split_parameters(text: &str, open: usize) -> Result<(Vec<String>, usize)> {
	let mut values = Vec::new();
	let mut depth = 0usize;
	let mut in_quote = false;
	let mut escaped = false;
	let mut start = open + 1;

	for (i, c) in text.char_indices().skip_while(|(i, _)| *i <= open) {
		if in_quote {
			match c {
				_ if escaped => escaped = false,
				'\\' => escaped = true,
				'\'' => in_quote = false,
				_ => {}
			}
			continue;
		}

		match c {
			'\'' => in_quote = true,
			'(' => depth += 1,
			')' if depth > 0 => depth -= 1,
			')' => {
				let last = text[start..i].trim();
				if last.is_empty() {
					if !values.is_empty() {
						return_error!(malformed(text, "empty type parameter"));
					}
				} else {
					values.push(last.to_string());
				}
				return Ok((values, i));
			}
			',' if depth == 0 => {
				let value = text[start..i].trim();
				if value.is_empty() {
					return_error!(malformed(text, "empty type parameter"));
				}
				values.push(value.to_string());
				start = i + 1;
			}
			_ => {}
		}
	}

	if in_quote {
		return_error!(malformed(text, "unterminated quoted literal"));
	}
	return_error!(malformed(text, "unbalanced parentheses"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_bare_name() {
		let def = TypeDef::parse("UInt64").unwrap();
		assert_eq!(def.name(), "UInt64");
		assert!(def.values().is_empty());
		assert_eq!(def.arg_str(), "");
		assert_eq!(def.to_string(), "UInt64");
	}

	#[test]
	fn test_single_parameter() {
		let def = TypeDef::parse("Array(String)").unwrap();
		assert_eq!(def.name(), "Array");
		assert_eq!(def.values(), ["String"]);
		assert_eq!(def.arg_str(), "(String)");
	}

	#[test]
	fn test_nested_parameters_stay_intact() {
		let def = TypeDef::parse("Map(String, Tuple(UInt8, Array(Nullable(String))))").unwrap();
		assert_eq!(def.name(), "Map");
		assert_eq!(def.values(), ["String", "Tuple(UInt8, Array(Nullable(String)))"]);
	}

	#[test]
	fn test_quoted_commas_and_parens() {
		let def = TypeDef::parse("Enum8('a,b' = 1, 'c)\\'d' = 2)").unwrap();
		assert_eq!(def.values(), ["'a,b' = 1", "'c)\\'d' = 2"]);
	}

	#[test]
	fn test_whitespace_is_trimmed() {
		let def = TypeDef::parse("  FixedString( 16 ) ").unwrap();
		assert_eq!(def.name(), "FixedString");
		assert_eq!(def.value(0), Some("16"));
		assert_eq!(def.value(1), None);
	}

	#[test]
	fn test_empty_parameter_list() {
		let def = TypeDef::parse("Tuple()").unwrap();
		assert!(def.values().is_empty());
		assert_eq!(def.arg_str(), "()");
	}

	#[test]
	fn test_malformed() {
		for text in ["", "Array(String", "Array(String))", "(String)", "Tuple(UInt8,,UInt8)", "Tuple(UInt8,)", "Enum8('a = 1)", "Array String"] {
			let err = TypeDef::parse(text).unwrap_err();
			assert_eq!(err.code(), "TYPE_002", "{text}");
		}
	}

	#[test]
	fn test_new_builds_arg_str() {
		let def = TypeDef::new("Map", vec!["String".to_string(), "UInt8".to_string()]);
		assert_eq!(def.to_string(), "Map(String, UInt8)");
	}
}
