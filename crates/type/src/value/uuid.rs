// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

use crate::{Result, TypeError, error::Error};

/// A 128-bit unique identifier in standard (big-endian) byte order.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uuid(uuid::Uuid);

impl Uuid {
	pub const fn nil() -> Self {
		Self(uuid::Uuid::nil())
	}

	pub const fn from_bytes(bytes: [u8; 16]) -> Self {
		Self(uuid::Uuid::from_bytes(bytes))
	}

	/// Parses the textual form, accepting hyphenated, simple, braced and
	/// URN representations.
	pub fn parse(text: &str) -> Result<Self> {
		uuid::Uuid::try_parse(text).map(Self).map_err(|_| {
			Error::from(TypeError::InvalidUuid {
				text: text.to_string(),
			})
		})
	}

	/// Builds a UUID straight from its 128-bit integer form, skipping any
	/// parsing or validation.
	///
	/// Unchecked, not memory unsafe: the caller guarantees the bits already
	/// represent a well-formed value from a trusted wire source. Used by the
	/// bulk decode path, where every row is reassembled from two words the
	/// server wrote.
	#[inline]
	pub const fn from_u128_unchecked(bits: u128) -> Self {
		Self(uuid::Uuid::from_u128(bits))
	}

	pub const fn as_bytes(&self) -> &[u8; 16] {
		self.0.as_bytes()
	}

	pub const fn as_u128(&self) -> u128 {
		self.0.as_u128()
	}
}

impl Deref for Uuid {
	type Target = uuid::Uuid;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<uuid::Uuid> for Uuid {
	fn from(value: uuid::Uuid) -> Self {
		Self(value)
	}
}

impl From<Uuid> for uuid::Uuid {
	fn from(value: Uuid) -> Self {
		value.0
	}
}

impl Display for Uuid {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}
