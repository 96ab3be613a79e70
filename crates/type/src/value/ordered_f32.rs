// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt,
	hash::{Hash, Hasher},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

/// `f32` compared and hashed by its bit pattern, so every wire value
/// (NaN payloads and negative zero included) survives a round trip and can
/// be used as a map key.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedF32(f32);

impl OrderedF32 {
	pub const fn to_bits(self) -> u32 {
		self.0.to_bits()
	}

	pub const fn from_bits(bits: u32) -> Self {
		Self(f32::from_bits(bits))
	}

	pub const fn value(self) -> f32 {
		self.0
	}
}

impl PartialEq for OrderedF32 {
	fn eq(&self, other: &Self) -> bool {
		self.0.to_bits() == other.0.to_bits()
	}
}

impl Eq for OrderedF32 {}

impl PartialOrd for OrderedF32 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF32 {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.total_cmp(&other.0)
	}
}

impl Hash for OrderedF32 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl Deref for OrderedF32 {
	type Target = f32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl fmt::Debug for OrderedF32 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&self.0, f)
	}
}

impl fmt::Display for OrderedF32 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

impl From<f32> for OrderedF32 {
	fn from(v: f32) -> Self {
		Self(v)
	}
}

impl From<OrderedF32> for f32 {
	fn from(v: OrderedF32) -> Self {
		v.0
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn test_sorting() {
		let mut values = vec![OrderedF32::from(10.0), OrderedF32::from(-2.0), OrderedF32::from(5.0)];
		values.sort();
		let sorted: Vec<f32> = values.into_iter().map(f32::from).collect();
		assert_eq!(sorted, vec![-2.0, 5.0, 10.0]);
	}

	#[test]
	fn test_nan_equals_itself() {
		let a = OrderedF32::from(f32::NAN);
		let b = OrderedF32::from_bits(a.to_bits());
		assert_eq!(a, b);

		let mut set = HashSet::new();
		set.insert(a);
		assert!(set.contains(&b));
	}

	#[test]
	fn test_keeps_sign_of_zero() {
		assert_ne!(OrderedF32::from(0.0), OrderedF32::from(-0.0));
	}
}
