// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Bounds-checked reads over a caller-owned buffer. Every read either
//! returns the requested bytes or fails with a buffer underrun.

use colwire_type::{CodecError, Result, return_error};

/// Returns `len` bytes starting at `pos`.
#[inline]
pub fn take(buf: &[u8], pos: usize, len: usize) -> Result<&[u8]> {
	match pos.checked_add(len) {
		Some(end) if end <= buf.len() => Ok(&buf[pos..end]),
		_ => return_error!(underrun(buf, pos, len)),
	}
}

#[inline]
pub fn take_array<const N: usize>(buf: &[u8], pos: usize) -> Result<[u8; N]> {
	let mut out = [0u8; N];
	out.copy_from_slice(take(buf, pos, N)?);
	Ok(out)
}

/// Returns the byte span of `rows` fixed-width values starting at `pos`.
pub fn take_rows(buf: &[u8], pos: usize, rows: usize, width: usize) -> Result<&[u8]> {
	match rows.checked_mul(width) {
		Some(len) => take(buf, pos, len),
		None => return_error!(underrun(buf, pos, usize::MAX)),
	}
}

/// Reads `rows` unsigned 64-bit words stored in host order, byte-swapping
/// each one when `swap` is set.
pub fn read_u64_words(buf: &[u8], pos: usize, rows: usize, swap: bool) -> Result<(Vec<u64>, usize)> {
	let bytes = take_rows(buf, pos, rows, 8)?;
	let words = bytes
		.chunks_exact(8)
		.map(|chunk| {
			let mut word = [0u8; 8];
			word.copy_from_slice(chunk);
			let word = u64::from_ne_bytes(word);
			if swap {
				word.swap_bytes()
			} else {
				word
			}
		})
		.collect();
	Ok((words, pos + bytes.len()))
}

fn underrun(buf: &[u8], pos: usize, needed: usize) -> CodecError {
	CodecError::BufferUnderrun {
		position: pos,
		needed,
		available: buf.len().saturating_sub(pos),
	}
}
