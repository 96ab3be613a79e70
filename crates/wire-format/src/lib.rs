// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Value codecs for the two wire encodings of the binary protocol: the
//! self-describing row-oriented layout and the bulk columnar layout.
//!
//! A [`Registry`] turns a type name such as `Map(String, Array(UInt64))` into
//! a [`ColumnCodec`] tree; every node implements the [`Codec`] contract.
//!
//! ```ignore
//! let registry = Registry::new(CodecConfig::default());
//! let codec = registry.lookup("Array(UInt32)")?;
//! let (value, pos) = codec.decode_one(&buf, 0)?;
//! ```

pub mod buffer;
pub mod codec;
mod config;
pub mod leb128;
mod registry;

pub use codec::{Codec, ColumnCodec, decode_column};
pub use colwire_type::{Error, Result, TypeDef, Value};
pub use config::{CodecConfig, DecodeErrorPolicy, FixedStringFormat, TextEncoding};
pub use registry::{Constructor, Registry};
