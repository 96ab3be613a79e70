// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Shared vocabulary of the colwire codec layer: the decoded [`Value`]
//! model, the [`TypeDef`] descriptor produced from a textual type name, and
//! the diagnostic based [`Error`] raised by every codec.

pub mod error;
pub mod type_def;
pub mod value;

pub use error::{CodecError, Diagnostic, Error, IntoDiagnostic, Operation, TypeError};
pub use type_def::TypeDef;
pub use value::{OrderedF32, OrderedF64, Uuid, Value, ValueMap};

pub type Result<T> = std::result::Result<T, Error>;
