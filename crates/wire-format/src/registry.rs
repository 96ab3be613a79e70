// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, sync::Arc};

use colwire_type::{Result, TypeDef, TypeError, return_error};
use parking_lot::RwLock;
use tracing::{debug, instrument};

use crate::{
	CodecConfig,
	codec::{
		AggregateFunctionCodec, ArrayCodec, ColumnCodec, FixedStringCodec, MapCodec, NothingCodec, NullableCodec,
		NumberCodec, NumberKind, SimpleAggregateFunctionCodec, StringCodec, TupleCodec, UuidCodec,
	},
};

/// Builds the codec for one parsed type. Composite constructors resolve
/// their parameters through the registry they are handed.
pub type Constructor = fn(&TypeDef, &Registry) -> Result<ColumnCodec>;

/// Maps type names to codec constructors and caches built codec trees.
///
/// Constructors are registered up front; lookups may then be shared across
/// threads. Cached codecs live as long as the registry.
pub struct Registry {
	config: CodecConfig,
	constructors: HashMap<String, Constructor>,
	cache: RwLock<HashMap<String, Arc<ColumnCodec>>>,
}

impl Registry {
	pub fn new(config: CodecConfig) -> Self {
		let mut registry = Self {
			config,
			constructors: HashMap::new(),
			cache: RwLock::new(HashMap::new()),
		};
		registry.register_builtin();
		registry
	}

	pub fn config(&self) -> &CodecConfig {
		&self.config
	}

	/// Adds or replaces the constructor for `name` and drops cached codecs.
	pub fn register(&mut self, name: impl Into<String>, constructor: Constructor) {
		self.constructors.insert(name.into(), constructor);
		self.cache.get_mut().clear();
	}

	pub fn is_registered(&self, name: &str) -> bool {
		self.constructors.contains_key(name)
	}

	/// Returns the shared codec for `type_name`, building it on first use.
	#[instrument(name = "registry::lookup", level = "trace", skip(self))]
	pub fn lookup(&self, type_name: &str) -> Result<Arc<ColumnCodec>> {
		let def = TypeDef::parse(type_name)?;
		let key = def.to_string();
		if let Some(codec) = self.cache.read().get(&key) {
			return Ok(codec.clone());
		}

		let codec = Arc::new(self.build(&def)?);
		let mut cache = self.cache.write();
		let codec = cache.entry(key).or_insert(codec).clone();
		debug!(type_name = %def, cached = cache.len(), "codec cached");
		Ok(codec)
	}

	/// Builds a fresh, exclusively owned codec for `type_name`.
	pub fn resolve(&self, type_name: &str) -> Result<ColumnCodec> {
		self.build(&TypeDef::parse(type_name)?)
	}

	#[instrument(name = "registry::build", level = "trace", skip(self), fields(type_name = %def))]
	pub fn build(&self, def: &TypeDef) -> Result<ColumnCodec> {
		let Some(constructor) = self.constructors.get(def.name()) else {
			return_error!(TypeError::UnknownType {
				name: def.name().to_string(),
			});
		};
		constructor(def, self)
	}

	fn register_builtin(&mut self) {
		for kind in NumberKind::ALL {
			self.register(kind.name(), |def, _| NumberCodec::from_type_def(def).map(ColumnCodec::Number));
		}
		self.register("String", |def, _| StringCodec::from_type_def(def).map(ColumnCodec::String));
		self.register("UUID", |def, _| UuidCodec::from_type_def(def).map(ColumnCodec::Uuid));
		self.register("FixedString", |def, registry| {
			FixedStringCodec::new(def, registry.config().fixed_string).map(ColumnCodec::FixedString)
		});
		self.register("Nothing", |def, _| NothingCodec::from_type_def(def).map(ColumnCodec::Nothing));
		self.register("Nullable", |def, registry| NullableCodec::new(def, registry).map(ColumnCodec::Nullable));
		self.register("Array", |def, registry| ArrayCodec::new(def, registry).map(ColumnCodec::Array));
		self.register("Tuple", |def, registry| TupleCodec::new(def, registry).map(ColumnCodec::Tuple));
		self.register("Map", |def, registry| MapCodec::new(def, registry).map(ColumnCodec::Map));
		self.register("AggregateFunction", |def, _| {
			AggregateFunctionCodec::new(def).map(ColumnCodec::AggregateFunction)
		});
		self.register("SimpleAggregateFunction", |def, registry| {
			SimpleAggregateFunctionCodec::new(def, registry).map(ColumnCodec::SimpleAggregateFunction)
		});
		debug!(constructors = self.constructors.len(), "registered builtin codecs");
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::new(CodecConfig::default())
	}
}
