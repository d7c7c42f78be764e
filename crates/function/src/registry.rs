// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use tracing::debug;

use crate::{
	AggregateFunction, GeneratorFunction, ScalarFunction,
	config::FunctionConfig,
	error::{FunctionError, FunctionResult},
	math::scalar::salary_grade::{self, SalaryGrade},
	text::{
		char_count::{self, CharCount},
		split_records::{self, SplitRecords},
	},
};

type ScalarFactory = Box<dyn Fn() -> Box<dyn ScalarFunction> + Send + Sync>;
type GeneratorFactory = Box<dyn Fn() -> Box<dyn GeneratorFunction> + Send + Sync>;
type AggregateFactory = Box<dyn Fn() -> Box<dyn AggregateFunction> + Send + Sync>;

/// Name to factory lookup for every function the host can call.
///
/// Scalar and generator factories yield a fresh instance per call site, since those instances
/// carry per-query state. Aggregate factories yield a resolver, which in turn creates one
/// evaluator per stage.
pub struct Functions {
	scalars: IndexMap<String, ScalarFactory>,
	generators: IndexMap<String, GeneratorFactory>,
	aggregates: IndexMap<String, AggregateFactory>,
}

impl Functions {
	pub fn new() -> Self {
		Self {
			scalars: IndexMap::new(),
			generators: IndexMap::new(),
			aggregates: IndexMap::new(),
		}
	}

	/// Registers `salary_grade`, `split_records` and `char_count`.
	pub fn builtin(config: &FunctionConfig) -> Self {
		let mut functions = Self::new();

		let grade = config.grade.clone();
		functions.register_scalar(salary_grade::NAME, move || SalaryGrade::with_config(grade.clone()));

		let split = config.split.clone();
		functions.register_generator(split_records::NAME, move || SplitRecords::with_config(split.clone()));

		functions.register_aggregate(char_count::NAME, CharCount::new);

		functions
	}

	pub fn get_scalar(&self, name: &str) -> Option<Box<dyn ScalarFunction>> {
		self.scalars.get(name).map(|func| func())
	}

	pub fn register_scalar<F, A>(&mut self, name: &str, init: F)
	where
		F: Fn() -> A + Send + Sync + 'static,
		A: ScalarFunction + 'static,
	{
		debug!(name, "register scalar function");
		self.scalars.insert(name.to_string(), Box::new(move || Box::new(init()) as Box<dyn ScalarFunction>));
	}

	pub fn get_generator(&self, name: &str) -> Option<Box<dyn GeneratorFunction>> {
		self.generators.get(name).map(|func| func())
	}

	pub fn register_generator<F, A>(&mut self, name: &str, init: F)
	where
		F: Fn() -> A + Send + Sync + 'static,
		A: GeneratorFunction + 'static,
	{
		debug!(name, "register generator function");
		self.generators.insert(name.to_string(), Box::new(move || Box::new(init()) as Box<dyn GeneratorFunction>));
	}

	pub fn get_aggregate(&self, name: &str) -> Option<Box<dyn AggregateFunction>> {
		self.aggregates.get(name).map(|func| func())
	}

	pub fn register_aggregate<F, A>(&mut self, name: &str, init: F)
	where
		F: Fn() -> A + Send + Sync + 'static,
		A: AggregateFunction + 'static,
	{
		debug!(name, "register aggregate function");
		self.aggregates.insert(name.to_string(), Box::new(move || Box::new(init()) as Box<dyn AggregateFunction>));
	}

	/// Like [`Functions::get_scalar`], but an unknown name is a planning error.
	pub fn scalar(&self, name: &str) -> FunctionResult<Box<dyn ScalarFunction>> {
		self.get_scalar(name).ok_or_else(|| unknown(name))
	}

	pub fn generator(&self, name: &str) -> FunctionResult<Box<dyn GeneratorFunction>> {
		self.get_generator(name).ok_or_else(|| unknown(name))
	}

	pub fn aggregate(&self, name: &str) -> FunctionResult<Box<dyn AggregateFunction>> {
		self.get_aggregate(name).ok_or_else(|| unknown(name))
	}

	/// All registered names, scalars first, in registration order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.scalars.keys().chain(self.generators.keys()).chain(self.aggregates.keys()).map(String::as_str)
	}
}

fn unknown(name: &str) -> FunctionError {
	FunctionError::UnknownFunction {
		function: name.to_string(),
	}
}

impl Default for Functions {
	fn default() -> Self {
		Self::builtin(&FunctionConfig::default())
	}
}

#[cfg(test)]
mod tests {
	use strata_type::{Type, Value};

	use super::*;
	use crate::{GradeConfig, StageMode};

	#[test]
	fn test_builtin_names() {
		let functions = Functions::default();
		assert_eq!(functions.names().collect::<Vec<_>>(), vec!["salary_grade", "split_records", "char_count"]);
	}

	#[test]
	fn test_unknown_name() {
		let functions = Functions::default();
		assert!(functions.get_scalar("char_count").is_none());
		assert!(functions.get_aggregate("salary_grade").is_none());
		assert!(functions.get_generator("explode").is_none());
	}

	#[test]
	fn test_fallible_lookup() {
		let functions = Functions::default();
		assert!(functions.scalar("salary_grade").is_ok());
		assert!(functions.generator("split_records").is_ok());
		assert!(functions.aggregate("char_count").is_ok());
		assert_eq!(
			functions.aggregate("sum").err(),
			Some(FunctionError::UnknownFunction {
				function: "sum".to_string(),
			})
		);
	}

	#[test]
	fn test_scalar_instances_use_config() {
		let config = FunctionConfig {
			grade: GradeConfig {
				a_max: 1.0,
				b_max: 2.0,
				..GradeConfig::default()
			},
			..FunctionConfig::default()
		};
		let functions = Functions::builtin(&config);
		let mut f = functions.get_scalar("salary_grade").unwrap();
		f.initialize(&[Type::Int4]).unwrap();
		assert_eq!(f.evaluate(&[Value::int4(3)]).unwrap(), Value::utf8("Grade_C"));
	}

	#[test]
	fn test_aggregate_lookup_resolves() {
		let functions = Functions::default();
		let resolver = functions.get_aggregate("char_count").unwrap();
		assert_eq!(resolver.name(), "char_count");
		let mut evaluator = resolver.resolve(&[Type::Utf8]).ok().unwrap();
		assert_eq!(evaluator.init(StageMode::RawToFinal, &[Type::Utf8]).unwrap(), Type::Int8);
	}

	#[test]
	fn test_register_replaces_existing() {
		let mut functions = Functions::new();
		functions.register_generator("split", SplitRecords::new);
		functions.register_generator("split", SplitRecords::new);
		assert_eq!(functions.names().count(), 1);
	}
}
