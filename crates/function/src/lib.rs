// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_type::{Type, Value};

pub mod buffer;
pub mod config;
pub mod error;
pub mod math;
pub mod registry;
pub mod stage;
pub mod text;

pub use buffer::AggregationBuffer;
pub use config::{FunctionConfig, GradeConfig, SplitConfig};
pub use error::{FunctionError, FunctionResult};
pub use registry::Functions;
pub use stage::StageMode;

/// One value in, one value out.
pub trait ScalarFunction: Send {
	/// Validates the declared argument types once per query and returns the result type.
	fn initialize(&mut self, args: &[Type]) -> FunctionResult<Type>;

	fn evaluate(&mut self, args: &[Value]) -> FunctionResult<Value>;

	/// Description shown in query plan explain output.
	fn display(&self, args: &[String]) -> String;
}

/// Receives the rows a generator forwards.
pub trait Collector {
	fn collect(&mut self, row: Vec<Value>) -> FunctionResult<()>;
}

impl Collector for Vec<Vec<Value>> {
	fn collect(&mut self, row: Vec<Value>) -> FunctionResult<()> {
		self.push(row);
		Ok(())
	}
}

/// Adapts a closure into a [`Collector`].
pub struct CollectorFn<F>(pub F);

impl<F> Collector for CollectorFn<F>
where
	F: FnMut(Vec<Value>) -> FunctionResult<()>,
{
	fn collect(&mut self, row: Vec<Value>) -> FunctionResult<()> {
		(self.0)(row)
	}
}

/// One row in, zero or more rows out through a [`Collector`].
pub trait GeneratorFunction: Send {
	/// Validates the declared argument types and returns the output schema as a struct type.
	fn initialize(&mut self, args: &[Type]) -> FunctionResult<Type>;

	fn process(&mut self, args: &[Value], collector: &mut dyn Collector) -> FunctionResult<()>;

	/// End of input. Generators may forward trailing rows here.
	fn close(&mut self, _collector: &mut dyn Collector) -> FunctionResult<()> {
		Ok(())
	}

	fn display(&self, args: &[String]) -> String;
}

/// Resolves an aggregate call site into an evaluator, rejecting unsupported argument lists.
pub trait AggregateFunction: Send + Sync {
	fn name(&self) -> &str;

	fn resolve(&self, args: &[Type]) -> FunctionResult<Box<dyn AggregateEvaluator>>;
}

/// Evaluates one stage of a distributed aggregation.
///
/// The host creates one evaluator per stage instance and calls `init` exactly once. Afterwards it
/// requests buffers, feeds rows (`iterate`) or partial aggregates (`merge`), and reads the result
/// with `terminate_partial` or `terminate`, depending on the stage. Buffers are reused across
/// groups through `reset`.
pub trait AggregateEvaluator: Send {
	fn init(&mut self, mode: StageMode, args: &[Type]) -> FunctionResult<Type>;

	fn mode(&self) -> Option<StageMode>;

	fn new_buffer(&self) -> FunctionResult<AggregationBuffer>;

	fn reset(&self, buffer: &mut AggregationBuffer) -> FunctionResult<()>;

	fn iterate(&self, buffer: &mut AggregationBuffer, args: &[Value]) -> FunctionResult<()>;

	fn merge(&self, buffer: &mut AggregationBuffer, partial: &Value) -> FunctionResult<()>;

	fn terminate_partial(&self, buffer: &AggregationBuffer) -> FunctionResult<Value>;

	fn terminate(&self, buffer: &AggregationBuffer) -> FunctionResult<Value>;

	fn display(&self, args: &[String]) -> String;
}
