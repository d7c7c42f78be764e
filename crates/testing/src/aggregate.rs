// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_function::{AggregateEvaluator, AggregateFunction, FunctionResult, StageMode};
use strata_type::{Type, Value};
use tracing::trace;

/// Shape of the staged path: how many partials each combiner task merges and how many combiner
/// rounds run before the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagedPlan {
	pub fan_in: usize,
	pub rounds: usize,
}

impl Default for StagedPlan {
	fn default() -> Self {
		Self {
			fan_in: 2,
			rounds: 1,
		}
	}
}

/// Simulates the engine driving an aggregate over grouped input.
///
/// Every evaluator owns a single buffer which is reset between groups, the way a task reuses its
/// buffer while walking sorted groups.
pub struct AggregateHost<'a> {
	function: &'a dyn AggregateFunction,
	input: Vec<Type>,
}

impl<'a> AggregateHost<'a> {
	pub fn new(function: &'a dyn AggregateFunction) -> Self {
		Self {
			function,
			input: vec![Type::Utf8],
		}
	}

	pub fn with_input(mut self, input: Vec<Type>) -> Self {
		self.input = input;
		self
	}

	fn evaluator(&self, mode: StageMode) -> FunctionResult<Box<dyn AggregateEvaluator>> {
		let mut evaluator = self.function.resolve(&self.input)?;
		let args = if mode.consumes_raw() {
			self.input.clone()
		} else {
			vec![Type::Int8]
		};
		evaluator.init(mode, &args)?;
		Ok(evaluator)
	}

	/// `RawToFinal`: one value per group.
	pub fn complete(&self, groups: &[Vec<Value>]) -> FunctionResult<Vec<Value>> {
		let evaluator = self.evaluator(StageMode::RawToFinal)?;
		let mut buffer = evaluator.new_buffer()?;

		let mut result = Vec::with_capacity(groups.len());
		for rows in groups {
			evaluator.reset(&mut buffer)?;
			for row in rows {
				evaluator.iterate(&mut buffer, std::slice::from_ref(row))?;
			}
			result.push(evaluator.terminate(&buffer)?);
		}
		Ok(result)
	}

	/// `RawToPartial -> PartialToPartial* -> PartialToFinal`.
	///
	/// `groups[g][p]` holds the rows of group `g` that landed in partition `p`. Each partition is
	/// one mapper task that sees every group.
	pub fn staged(&self, groups: &[Vec<Vec<Value>>], plan: StagedPlan) -> FunctionResult<Vec<Value>> {
		let partitions = groups.iter().map(Vec::len).max().unwrap_or(0);
		let mut partials: Vec<Vec<Value>> = vec![Vec::new(); groups.len()];

		for partition in 0..partitions {
			let mapper = self.evaluator(StageMode::RawToPartial)?;
			let mut buffer = mapper.new_buffer()?;
			for (group, rows) in groups.iter().enumerate() {
				let Some(rows) = rows.get(partition) else {
					continue;
				};
				mapper.reset(&mut buffer)?;
				for row in rows {
					mapper.iterate(&mut buffer, std::slice::from_ref(row))?;
				}
				partials[group].push(mapper.terminate_partial(&buffer)?);
			}
		}
		trace!(partitions, groups = groups.len(), "mapped partials");

		let fan_in = plan.fan_in.max(1);
		for round in 0..plan.rounds {
			let combiner = self.evaluator(StageMode::PartialToPartial)?;
			let mut buffer = combiner.new_buffer()?;
			for group in partials.iter_mut() {
				let mut combined = Vec::with_capacity(group.len().div_ceil(fan_in));
				for chunk in group.chunks(fan_in) {
					combiner.reset(&mut buffer)?;
					for partial in chunk {
						combiner.merge(&mut buffer, partial)?;
					}
					combined.push(combiner.terminate_partial(&buffer)?);
				}
				*group = combined;
			}
			trace!(round, fan_in, "combined partials");
		}

		let reducer = self.evaluator(StageMode::PartialToFinal)?;
		let mut buffer = reducer.new_buffer()?;
		let mut result = Vec::with_capacity(partials.len());
		for group in &partials {
			reducer.reset(&mut buffer)?;
			for partial in group {
				reducer.merge(&mut buffer, partial)?;
			}
			result.push(reducer.terminate(&buffer)?);
		}
		Ok(result)
	}
}
