// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use proptest::prelude::*;
use strata_function::{Functions, StageMode};
use strata_testing::{AggregateHost, StagedPlan, init_logging};
use strata_type::{Type, Value};

const PARTITIONS: usize = 4;

fn arb_row() -> impl Strategy<Value = Option<String>> {
	prop::option::weighted(0.9, ".{0,12}")
}

fn arb_group() -> impl Strategy<Value = Vec<(Option<String>, usize)>> {
	prop::collection::vec((arb_row(), 0..PARTITIONS), 0..16)
}

fn arb_plan() -> impl Strategy<Value = StagedPlan> {
	(1usize..5, 0usize..4).prop_map(|(fan_in, rounds)| StagedPlan {
		fan_in,
		rounds,
	})
}

fn length(row: &Option<String>) -> i64 {
	row.as_ref().map(|s| s.chars().count() as i64).unwrap_or(0)
}

proptest! {
	#[test]
	fn single_row_equals_length(s in ".{0,64}") {
		let function = Functions::default().get_aggregate("char_count").unwrap();
		let host = AggregateHost::new(function.as_ref());
		let result = host.complete(&[vec![Value::utf8(s.clone())]]).unwrap();
		prop_assert_eq!(result, vec![Value::int8(s.chars().count() as i64)]);
	}

	#[test]
	fn staged_equals_complete(groups in prop::collection::vec(arb_group(), 0..4), plan in arb_plan()) {
		let function = Functions::default().get_aggregate("char_count").unwrap();
		let host = AggregateHost::new(function.as_ref());

		let complete_input: Vec<Vec<Value>> = groups
			.iter()
			.map(|rows| rows.iter().map(|(row, _)| Value::from(row.clone())).collect())
			.collect();

		let staged_input: Vec<Vec<Vec<Value>>> = groups
			.iter()
			.map(|rows| {
				let mut partitions = vec![Vec::new(); PARTITIONS];
				for (row, partition) in rows {
					partitions[*partition].push(Value::from(row.clone()));
				}
				partitions
			})
			.collect();

		let expected: Vec<Value> = groups
			.iter()
			.map(|rows| Value::int8(rows.iter().map(|(row, _)| length(row)).sum::<i64>()))
			.collect();

		prop_assert_eq!(host.complete(&complete_input).unwrap(), expected.clone());
		prop_assert_eq!(host.staged(&staged_input, plan).unwrap(), expected);
	}
}

#[test]
fn test_reset_then_accumulate() {
	init_logging();
	let function = Functions::default().get_aggregate("char_count").unwrap();
	let mut evaluator = function.resolve(&[Type::Utf8]).ok().unwrap();
	evaluator.init(StageMode::RawToPartial, &[Type::Utf8]).unwrap();

	let mut buffer = evaluator.new_buffer().unwrap();
	evaluator.iterate(&mut buffer, &[Value::utf8("hello")]).unwrap();
	assert_eq!(evaluator.terminate_partial(&buffer).unwrap(), Value::int8(5));

	evaluator.reset(&mut buffer).unwrap();
	assert_eq!(buffer.sum(), 0);
	assert_eq!(evaluator.terminate_partial(&buffer).unwrap(), Value::int8(0));

	evaluator.iterate(&mut buffer, &[Value::utf8("ab")]).unwrap();
	evaluator.iterate(&mut buffer, &[Value::undefined()]).unwrap();
	assert_eq!(evaluator.terminate_partial(&buffer).unwrap(), Value::int8(2));
}

#[test]
fn test_partials_do_not_leak_between_groups() {
	init_logging();
	let function = Functions::default().get_aggregate("char_count").unwrap();
	let host = AggregateHost::new(function.as_ref());
	let groups = vec![
		vec![vec![Value::utf8("aaaa")], vec![Value::utf8("b")]],
		vec![vec![Value::utf8("cc")], vec![]],
		vec![vec![], vec![Value::undefined()]],
	];
	let result = host.staged(&groups, StagedPlan::default()).unwrap();
	assert_eq!(result, vec![Value::int8(5), Value::int8(2), Value::int8(0)]);
}

#[test]
fn test_merge_rejects_non_integer_partial() {
	let function = Functions::default().get_aggregate("char_count").unwrap();
	let mut evaluator = function.resolve(&[Type::Utf8]).ok().unwrap();
	evaluator.init(StageMode::PartialToFinal, &[Type::Int8]).unwrap();
	let mut buffer = evaluator.new_buffer().unwrap();

	let err = evaluator.merge(&mut buffer, &Value::utf8("12")).unwrap_err();
	assert_eq!(strata_type::Error::from(err).code, "FUNCTION_006");
	assert_eq!(buffer.sum(), 0);
}
