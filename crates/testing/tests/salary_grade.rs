// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::str::FromStr;

use strata_function::{FunctionConfig, Functions};
use strata_testing::{ScalarHost, init_logging};
use strata_type::{Decimal, Type, Value};

fn host(arg: Type) -> ScalarHost {
	let function = Functions::default().get_scalar("salary_grade").unwrap();
	ScalarHost::new(function, &[arg]).unwrap()
}

#[test]
fn test_boundaries() {
	init_logging();
	let mut host = host(Type::Int4);
	assert_eq!(host.output(), &Type::Utf8);

	let result = host
		.evaluate_column([999, 1000, 1001, 3000, 3001].into_iter().map(Value::int4).chain([Value::undefined()]))
		.unwrap();
	assert_eq!(
		result,
		["Grade_A", "Grade_A", "Grade_B", "Grade_B", "Grade_C", "NULL"].into_iter().map(Value::utf8).collect::<Vec<_>>()
	);
}

#[test]
fn test_mixed_representations() {
	init_logging();
	let mut host = host(Type::Utf8);
	let column = vec![
		Value::utf8("2500"),
		Value::decimal(Decimal::from_str("1000.5").unwrap()),
		Value::int8(5000),
		Value::utf8("lots"),
		Value::bool(true),
		Value::utf8("10"),
	];
	let result = host.evaluate_column(column).unwrap();
	assert_eq!(
		result,
		["Grade_B", "Grade_B", "Grade_C", "ERROR", "ERROR", "Grade_A"]
			.into_iter()
			.map(Value::utf8)
			.collect::<Vec<_>>()
	);
}

#[test]
fn test_thresholds_from_json() {
	let config = FunctionConfig::from_json(r#"{ "grade": { "a_max": 10.0, "b_max": 20.0 } }"#).unwrap();
	let function = Functions::builtin(&config).get_scalar("salary_grade").unwrap();
	let mut host = ScalarHost::new(function, &[Type::Int4]).unwrap();
	let result = host.evaluate_column([10, 11, 21].into_iter().map(Value::int4)).unwrap();
	assert_eq!(result, vec![Value::utf8("Grade_A"), Value::utf8("Grade_B"), Value::utf8("Grade_C")]);
}
