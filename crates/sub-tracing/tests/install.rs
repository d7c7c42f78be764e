// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_sub_tracing::{Format, TracingBuilder};

// Kept as a single test: the global subscriber can only be installed once per process.
#[test]
fn test_install_once() {
	let broken = TracingBuilder::new().with_filter("strata=loud").build();
	let err = broken.try_init().unwrap_err();
	assert_eq!(err.code, "SUBSYSTEM_001");
	assert!(!broken.is_installed());

	let first = TracingBuilder::new().with_filter("debug").with_format(Format::Json).with_test_writer(true).build();
	first.try_init().unwrap();
	assert!(first.is_installed());

	let second = TracingBuilder::new().with_test_writer(true).build();
	let err = second.try_init().unwrap_err();
	assert_eq!(err.code, "SUBSYSTEM_002");
	assert!(!second.is_installed());
}
