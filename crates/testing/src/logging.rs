// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{env, sync::Once};

use strata_sub_tracing::{Format, TracingSubsystemFactory};

static INIT: Once = Once::new();

/// Installs a test-captured subscriber once per test binary.
///
/// The filter is taken from `RUST_LOG` and falls back to `debug`, so skip and degrade events are
/// formatted even when nobody looks at them.
pub fn init_logging() {
	INIT.call_once(|| {
		let filter = env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string());
		let subsystem = TracingSubsystemFactory::with_configurator(move |builder| {
			builder.with_filter(filter).with_format(Format::Compact).with_test_writer(true)
		})
		.create();
		// another harness in the same process may have installed one already
		let _ = subsystem.try_init();
	});
}
