// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::atomic::{AtomicBool, Ordering};

use strata_type::{
	Result,
	error::diagnostic::subsystem::{invalid_filter, logging_init_failed},
};
use tracing::debug;
use tracing_subscriber::{
	EnvFilter,
	fmt::{TestWriter, writer::BoxMakeWriter},
};

use crate::builder::Format;

/// A configured, not yet installed, global tracing subscriber
pub struct TracingSubsystem {
	filter: String,
	format: Format,
	target: bool,
	test_writer: bool,
	installed: AtomicBool,
}

impl TracingSubsystem {
	pub(crate) fn new(filter: String, format: Format, target: bool, test_writer: bool) -> Self {
		Self {
			filter,
			format,
			target,
			test_writer,
			installed: AtomicBool::new(false),
		}
	}

	pub fn name(&self) -> &'static str {
		"sub-tracing"
	}

	pub fn filter(&self) -> &str {
		&self.filter
	}

	pub fn format(&self) -> Format {
		self.format
	}

	pub fn is_installed(&self) -> bool {
		self.installed.load(Ordering::Acquire)
	}

	/// Install as the process-wide default subscriber.
	///
	/// Fails if the filter directive does not parse or if any subscriber is already installed,
	/// including one installed by another `TracingSubsystem`.
	pub fn try_init(&self) -> Result<()> {
		let filter = EnvFilter::try_new(&self.filter)
			.map_err(|err| strata_type::error!(invalid_filter(&self.filter, err.to_string())))?;

		let writer = if self.test_writer {
			BoxMakeWriter::new(TestWriter::new())
		} else {
			BoxMakeWriter::new(std::io::stdout)
		};

		let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(self.target).with_writer(writer);
		let result = match self.format {
			Format::Pretty => builder.pretty().try_init(),
			Format::Compact => builder.compact().try_init(),
			Format::Json => builder.json().try_init(),
		};
		result.map_err(|err| strata_type::error!(logging_init_failed(err.to_string())))?;

		self.installed.store(true, Ordering::Release);
		debug!(subsystem = self.name(), filter = %self.filter, format = %self.format, "tracing subscriber installed");
		Ok(())
	}
}
