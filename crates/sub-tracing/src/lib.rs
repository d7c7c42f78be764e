// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Tracing subscriber setup shared by hosts and tests.

pub mod builder;
pub mod factory;
pub mod subsystem;

pub use builder::{Format, TracingBuilder};
pub use factory::{TracingConfigurator, TracingSubsystemFactory};
pub use subsystem::TracingSubsystem;
