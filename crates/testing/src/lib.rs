// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Host simulators that drive function lifecycles the way the query engine does.

pub mod aggregate;
pub mod generator;
pub mod logging;
pub mod scalar;

pub use aggregate::{AggregateHost, StagedPlan};
pub use generator::GeneratorHost;
pub use logging::init_logging;
pub use scalar::ScalarHost;
