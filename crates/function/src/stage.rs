// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

/// Phase of distributed aggregation an evaluator instance serves.
///
/// The host fixes the stage once, at `init`, and it determines which operations the
/// evaluator accepts for the rest of its life:
///
/// | stage              | consumes          | emits                |
/// |--------------------|-------------------|----------------------|
/// | `RawToPartial`     | raw rows          | partial aggregate    |
/// | `PartialToPartial` | partial aggregate | partial aggregate    |
/// | `PartialToFinal`   | partial aggregate | final aggregate      |
/// | `RawToFinal`       | raw rows          | final aggregate      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageMode {
	// map side, before the shuffle
	RawToPartial,
	// combiner
	PartialToPartial,
	// reducer
	PartialToFinal,
	// map only, no shuffle
	RawToFinal,
}

impl StageMode {
	pub const ALL: [StageMode; 4] =
		[StageMode::RawToPartial, StageMode::PartialToPartial, StageMode::PartialToFinal, StageMode::RawToFinal];

	/// `iterate` is legal
	pub fn consumes_raw(self) -> bool {
		matches!(self, StageMode::RawToPartial | StageMode::RawToFinal)
	}

	/// `merge` is legal
	pub fn consumes_partial(self) -> bool {
		!self.consumes_raw()
	}

	/// `terminate_partial` is legal
	pub fn emits_partial(self) -> bool {
		matches!(self, StageMode::RawToPartial | StageMode::PartialToPartial)
	}

	/// `terminate` is legal
	pub fn emits_final(self) -> bool {
		!self.emits_partial()
	}
}

impl Display for StageMode {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let label = match self {
			StageMode::RawToPartial => "RawToPartial",
			StageMode::PartialToPartial => "PartialToPartial",
			StageMode::PartialToFinal => "PartialToFinal",
			StageMode::RawToFinal => "RawToFinal",
		};
		f.write_str(label)
	}
}
