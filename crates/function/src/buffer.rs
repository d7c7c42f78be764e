// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Running sum for one group, owned by exactly one evaluator at a time.
///
/// Only non-negative amounts are ever added, so the sum never decreases between resets.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AggregationBuffer {
	sum: i64,
}

impl AggregationBuffer {
	pub fn new() -> Self {
		Self {
			sum: 0,
		}
	}

	pub fn sum(&self) -> i64 {
		self.sum
	}

	pub fn add(&mut self, amount: i64) {
		debug_assert!(amount >= 0, "aggregation buffer only accepts non-negative amounts");
		self.sum = self.sum.saturating_add(amount);
	}

	pub fn clear(&mut self) {
		self.sum = 0;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_buffer_is_zero() {
		assert_eq!(AggregationBuffer::new().sum(), 0);
	}

	#[test]
	fn test_clear_mutates_in_place() {
		let mut buffer = AggregationBuffer::new();
		buffer.add(5);
		buffer.add(7);
		assert_eq!(buffer.sum(), 12);

		buffer.clear();
		assert_eq!(buffer.sum(), 0);

		buffer.add(3);
		assert_eq!(buffer.sum(), 3);
	}

	#[test]
	fn test_add_saturates() {
		let mut buffer = AggregationBuffer::new();
		buffer.add(i64::MAX);
		buffer.add(1);
		assert_eq!(buffer.sum(), i64::MAX);
	}
}
