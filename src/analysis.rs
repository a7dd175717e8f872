//! The result of a successful detection and the extrapolation query.
//!
//! The history holds every distinct state observed before the first repeat, in order. Slots
//! `[0, cycle_start_index)` are the lead-in; slots `[cycle_start_index, len)` are one full
//! repetition. Any logical index maps onto a history slot in O(1):
//!
//! ```text
//! index < start  => index
//! index >= start => start + (index - start) % length
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CycleError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Where the repeating segment starts, how long it is, and the states observed up to it.
pub struct CycleAnalysis<T> {
    cycle_start_index: usize,
    cycle_length: usize,
    values_seen: Vec<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Shape of a cycle without the states themselves.
pub struct CycleSummary {
    pub cycle_start_index: usize,
    pub cycle_length: usize,
    pub states_observed: usize,
}

impl<T> CycleAnalysis<T> {
    /// Built by the detector, which guarantees `length >= 1` and `start + length == len`.
    pub(crate) fn from_parts(
        cycle_start_index: usize,
        cycle_length: usize,
        values_seen: Vec<T>,
    ) -> Self {
        debug_assert!(cycle_length >= 1);
        debug_assert_eq!(cycle_start_index + cycle_length, values_seen.len());
        Self {
            cycle_start_index,
            cycle_length,
            values_seen,
        }
    }

    #[inline]
    pub fn cycle_start_index(&self) -> usize {
        self.cycle_start_index
    }

    #[inline]
    pub fn cycle_length(&self) -> usize {
        self.cycle_length
    }

    #[inline]
    pub fn values_seen(&self) -> &[T] {
        &self.values_seen
    }

    pub fn into_values_seen(self) -> Vec<T> {
        self.values_seen
    }

    /// States before the cycle begins.
    #[inline]
    pub fn prefix(&self) -> &[T] {
        &self.values_seen[..self.cycle_start_index]
    }

    /// One repetition of the cycle, starting at `cycle_start_index`.
    #[inline]
    pub fn cycle(&self) -> &[T] {
        &self.values_seen[self.cycle_start_index..self.cycle_start_index + self.cycle_length]
    }

    /// Slot in [`Self::values_seen`] holding the state at logical `target`.
    pub fn history_index(&self, target: u64) -> usize {
        let start = self.cycle_start_index as u64;
        if target < start {
            return target as usize;
        }
        let offset = (target - start) % self.cycle_length as u64;
        self.cycle_start_index + offset as usize
    }

    /// State at logical index `target`, which may lie far beyond the observed history.
    #[inline]
    pub fn value_at(&self, target: u64) -> &T {
        &self.values_seen[self.history_index(target)]
    }

    /// State at logical index `target`; negative indices are rejected.
    pub fn find_value_at(&self, target: i64) -> Result<&T, CycleError> {
        let target = u64::try_from(target).map_err(|_| {
            CycleError::invalid("target_index", format!("must be non-negative, got {target}"))
        })?;
        Ok(self.value_at(target))
    }

    pub fn summary(&self) -> CycleSummary {
        CycleSummary {
            cycle_start_index: self.cycle_start_index,
            cycle_length: self.cycle_length,
            states_observed: self.values_seen.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead_in_then_pair() -> CycleAnalysis<i32> {
        // 99, 100, (1, 2)*
        CycleAnalysis::from_parts(2, 2, vec![99, 100, 1, 2])
    }

    #[test]
    fn slices_split_at_cycle_start() {
        let a = lead_in_then_pair();
        assert_eq!(a.prefix(), &[99, 100]);
        assert_eq!(a.cycle(), &[1, 2]);
    }

    #[test]
    fn history_index_wraps_inside_cycle() {
        let a = lead_in_then_pair();
        let slots: Vec<usize> = (0..8).map(|n| a.history_index(n)).collect();
        assert_eq!(slots, vec![0, 1, 2, 3, 2, 3, 2, 3]);
    }

    #[test]
    fn extrapolates_to_the_end_of_u64() {
        let a = lead_in_then_pair();
        // (u64::MAX - 2) is odd
        assert_eq!(*a.value_at(u64::MAX), 2);
        assert_eq!(*a.find_value_at(i64::MAX).unwrap(), 2);
    }

    #[test]
    fn negative_target_is_invalid() {
        let a = lead_in_then_pair();
        let err = a.find_value_at(-1).unwrap_err();
        assert!(matches!(
            err,
            CycleError::InvalidArgument {
                name: "target_index",
                ..
            }
        ));
        assert!(err.to_string().contains("-1"));
    }
}
