//! Iteration budget and allocation guards for a single scan.
//!
//! A scan over a sequence that never repeats would run forever and grow its history without
//! bound. The budget caps the number of consumed states and routes every history growth through
//! `try_reserve`, so both conditions surface as [`CycleError`] values instead of hangs or aborts.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::config::DetectLimits;
use crate::error::CycleError;

#[derive(Debug, Clone)]
/// Tracks consumed states against [`DetectLimits::max_iterations`].
pub struct ScanBudget {
    limits: DetectLimits,
    consumed: u64,
}

impl ScanBudget {
    #[inline]
    pub fn new(limits: DetectLimits) -> Self {
        Self {
            limits,
            consumed: 0,
        }
    }

    #[inline]
    pub fn limits(&self) -> DetectLimits {
        self.limits
    }

    #[inline]
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Claim one more state from the sequence, or fail once the cap is spent.
    #[inline]
    pub fn bump(&mut self) -> Result<(), CycleError> {
        if self.consumed >= self.limits.max_iterations {
            return Err(self.no_cycle());
        }
        self.consumed += 1;
        Ok(())
    }

    #[inline]
    pub fn no_cycle(&self) -> CycleError {
        CycleError::NoCycleFound {
            max_iterations: self.limits.max_iterations,
            consumed: self.consumed,
        }
    }

    pub fn try_reserve_vec<T>(
        &self,
        structure: &'static str,
        v: &mut Vec<T>,
        additional: usize,
    ) -> Result<(), CycleError> {
        v.try_reserve(additional)
            .map_err(|_| CycleError::AllocationFailed {
                structure,
                consumed: self.consumed,
            })
    }

    pub fn try_reserve_map<K, V>(
        &self,
        structure: &'static str,
        map: &mut FxHashMap<K, V>,
        additional: usize,
    ) -> Result<(), CycleError>
    where
        K: Hash + Eq,
    {
        map.try_reserve(additional)
            .map_err(|_| CycleError::AllocationFailed {
                structure,
                consumed: self.consumed,
            })
    }
}
