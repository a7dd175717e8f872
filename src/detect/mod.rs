//! First-recurrence detection over a lazily produced sequence.
//!
//! A [`CycleDetector`] pulls states one at a time, tests each against the ordered history using a
//! [`MatchStrategy`], and stops at the first state equal to an earlier one. That state closes the
//! loop: if it matches history slot `j` while being the `i`-th state consumed, the cycle starts at
//! `j` and has length `i - j`.
//!
//! The sequence is consumed only up to the closing state, so an infinite producer is fine as long
//! as it eventually repeats or [`DetectLimits::max_iterations`] is hit first.

pub mod budget;
pub mod strategy;

use std::hash::Hash;

use log::{debug, trace};

use crate::analysis::CycleAnalysis;
use crate::config::DetectLimits;
use crate::detect::budget::ScanBudget;
use crate::detect::strategy::{HashedScan, KeyedScan, LinearScan, MatchStrategy};
use crate::error::CycleError;

const PROGRESS_EVERY: u64 = 1 << 20;

/// One detection run: a strategy, its budget and the growing history.
///
/// [`CycleDetector::run`] takes the detector by value; a finished detector cannot be reused.
pub struct CycleDetector<T, S> {
    strategy: S,
    budget: ScanBudget,
    seen: Vec<T>,
}

impl<T, S> CycleDetector<T, S>
where
    S: MatchStrategy<T>,
{
    pub fn new(strategy: S, limits: DetectLimits) -> Self {
        Self {
            strategy,
            budget: ScanBudget::new(limits),
            seen: Vec::new(),
        }
    }

    pub fn run<I>(mut self, sequence: I) -> Result<CycleAnalysis<T>, CycleError>
    where
        I: IntoIterator<Item = T>,
    {
        let limits = self.budget.limits();
        self.budget
            .try_reserve_vec("seen_history", &mut self.seen, limits.capacity_hint)?;

        let mut states = sequence.into_iter();
        loop {
            if let Err(e) = self.budget.bump() {
                debug!("cycle scan exhausted after {} states", limits.max_iterations);
                return Err(e);
            }

            let i = self.seen.len();
            let Some(state) = states.next() else {
                debug!("cycle scan input ended after {i} states");
                return Err(CycleError::NoCycleFound {
                    max_iterations: limits.max_iterations,
                    consumed: i as u64,
                });
            };

            if let Some(j) = self
                .strategy
                .match_or_record(&self.seen, &state, &self.budget)?
            {
                debug!("cycle found: start={j}, length={}, states={i}", i - j);
                return Ok(CycleAnalysis::from_parts(j, i - j, self.seen));
            }

            self.budget.try_reserve_vec("seen_history", &mut self.seen, 1)?;
            self.seen.push(state);

            if self.budget.consumed() % PROGRESS_EVERY == 0 {
                trace!("cycle scan: {} states without a repeat", self.budget.consumed());
            }
        }
    }
}

/// Detect the first repeat using the states' own `Hash + Eq` and default limits.
pub fn find_cycle<T, I>(sequence: I) -> Result<CycleAnalysis<T>, CycleError>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    find_cycle_with_limits(sequence, DetectLimits::default())
}

pub fn find_cycle_with_limits<T, I>(
    sequence: I,
    limits: DetectLimits,
) -> Result<CycleAnalysis<T>, CycleError>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    CycleDetector::new(HashedScan::new(), limits).run(sequence)
}

/// Detect the first repeat under an arbitrary equality predicate `eq(prior, current)`.
///
/// Every new state is compared against the whole history, so the total cost is quadratic in the
/// number of states consumed. Use this when equality is not consistent with any hash.
pub fn find_cycle_by<T, I, F>(sequence: I, eq: F) -> Result<CycleAnalysis<T>, CycleError>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    find_cycle_by_with_limits(sequence, eq, DetectLimits::default())
}

pub fn find_cycle_by_with_limits<T, I, F>(
    sequence: I,
    eq: F,
    limits: DetectLimits,
) -> Result<CycleAnalysis<T>, CycleError>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    CycleDetector::new(LinearScan::new(eq), limits).run(sequence)
}

/// Detect the first repeat of a hashable projection `key(state)`.
pub fn find_cycle_by_key<T, K, I, F>(sequence: I, key: F) -> Result<CycleAnalysis<T>, CycleError>
where
    K: Hash + Eq,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    find_cycle_by_key_with_limits(sequence, key, DetectLimits::default())
}

pub fn find_cycle_by_key_with_limits<T, K, I, F>(
    sequence: I,
    key: F,
    limits: DetectLimits,
) -> Result<CycleAnalysis<T>, CycleError>
where
    K: Hash + Eq,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    CycleDetector::new(KeyedScan::new(key), limits).run(sequence)
}
