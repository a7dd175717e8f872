//! Equality strategies used to test a new state against the seen history.
//!
//! - [`LinearScan`]: arbitrary caller predicate, O(n) per state.
//! - [`HashedScan`]: natural `Hash + Eq` equality, O(1) average per state.
//! - [`KeyedScan`]: equality of a hashable projection, O(1) average per state.
//!
//! The hashed strategies keep one 64-bit digest per history slot. A digest hit only nominates a
//! candidate; the exact first-seen slot is confirmed by walking the ordered history.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHasher};

use crate::detect::budget::ScanBudget;
use crate::error::CycleError;

/// Membership test over the seen history.
///
/// `match_or_record` is called once per consumed state with the history *before* that state is
/// appended. It returns the index of the equal prior state, or `None` after recording that the
/// state will occupy slot `seen.len()`.
pub trait MatchStrategy<T> {
    fn match_or_record(
        &mut self,
        seen: &[T],
        state: &T,
        budget: &ScanBudget,
    ) -> Result<Option<usize>, CycleError>;
}

/// Predicate-based scan. The predicate is called as `eq(prior, current)`.
pub struct LinearScan<F> {
    eq: F,
}

impl<F> LinearScan<F> {
    #[inline]
    pub fn new(eq: F) -> Self {
        Self { eq }
    }
}

impl<T, F> MatchStrategy<T> for LinearScan<F>
where
    F: FnMut(&T, &T) -> bool,
{
    fn match_or_record(
        &mut self,
        seen: &[T],
        state: &T,
        _budget: &ScanBudget,
    ) -> Result<Option<usize>, CycleError> {
        Ok(seen.iter().position(|prior| (self.eq)(prior, state)))
    }
}

#[inline]
fn digest<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut h = FxHasher::default();
    key.hash(&mut h);
    h.finish()
}

/// Digest per history slot plus the first slot holding each digest.
#[derive(Debug, Default)]
struct DigestIndex {
    digests: Vec<u64>,
    first_slot: FxHashMap<u64, usize>,
}

impl DigestIndex {
    fn match_or_record(
        &mut self,
        digest: u64,
        budget: &ScanBudget,
        mut same: impl FnMut(usize) -> bool,
    ) -> Result<Option<usize>, CycleError> {
        if let Some(&first) = self.first_slot.get(&digest) {
            let hit = (first..self.digests.len()).find(|&i| self.digests[i] == digest && same(i));
            if hit.is_some() {
                return Ok(hit);
            }
        }

        budget.try_reserve_vec("digests", &mut self.digests, 1)?;
        budget.try_reserve_map("digest_index", &mut self.first_slot, 1)?;
        let slot = self.digests.len();
        self.first_slot.entry(digest).or_insert(slot);
        self.digests.push(digest);
        Ok(None)
    }
}

/// Hash-assisted scan using the state's own `Hash + Eq`.
#[derive(Debug, Default)]
pub struct HashedScan {
    index: DigestIndex,
}

impl HashedScan {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> MatchStrategy<T> for HashedScan
where
    T: Hash + Eq,
{
    fn match_or_record(
        &mut self,
        seen: &[T],
        state: &T,
        budget: &ScanBudget,
    ) -> Result<Option<usize>, CycleError> {
        debug_assert_eq!(self.index.digests.len(), seen.len());
        self.index
            .match_or_record(digest(state), budget, |i| seen[i] == *state)
    }
}

/// Hash-assisted scan over a projection: two states are equal iff their keys are equal.
pub struct KeyedScan<F> {
    key: F,
    index: DigestIndex,
}

impl<F> KeyedScan<F> {
    #[inline]
    pub fn new(key: F) -> Self {
        Self {
            key,
            index: DigestIndex::default(),
        }
    }
}

impl<T, K, F> MatchStrategy<T> for KeyedScan<F>
where
    F: FnMut(&T) -> K,
    K: Hash + Eq,
{
    fn match_or_record(
        &mut self,
        seen: &[T],
        state: &T,
        budget: &ScanBudget,
    ) -> Result<Option<usize>, CycleError> {
        debug_assert_eq!(self.index.digests.len(), seen.len());
        let wanted = (self.key)(state);
        let key = &mut self.key;
        self.index
            .match_or_record(digest(&wanted), budget, |i| key(&seen[i]) == wanted)
    }
}
