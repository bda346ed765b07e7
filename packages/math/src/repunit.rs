//! Repunits (1, 11, 111, ...) and the search for the shortest repunit a
//! given divisor divides.

use std::sync::{PoisonError, RwLock};

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::BigInt;
use crate::error::{MathError, Result};

/// Append-only cache of repunits. Position `i` (1-indexed) holds the repunit
/// made of `i` ones.
///
/// # Example
///
/// ```
/// use math::repunit::RepunitTable;
///
/// let mut table = RepunitTable::new();
/// assert_eq!(table.repunit(4).unwrap().to_string(), "1111");
/// assert_eq!(table.cached_len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct RepunitTable {
    values: Vec<BigInt>,
}

impl RepunitTable {
    pub fn new() -> Self {
        RepunitTable {
            values: vec![BigInt::one()],
        }
    }

    /// A table already extended through length `k`.
    pub fn with_length(k: usize) -> Self {
        let mut table = Self::new();
        table.extend_to(k);
        table
    }

    /// Number of cached repunits. Never zero: the table starts at `[1]`.
    pub fn cached_len(&self) -> usize {
        self.values.len()
    }

    /// Cached repunit of length `k`, without extending the table.
    pub fn get(&self, k: usize) -> Option<&BigInt> {
        k.checked_sub(1).and_then(|i| self.values.get(i))
    }

    /// Repunit of length `k`, extending the table from its last entry if needed.
    pub fn repunit(&mut self, k: usize) -> Result<&BigInt> {
        if k == 0 {
            return Err(MathError::InvalidInput(
                "repunit length must be at least 1".to_string(),
            ));
        }
        self.extend_to(k);
        Ok(&self.values[k - 1])
    }

    fn extend_to(&mut self, k: usize) {
        while self.values.len() < k {
            let next = &self.values[self.values.len() - 1] * 10 + 1;
            self.values.push(next);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &BigInt> {
        self.values.iter()
    }
}

impl Default for RepunitTable {
    fn default() -> Self {
        Self::new()
    }
}

/// A `RepunitTable` shared between worker threads.
///
/// Lookups take the read lock; extension happens under the write lock so
/// each length is computed exactly once.
#[derive(Debug, Default)]
pub struct SharedRepunitTable {
    inner: RwLock<RepunitTable>,
}

impl SharedRepunitTable {
    pub fn new(table: RepunitTable) -> Self {
        SharedRepunitTable {
            inner: RwLock::new(table),
        }
    }

    /// Run `f` against the repunit of length `k`.
    pub fn with_repunit<T, F>(&self, k: usize, f: F) -> Result<T>
    where
        F: FnOnce(&BigInt) -> T,
    {
        {
            let table = self.inner.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(value) = table.get(k) {
                return Ok(f(value));
            }
        }
        let mut table = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        table.repunit(k).map(f)
    }

    pub fn into_inner(self) -> RepunitTable {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Progress of a search for one divisor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Searching(usize),
    Found(usize),
}

impl SearchState {
    pub fn start() -> Self {
        SearchState::Searching(1)
    }

    /// Next state after testing the current length.
    ///
    /// # Example
    ///
    /// ```
    /// use math::repunit::SearchState;
    ///
    /// let s = SearchState::start().advance(false);
    /// assert_eq!(s, SearchState::Searching(2));
    /// assert_eq!(s.advance(true), SearchState::Found(2));
    /// ```
    pub fn advance(self, divisible: bool) -> Self {
        match self {
            SearchState::Searching(k) if divisible => SearchState::Found(k),
            SearchState::Searching(k) => SearchState::Searching(k + 1),
            found @ SearchState::Found(_) => found,
        }
    }
}

/// How the finder tests `repunit(k) mod divisor`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Divide the memoized big-integer repunit itself. The table holds
    /// O(k^2) digits, so pair it with `max_length` for large divisors.
    Table,
    /// Carry `repunit(k) mod divisor` forward as `(r * 10 + 1) mod divisor`.
    #[default]
    Remainder,
}

/// Finds, for each divisor, the smallest `k` such that the repunit of length
/// `k` is divisible by it. The repunit table lives as long as the finder.
///
/// # Example
///
/// ```
/// use math::RepunitDivisorFinder;
///
/// let mut finder = RepunitDivisorFinder::new();
/// assert_eq!(finder.find_all(&[3, 7, 11]).unwrap(), vec![3, 6, 2]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RepunitDivisorFinder {
    table: RepunitTable,
    strategy: SearchStrategy,
    max_length: Option<usize>,
}

impl RepunitDivisorFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: SearchStrategy) -> Self {
        RepunitDivisorFinder {
            strategy,
            ..Self::default()
        }
    }

    /// Give up with `SearchLimitExceeded` once lengths above `limit` would be tried.
    pub fn max_length(mut self, limit: usize) -> Self {
        self.max_length = Some(limit);
        self
    }

    pub fn table(&self) -> &RepunitTable {
        &self.table
    }

    pub fn repunit(&mut self, k: usize) -> Result<&BigInt> {
        self.table.repunit(k)
    }

    pub fn find_min_repunit_length(&mut self, divisor: u64) -> Result<usize> {
        check_divisor(divisor)?;
        let limit = self.max_length;
        match self.strategy {
            SearchStrategy::Table => {
                let table = &mut self.table;
                search(divisor, limit, |k| table.repunit(k)?.rem_u64(divisor))
            }
            SearchStrategy::Remainder => search(divisor, limit, remainder_stepper(divisor)),
        }
    }

    /// Search every divisor in order, stopping at the first failure.
    pub fn find_all(&mut self, divisors: &[u64]) -> Result<Vec<usize>> {
        divisors
            .iter()
            .map(|&d| self.find_min_repunit_length(d))
            .collect()
    }

    /// Search all divisors across the rayon pool. Results come back in input
    /// order, one per divisor.
    pub fn find_each_parallel(&mut self, divisors: &[u64]) -> Vec<Result<usize>> {
        let shared = SharedRepunitTable::new(std::mem::take(&mut self.table));
        let (strategy, limit) = (self.strategy, self.max_length);

        let results: Vec<Result<usize>> = divisors
            .par_iter()
            .map(|&divisor| {
                check_divisor(divisor)?;
                match strategy {
                    SearchStrategy::Table => search(divisor, limit, |k| {
                        shared.with_repunit(k, |r| r.rem_u64(divisor))?
                    }),
                    SearchStrategy::Remainder => {
                        search(divisor, limit, remainder_stepper(divisor))
                    }
                }
            })
            .collect();

        self.table = shared.into_inner();
        results
    }
}

fn check_divisor(divisor: u64) -> Result<()> {
    if divisor == 0 {
        return Err(MathError::InvalidInput(
            "divisor must be positive".to_string(),
        ));
    }
    if divisor.is_multiple_of(2) || divisor.is_multiple_of(5) {
        return Err(MathError::DivisorNotCoprimeWithBase { divisor });
    }
    Ok(())
}

/// Yields `repunit(k) mod divisor` for k = 1, 2, 3, ... on successive calls.
fn remainder_stepper(divisor: u64) -> impl FnMut(usize) -> Result<u64> {
    let d = divisor as u128;
    let mut r = 0u128;
    move |_| {
        r = (r * 10 + 1) % d;
        Ok(r as u64)
    }
}

/// Drive a `SearchState` from `Searching(1)` until `remainder_at(k)` is zero.
fn search<F>(divisor: u64, limit: Option<usize>, mut remainder_at: F) -> Result<usize>
where
    F: FnMut(usize) -> Result<u64>,
{
    let mut state = SearchState::start();
    loop {
        match state {
            SearchState::Found(k) => {
                debug!(divisor, length = k, "found repunit multiple");
                return Ok(k);
            }
            SearchState::Searching(k) => {
                if let Some(limit) = limit.filter(|&limit| k > limit) {
                    return Err(MathError::SearchLimitExceeded { divisor, limit });
                }
                trace!(divisor, length = k, "test");
                state = state.advance(remainder_at(k)? == 0);
            }
        }
    }
}
