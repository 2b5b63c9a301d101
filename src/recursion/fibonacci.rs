//! Fibonacci four ways: naive, memoized, tabulated and constant-space.
//!
//! All variants compute the same function, including past
//! [`MAX_FIB_INDEX`](crate::types::MAX_FIB_INDEX) where every one of them
//! wraps around in two's complement, so any of them can serve as an oracle
//! for another.

use serde::Serialize;

use super::cache::{MemoCache, SharedMemoCache};

/// Plain double recursion. Exponential time; only for small `n`.
pub fn fib_recursive(n: u32) -> i64 {
    if n <= 1 {
        return n as i64;
    }
    fib_recursive(n - 1).wrapping_add(fib_recursive(n - 2))
}

/// Top-down recursion that stores every subproblem result in `cache`.
///
/// Both recursive calls share the cache, so each index is computed once.
/// Values already in the cache are returned as-is.
pub fn fib_memoized(n: u32, cache: &mut MemoCache) -> i64 {
    if n <= 1 {
        return n as i64;
    }
    if let Some(value) = cache.lookup(n) {
        return value;
    }
    let value = fib_memoized(n - 1, cache).wrapping_add(fib_memoized(n - 2, cache));
    cache.insert(n, value)
}

/// [`fib_memoized`] over a cache shared between threads. The lock is held
/// only for each lookup and insert, never across the recursion.
pub fn fib_memoized_shared(n: u32, cache: &SharedMemoCache) -> i64 {
    if n <= 1 {
        return n as i64;
    }
    if let Some(value) = cache.get(n) {
        return value;
    }
    let value = fib_memoized_shared(n - 1, cache).wrapping_add(fib_memoized_shared(n - 2, cache));
    cache.insert(n, value)
}

/// Bottom-up table of every value up to `n`.
pub fn fib_tabulated(n: u32) -> i64 {
    if n <= 1 {
        return n as i64;
    }
    let n = n as usize;
    let mut dp = vec![0i64; n + 1];
    dp[1] = 1;
    for i in 2..=n {
        dp[i] = dp[i - 1].wrapping_add(dp[i - 2]);
    }
    dp[n]
}

/// Bottom-up, keeping only the last two values.
pub fn fib_iterative(n: u32) -> i64 {
    if n <= 1 {
        return n as i64;
    }
    let (mut a, mut b) = (0i64, 1i64);
    for _ in 2..=n {
        let sum = a.wrapping_add(b);
        a = b;
        b = sum;
    }
    b
}

/// Results of the fast variants for one `n`, for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct FibReport {
    pub n: u32,
    pub memoized: i64,
    pub tabulated: i64,
    pub iterative: i64,
    /// Entries left in the memo cache after the memoized run.
    pub cache_entries: usize,
    /// Whether the result fits without wrapping.
    pub exact: bool,
}

/// Compute `fib(n)` with the memoized, tabulated and iterative variants.
pub fn fib_report(n: u32) -> FibReport {
    let mut cache = MemoCache::new();
    let memoized = fib_memoized(n, &mut cache);
    log::debug!(
        "fib({}) memoized: {} entries, {} hits, {} misses",
        n,
        cache.len(),
        cache.hits(),
        cache.misses()
    );

    FibReport {
        n,
        memoized,
        tabulated: fib_tabulated(n),
        iterative: fib_iterative(n),
        cache_entries: cache.len(),
        exact: n <= crate::types::MAX_FIB_INDEX,
    }
}
