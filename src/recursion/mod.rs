//! Recursion with shared state: memoized Fibonacci and backtracking subsets.

pub mod cache;
pub mod fibonacci;
pub mod subsets;

pub use cache::{MemoCache, SharedMemoCache};
pub use fibonacci::{
    fib_iterative, fib_memoized, fib_memoized_shared, fib_recursive, fib_report, fib_tabulated,
    FibReport,
};
pub use subsets::subsets;
