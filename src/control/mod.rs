//! Control structures for functional programming.
//!
//! This module provides [`Trampoline`], a data structure for stack-safe
//! recursion. Self-recursive algorithms are expressed as a chain of
//! deferred steps and interpreted by an explicit loop, so recursion depth
//! never translates into call-stack depth.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Trampoline;
//!
//! fn count_down(n: u64) -> Trampoline<u64> {
//!     if n == 0 {
//!         Trampoline::complete(0)
//!     } else {
//!         Trampoline::defer(move || count_down(n - 1))
//!     }
//! }
//!
//! // This would overflow the stack as plain recursion
//! assert_eq!(count_down(100_000).run(), 0);
//! ```

mod trampoline;

pub use trampoline::Trampoline;
