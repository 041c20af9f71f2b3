//! Persistent (immutable) data structures.
//!
//! This module provides [`PersistentList`], an immutable singly-linked
//! cons list with structural sharing. Lists are built bottom-up by
//! prepending and never mutated afterwards; every producing operation
//! returns a new list while the original stays valid.
//!
//! # Examples
//!
//! ```rust
//! use funkit::persistent::PersistentList;
//!
//! let list = PersistentList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//!
//! // The original is untouched by further prepends
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//! ```

mod list;

pub use list::{PersistentList, PersistentListIntoIterator, PersistentListIterator};
