//! # `origin-seq`: durable sequence numbers for generated documents
//!
//! Hands out unique, strictly increasing integers backed by a pluggable
//! [`CounterStore`]. The only shared mutable state is owned by
//! [`LockSequenceAllocator`], whose lock covers the whole read-modify-write of
//! the store, so concurrent callers in one process never observe the same
//! value.
//!
//! ## Store convention
//!
//! The store always holds the *next* value to hand out:
//!
//! - absent store: the allocation returns `1` and leaves `2` behind
//! - store holding `N`: the allocation returns `N` and leaves `N + 1` behind
//!
//! After any allocation that returned `V`, reading the store yields `V + 1`.
//!
//! ## Example
//!
//! ```
//! use origin_seq::{LockSequenceAllocator, MemoryStore};
//!
//! let allocator = LockSequenceAllocator::new(MemoryStore::default());
//! assert_eq!(allocator.allocate_next().unwrap(), 1);
//! assert_eq!(allocator.allocate_next().unwrap(), 2);
//! assert_eq!(allocator.peek().unwrap(), 3);
//! ```

mod allocator;
mod error;
mod mutex;
mod store;

pub use crate::allocator::*;
pub use crate::error::*;
pub use crate::mutex::*;
pub use crate::store::*;
