//! Intrusive circular list over arena storage, with an in-place merge sort.
//!
//! The classic sentinel-based circular doubly-linked list recovers the record
//! around a link by pointer offset. This crate keeps the structure but swaps
//! the mechanism: records live in an [`Arena`] with stable indices, link
//! fields hold indices via the [`Linked`] trait, and "entry from link" is an
//! O(1) arena lookup.
//!
//! ```text
//! Arena (storage)  - owns the records, provides stable indices
//! Ring             - coordinates indices, doesn't own data
//! sort             - rearranges links only, never payloads
//! ```
//!
//! On top of the ring sits a recursive merge sort that works by pure list
//! surgery: slow/fast midpoint, O(1) cut, pairwise node relocation, O(1)
//! splice of the leftovers. No auxiliary array, no payload copies, no heap
//! allocation during the sort. Stable, O(n log n), O(log n) stack.
//!
//! # Quick Start
//!
//! ```
//! use ringlist::LineQueue;
//!
//! let mut queue = LineQueue::with_capacity(16);
//! queue.push_line("banana\n").unwrap();
//! queue.push_line("apple\n").unwrap();
//! queue.push_line("cherry\n").unwrap();
//!
//! queue.sort();
//!
//! let lines: Vec<&str> = queue.lines().collect();
//! assert_eq!(lines, ["apple\n", "banana\n", "cherry\n"]);
//! ```
//!
//! # Rolling Your Own Records
//!
//! Any record type can participate: embed two link fields, implement
//! [`Linked`], store records in an [`Arena`] (or `slab::Slab` with the `slab`
//! feature), and order them with a [`Ring`] plus [`sort::sort_by`] under any
//! comparator.
//!
//! # Critical Invariant: Same Storage Instance
//!
//! All operations on a ring must use the same storage instance, and a node
//! may be linked into at most one ring at a time. Both are the caller's
//! responsibility (same discipline as the `slab` crate); violations panic or
//! corrupt links rather than being reported as errors.
//!
//! # Feature Flags
//!
//! - `slab` (default) - [`Storage`] impl for `slab::Slab`, a growable backend

#![warn(missing_docs)]

pub mod index;
pub mod lines;
pub mod linked;
pub mod ring;
pub mod sort;
pub mod storage;

pub use index::Index;
pub use lines::LineQueue;
pub use linked::Linked;
pub use ring::{Iter, Ring};
pub use storage::{Arena, Full, Storage};
