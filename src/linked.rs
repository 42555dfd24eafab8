//! Linked trait for intrusive ring nodes.
//!
//! The link fields live inside the payload record itself, not in a separate
//! wrapper node. The record never owns its neighbors; the arena that stores
//! the records owns all of them, and ring operations only rewire indices.

use crate::Index;

/// Trait for records that embed their own prev/next links.
///
/// A link value of `Idx::NONE` means the neighbor in that direction is the
/// ring anchor, i.e. the node is currently first (`prev`) or last (`next`).
/// An unlinked record holds `NONE` in both fields.
///
/// # Example
///
/// ```
/// use ringlist::Linked;
///
/// struct Record {
///     value: String,
///     prev: u32,
///     next: u32,
/// }
///
/// impl Linked<u32> for Record {
///     fn next(&self) -> u32 { self.next }
///     fn prev(&self) -> u32 { self.prev }
///     fn set_next(&mut self, idx: u32) { self.next = idx; }
///     fn set_prev(&mut self, idx: u32) { self.prev = idx; }
/// }
/// ```
pub trait Linked<Idx: Index> {
    /// Returns the next node's index, or `Idx::NONE` if this node is last.
    fn next(&self) -> Idx;

    /// Returns the previous node's index, or `Idx::NONE` if this node is first.
    fn prev(&self) -> Idx;

    /// Sets the next node's index.
    fn set_next(&mut self, idx: Idx);

    /// Sets the previous node's index.
    fn set_prev(&mut self, idx: Idx);
}
