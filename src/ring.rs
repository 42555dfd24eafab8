//! Circular doubly-linked ring over arena storage.
//!
//! A [`Ring`] is the anchor of a circular list: it holds the anchor's own
//! `next` (first node) and `prev` (last node), while every record embeds its
//! two link fields via [`Linked`]. `Idx::NONE` inside a node's link means
//! "the anchor", so following `next` from any node always comes back around.
//!
//! All mutating operations preserve the two-way consistency property: for
//! every linked node `x`, `x.next.prev == x` and `x.prev.next == x`, with the
//! anchor closing the cycle at both ends.
//!
//! Splice and cut are O(1) boundary relinking, which is what makes the merge
//! sort in [`crate::sort`] pure pointer surgery.
//!
//! # Storage Invariant
//!
//! A ring must always be used with the same storage instance. Passing a
//! different storage is a contract violation and panics or corrupts links.
//! This is the caller's responsibility (same discipline as the `slab` crate).
//!
//! # Example
//!
//! ```
//! use ringlist::{Arena, Index, Linked, Ring, Storage};
//!
//! #[derive(Debug)]
//! struct Job {
//!     id: u64,
//!     prev: u32,
//!     next: u32,
//! }
//!
//! impl Job {
//!     fn new(id: u64) -> Self {
//!         Self { id, prev: u32::NONE, next: u32::NONE }
//!     }
//! }
//!
//! impl Linked<u32> for Job {
//!     fn next(&self) -> u32 { self.next }
//!     fn prev(&self) -> u32 { self.prev }
//!     fn set_next(&mut self, idx: u32) { self.next = idx; }
//!     fn set_prev(&mut self, idx: u32) { self.prev = idx; }
//! }
//!
//! let mut arena: Arena<Job> = Arena::with_capacity(16);
//! let mut ring: Ring<u32> = Ring::new();
//!
//! let a = arena.try_insert(Job::new(1)).unwrap();
//! let b = arena.try_insert(Job::new(2)).unwrap();
//! ring.push_back(&mut arena, a);
//! ring.push_back(&mut arena, b);
//!
//! let ids: Vec<u64> = ring.iter(&arena).map(|(_, job)| job.id).collect();
//! assert_eq!(ids, [1, 2]);
//! ```

use std::marker::PhantomData;

use crate::{Index, Linked, Storage};

/// Anchor of a circular doubly-linked list.
///
/// Holds only the first and last node's indices (the anchor's own two link
/// fields). There is no stored length and no parallel node chain: the linked
/// records are the single source of truth for order, and any length fact is
/// derived by walking.
#[derive(Debug)]
pub struct Ring<Idx: Index> {
    head: Idx,
    tail: Idx,
}

impl<Idx: Index> Default for Ring<Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Idx: Index> Ring<Idx> {
    /// Creates an empty ring (the anchor linked to itself).
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: Idx::NONE,
            tail: Idx::NONE,
        }
    }

    /// Returns the first node's index, or `Idx::NONE` if empty.
    #[inline]
    pub const fn front(&self) -> Idx {
        self.head
    }

    /// Returns the last node's index, or `Idx::NONE` if empty.
    #[inline]
    pub const fn back(&self) -> Idx {
        self.tail
    }

    /// Returns `true` if the ring has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns `true` if the ring has exactly one node.
    #[inline]
    pub fn is_singular(&self) -> bool {
        self.head.is_some() && self.head == self.tail
    }

    /// Counts the nodes by walking the ring. O(n).
    pub fn len<T, S>(&self, storage: &S) -> usize
    where
        T: Linked<Idx>,
        S: Storage<T, Index = Idx>,
    {
        self.iter(storage).count()
    }

    /// Pushes a node to the back of the ring (immediately before the anchor).
    ///
    /// The node must already exist in storage and must not be linked into any
    /// ring; pushing an already-linked node corrupts both rings.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not valid in storage.
    #[inline]
    pub fn push_back<T, S>(&mut self, storage: &mut S, idx: Idx)
    where
        T: Linked<Idx>,
        S: Storage<T, Index = Idx>,
    {
        {
            let node = storage.get_mut(idx).expect("invalid index");
            node.set_prev(self.tail);
            node.set_next(Idx::NONE);
        }

        if self.tail.is_some() {
            storage.get_mut(self.tail).expect("invalid index").set_next(idx);
        } else {
            self.head = idx;
        }

        self.tail = idx;
    }

    /// Pushes a node to the front of the ring (immediately after the anchor).
    ///
    /// Same preconditions as [`Ring::push_back`].
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not valid in storage.
    #[inline]
    pub fn push_front<T, S>(&mut self, storage: &mut S, idx: Idx)
    where
        T: Linked<Idx>,
        S: Storage<T, Index = Idx>,
    {
        {
            let node = storage.get_mut(idx).expect("invalid index");
            node.set_next(self.head);
            node.set_prev(Idx::NONE);
        }

        if self.head.is_some() {
            storage.get_mut(self.head).expect("invalid index").set_prev(idx);
        } else {
            self.tail = idx;
        }

        self.head = idx;
    }

    /// Unlinks a node from the ring by connecting its neighbors to each other.
    ///
    /// The node stays in storage; its own links are reset to `Idx::NONE`, so a
    /// removed node is always in the unlinked state and safe to relink.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not valid in storage.
    #[inline]
    pub fn remove<T, S>(&mut self, storage: &mut S, idx: Idx)
    where
        T: Linked<Idx>,
        S: Storage<T, Index = Idx>,
    {
        let (prev, next) = {
            let node = storage.get(idx).expect("invalid index");
            (node.prev(), node.next())
        };

        if prev.is_some() {
            storage.get_mut(prev).expect("invalid index").set_next(next);
        } else {
            self.head = next;
        }

        if next.is_some() {
            storage.get_mut(next).expect("invalid index").set_prev(prev);
        } else {
            self.tail = prev;
        }

        let node = storage.get_mut(idx).expect("invalid index");
        node.set_prev(Idx::NONE);
        node.set_next(Idx::NONE);
    }

    /// Unlinks and returns the first node's index.
    ///
    /// Returns `Idx::NONE` if the ring is empty. The node stays in storage.
    #[inline]
    pub fn pop_front<T, S>(&mut self, storage: &mut S) -> Idx
    where
        T: Linked<Idx>,
        S: Storage<T, Index = Idx>,
    {
        if self.head.is_none() {
            return Idx::NONE;
        }

        let idx = self.head;
        self.remove(storage, idx);
        idx
    }

    /// Moves all nodes of `source` to the end of this ring.
    ///
    /// O(1): only the four boundary links are rewired, the moved nodes are
    /// never walked. `source` is left empty. No-op if `source` is empty.
    pub fn splice_back<T, S>(&mut self, storage: &mut S, source: &mut Ring<Idx>)
    where
        T: Linked<Idx>,
        S: Storage<T, Index = Idx>,
    {
        if source.is_empty() {
            return;
        }

        if self.tail.is_some() {
            storage
                .get_mut(self.tail)
                .expect("invalid index")
                .set_next(source.head);
            storage
                .get_mut(source.head)
                .expect("invalid index")
                .set_prev(self.tail);
        } else {
            // source's first node already has prev == NONE
            self.head = source.head;
        }

        self.tail = source.tail;
        *source = Ring::new();
    }

    /// Detaches the prefix of this ring, from the first node up to and
    /// including `through`, into a fresh ring. The remainder stays here.
    ///
    /// Passing `Idx::NONE` (the anchor) means "cut nothing": an empty ring is
    /// returned and this ring is untouched. Cutting an empty ring also
    /// returns an empty ring.
    ///
    /// O(1) pointer surgery; the cut point must already be known, this does
    /// not search for it.
    ///
    /// # Panics
    ///
    /// Panics if `through` is neither `Idx::NONE` nor a node of this ring.
    pub fn cut<T, S>(&mut self, storage: &mut S, through: Idx) -> Ring<Idx>
    where
        T: Linked<Idx>,
        S: Storage<T, Index = Idx>,
    {
        if self.is_empty() || through.is_none() {
            return Ring::new();
        }

        let detached = Ring {
            head: self.head,
            tail: through,
        };

        let rest = storage.get(through).expect("invalid index").next();
        storage
            .get_mut(through)
            .expect("invalid index")
            .set_next(Idx::NONE);

        self.head = rest;
        if rest.is_some() {
            storage.get_mut(rest).expect("invalid index").set_prev(Idx::NONE);
        } else {
            self.tail = Idx::NONE;
        }

        detached
    }

    /// Returns a lazy iterator over `(index, &record)` from first to last.
    ///
    /// Restartable: call again on the same ring for a fresh pass. The shared
    /// borrow on storage rules out structural mutation mid-walk.
    pub fn iter<'a, T, S>(&self, storage: &'a S) -> Iter<'a, T, S>
    where
        T: Linked<Idx>,
        S: Storage<T, Index = Idx>,
    {
        Iter {
            storage,
            next: self.head,
            _marker: PhantomData,
        }
    }
}

/// Iterator over a ring's nodes, anchor exclusive.
pub struct Iter<'a, T, S: Storage<T>> {
    storage: &'a S,
    next: S::Index,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T, S> Iterator for Iter<'a, T, S>
where
    T: Linked<S::Index> + 'a,
    S: Storage<T>,
{
    type Item = (S::Index, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_none() {
            return None;
        }

        let idx = self.next;
        let node = self.storage.get(idx).expect("invalid index");
        self.next = node.next();
        Some((idx, node))
    }
}
