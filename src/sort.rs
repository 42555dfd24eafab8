//! In-place merge sort over a [`Ring`].
//!
//! Recursive divide-and-conquer built entirely on ring surgery: find the
//! midpoint with a slow/fast walk, cut the ring in two, sort each half, then
//! merge by relocating one node at a time. Payloads are never copied, moved
//! or reallocated; the only thing that changes is link fields.
//!
//! O(n log n) time, O(log n) recursion stack, no heap allocation. Ties take
//! the left node, so the sort is stable.

use core::cmp::Ordering;
use core::mem;

use crate::{Index, Linked, Ring, Storage};

/// Finds the split point of `ring` via slow/fast traversal.
///
/// The fast cursor advances two nodes per step of the slow cursor and the
/// walk stops when the fast cursor's next (or next-of-next) is the anchor.
/// For n nodes the returned node is the end of a ⌈n/2⌉-long prefix, so
/// cutting through it splits the ring ⌈n/2⌉ / ⌊n/2⌋.
///
/// Returns `Idx::NONE` for an empty ring.
pub fn midpoint<T, S>(ring: &Ring<S::Index>, storage: &S) -> S::Index
where
    T: Linked<S::Index>,
    S: Storage<T>,
{
    let mut slow = ring.front();
    let mut fast = ring.front();

    while fast.is_some() {
        let step = storage.get(fast).expect("invalid index").next();
        if step.is_none() {
            break;
        }
        let step2 = storage.get(step).expect("invalid index").next();
        if step2.is_none() {
            break;
        }
        fast = step2;
        slow = storage.get(slow).expect("invalid index").next();
    }

    slow
}

/// Merges two sorted rings into one, consuming both.
///
/// If either ring is empty the other is spliced over wholesale in O(1).
/// Otherwise the smaller head is unlinked and appended to the output until
/// one side runs dry, then the survivor is spliced on. `Ordering::Equal`
/// takes from `left`, which is what makes the sort stable.
pub fn merge<T, S, F>(
    mut left: Ring<S::Index>,
    mut right: Ring<S::Index>,
    storage: &mut S,
    mut compare: F,
) -> Ring<S::Index>
where
    T: Linked<S::Index>,
    S: Storage<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Ring::new();

    if left.is_empty() {
        merged.splice_back(storage, &mut right);
        return merged;
    }
    if right.is_empty() {
        merged.splice_back(storage, &mut left);
        return merged;
    }

    while !left.is_empty() && !right.is_empty() {
        let l = left.front();
        let r = right.front();
        let take_left = {
            let a = storage.get(l).expect("invalid index");
            let b = storage.get(r).expect("invalid index");
            compare(a, b) != Ordering::Greater
        };

        if take_left {
            left.remove(storage, l);
            merged.push_back(storage, l);
        } else {
            right.remove(storage, r);
            merged.push_back(storage, r);
        }
    }

    let mut rest = if left.is_empty() { right } else { left };
    merged.splice_back(storage, &mut rest);
    merged
}

/// Sorts `ring` in place under the injected ordering.
///
/// Stable: records that compare `Equal` keep their relative order.
///
/// # Example
///
/// ```
/// use ringlist::{sort, Arena, Index, Linked, Ring, Storage};
///
/// #[derive(Debug)]
/// struct Item {
///     rank: u64,
///     prev: u32,
///     next: u32,
/// }
///
/// impl Linked<u32> for Item {
///     fn next(&self) -> u32 { self.next }
///     fn prev(&self) -> u32 { self.prev }
///     fn set_next(&mut self, idx: u32) { self.next = idx; }
///     fn set_prev(&mut self, idx: u32) { self.prev = idx; }
/// }
///
/// let mut arena: Arena<Item> = Arena::with_capacity(8);
/// let mut ring: Ring<u32> = Ring::new();
/// for rank in [3u64, 1, 2] {
///     let idx = arena
///         .try_insert(Item { rank, prev: u32::NONE, next: u32::NONE })
///         .unwrap();
///     ring.push_back(&mut arena, idx);
/// }
///
/// sort::sort_by(&mut ring, &mut arena, |a, b| a.rank.cmp(&b.rank));
///
/// let ranks: Vec<u64> = ring.iter(&arena).map(|(_, i)| i.rank).collect();
/// assert_eq!(ranks, [1, 2, 3]);
/// ```
pub fn sort_by<T, S, F>(ring: &mut Ring<S::Index>, storage: &mut S, mut compare: F)
where
    T: Linked<S::Index>,
    S: Storage<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_inner(ring, storage, &mut compare);
}

fn sort_inner<T, S, F>(ring: &mut Ring<S::Index>, storage: &mut S, compare: &mut F)
where
    T: Linked<S::Index>,
    S: Storage<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    // 0 or 1 nodes are already sorted
    if ring.is_empty() || ring.is_singular() {
        return;
    }

    let mid = midpoint(ring, storage);
    let mut left = ring.cut(storage, mid);

    sort_inner(&mut left, storage, compare);
    sort_inner(ring, storage, compare);

    let right = mem::take(ring);
    *ring = merge(left, right, storage, &mut *compare);
}
