//! Arena storage for ring records.
//!
//! Records live in an arena with stable indices; rings coordinate indices and
//! never own the records. This replaces the classic "recover the record from
//! an embedded link via pointer offset" trick with a plain O(1) arena lookup.

use crate::Index;

/// Slab-like storage with stable indices.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable indices**: an index remains valid until explicitly removed
/// - **O(1)** insert, remove, get operations
/// - **Slot reuse**: removed slots can be reused by future inserts
///
/// # Implementations
///
/// - [`Arena<T>`] - fixed capacity, fallible insert (in this crate)
/// - `slab::Slab<T>` - growable, infallible insert (feature `slab`)
pub trait Storage<T> {
    /// Index type for this storage.
    type Index: Index;

    /// Error type for failed insertions.
    ///
    /// - `Full<T>` for fixed-capacity storage
    /// - `Infallible` for growable storage
    type Error;

    /// Inserts a value, returning its stable index.
    fn try_insert(&mut self, value: T) -> Result<Self::Index, Self::Error>;

    /// Removes and returns the value at `index`, if present.
    fn remove(&mut self, index: Self::Index) -> Option<T>;

    /// Returns a reference to the value at `index`, if present.
    fn get(&self, index: Self::Index) -> Option<&T>;

    /// Returns a mutable reference to the value at `index`, if present.
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T>;

    /// Returns the number of stored values.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Error returned when fixed-capacity storage is full.
///
/// Carries the rejected value back to the caller, so a failed insert never
/// leaks or partially links anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::fmt::Display for Full<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "storage is full")
    }
}

impl<T: core::fmt::Debug> std::error::Error for Full<T> {}

// =============================================================================
// Arena - fixed capacity, slot reuse via an intrusive free list
// =============================================================================

enum Slot<T> {
    Occupied(T),
    /// Vacant slot holding the next free slot's position (`FREE_END` ends the chain).
    Vacant(usize),
}

const FREE_END: usize = usize::MAX;

/// Fixed-capacity arena with stable indices.
///
/// Vacant slots form a free list, so insert and remove are O(1) and indices
/// of untouched records never move. Capacity is fixed at construction;
/// inserting into a full arena returns [`Full`] with the value.
///
/// # Example
///
/// ```
/// use ringlist::{Arena, Storage};
///
/// let mut arena: Arena<u64> = Arena::with_capacity(4);
/// let idx = arena.try_insert(42).unwrap();
/// assert_eq!(arena.get(idx), Some(&42));
/// assert_eq!(arena.remove(idx), Some(42));
/// ```
pub struct Arena<T, Idx: Index = u32> {
    slots: Vec<Slot<T>>,
    free_head: usize,
    len: usize,
    capacity: usize,
    _marker: std::marker::PhantomData<Idx>,
}

impl<T, Idx: Index> Arena<T, Idx> {
    /// Creates an arena holding at most `capacity` values.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds the index type's sentinel value.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity <= Idx::NONE.as_usize(),
            "capacity exceeds index type maximum"
        );

        Self {
            slots: Vec::with_capacity(capacity),
            free_head: FREE_END,
            len: 0,
            capacity,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if all slots are occupied.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Removes all values, making every slot available for reuse.
    ///
    /// Any ring that still references indices in this arena must be reset
    /// first; its handles become dangling otherwise.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = FREE_END;
        self.len = 0;
    }
}

impl<T, Idx: Index> Storage<T> for Arena<T, Idx> {
    type Index = Idx;
    type Error = Full<T>;

    #[inline]
    fn try_insert(&mut self, value: T) -> Result<Self::Index, Self::Error> {
        if self.free_head != FREE_END {
            let i = self.free_head;
            match self.slots[i] {
                Slot::Vacant(next_free) => self.free_head = next_free,
                Slot::Occupied(_) => unreachable!("free list points at occupied slot"),
            }
            self.slots[i] = Slot::Occupied(value);
            self.len += 1;
            return Ok(Idx::from_usize(i));
        }

        if self.slots.len() == self.capacity {
            return Err(Full(value));
        }

        let i = self.slots.len();
        self.slots.push(Slot::Occupied(value));
        self.len += 1;
        Ok(Idx::from_usize(i))
    }

    #[inline]
    fn remove(&mut self, index: Self::Index) -> Option<T> {
        let i = index.as_usize();
        match self.slots.get(i) {
            Some(Slot::Occupied(_)) => {}
            _ => return None,
        }

        let slot = std::mem::replace(&mut self.slots[i], Slot::Vacant(self.free_head));
        self.free_head = i;
        self.len -= 1;

        match slot {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant(_) => unreachable!(),
        }
    }

    #[inline]
    fn get(&self, index: Self::Index) -> Option<&T> {
        match self.slots.get(index.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T> {
        match self.slots.get_mut(index.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Index = usize;
    type Error = core::convert::Infallible;

    #[inline]
    fn try_insert(&mut self, value: T) -> Result<Self::Index, Self::Error> {
        Ok(self.insert(value))
    }

    #[inline]
    fn remove(&mut self, index: Self::Index) -> Option<T> {
        self.try_remove(index)
    }

    #[inline]
    fn get(&self, index: Self::Index) -> Option<&T> {
        self.get(index)
    }

    #[inline]
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T> {
        self.get_mut(index)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}
