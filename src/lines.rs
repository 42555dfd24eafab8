//! Line queue: a ring of owned text lines plus its arena, sorted in place.
//!
//! This is the convenience wrapper the surrounding file/CLI layer talks to.
//! Each pushed line becomes one arena record embedding its own links; sorting
//! relocates links only and never touches the strings.

use crate::{sort, Arena, Full, Index, Linked, Ring, Storage};

/// One stored line with its embedded ring links.
struct Line {
    text: String,
    prev: u32,
    next: u32,
}

impl Line {
    fn new(text: String) -> Self {
        Self {
            text,
            prev: u32::NONE,
            next: u32::NONE,
        }
    }
}

impl Linked<u32> for Line {
    fn next(&self) -> u32 {
        self.next
    }
    fn prev(&self) -> u32 {
        self.prev
    }
    fn set_next(&mut self, idx: u32) {
        self.next = idx;
    }
    fn set_prev(&mut self, idx: u32) {
        self.prev = idx;
    }
}

/// A queue of text lines that sorts itself lexicographically in place.
///
/// Owns an [`Arena`] of line records and the [`Ring`] ordering them; the
/// ring is the only source of truth for order. Lines are compared by byte
/// order over their full content, trailing newline included, exactly as
/// pushed. Dropping the queue frees every record and its string.
///
/// # Example
///
/// ```
/// use ringlist::LineQueue;
///
/// let mut queue = LineQueue::with_capacity(8);
/// queue.push_line("banana\n").unwrap();
/// queue.push_line("apple\n").unwrap();
/// queue.push_line("cherry\n").unwrap();
///
/// queue.sort();
///
/// let lines: Vec<&str> = queue.lines().collect();
/// assert_eq!(lines, ["apple\n", "banana\n", "cherry\n"]);
/// ```
pub struct LineQueue {
    storage: Arena<Line, u32>,
    ring: Ring<u32>,
}

impl LineQueue {
    /// Creates a queue holding at most `capacity` lines.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Arena::with_capacity(capacity),
            ring: Ring::new(),
        }
    }

    /// Returns the number of stored lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if no lines are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Copies `text` into an owned record and links it at the tail.
    ///
    /// # Errors
    ///
    /// Returns `Full` carrying the copied text back if the queue is at
    /// capacity. Nothing is linked on failure and nothing leaks.
    pub fn push_line(&mut self, text: &str) -> Result<(), Full<String>> {
        let idx = self
            .storage
            .try_insert(Line::new(text.to_owned()))
            .map_err(|full| Full(full.into_inner().text))?;
        self.ring.push_back(&mut self.storage, idx);
        Ok(())
    }

    /// Sorts the lines lexicographically, in place and stably.
    pub fn sort(&mut self) {
        sort::sort_by(&mut self.ring, &mut self.storage, |a, b| {
            a.text.cmp(&b.text)
        });
    }

    /// Iterates the lines in queue order. Restartable.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.ring
            .iter(&self.storage)
            .map(|(_, line)| line.text.as_str())
    }

    /// Returns `true` if the lines are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.lines()
            .zip(self.lines().skip(1))
            .all(|(a, b)| a <= b)
    }

    /// Removes all lines, freeing their records.
    pub fn clear(&mut self) {
        self.ring = Ring::new();
        self.storage.clear();
    }
}
