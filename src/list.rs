// src/list.rs

//! The shared, mutex-guarded list primitive backing the store's List type.

use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::VecDeque;
use tracing::trace;

/// A thread-safe, order-preserving list of binary values.
///
/// Every operation serializes through a single mutex, so each call is
/// linearizable with respect to all other calls on the same instance.
/// Lookups and range extractions hold the lock for their full duration;
/// callers must not assume bounded latency on large lists.
///
/// The container never reports an error: popping an empty list and
/// out-of-range lookups are defined outcomes (`None` or an empty vector),
/// and range validation is the caller's responsibility.
#[derive(Debug, Default)]
pub struct SharedList {
    entries: Mutex<VecDeque<Bytes>>,
}

impl SharedList {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts each value, in argument order, at the front of the list.
    ///
    /// Each successive value lands ahead of the one before it, so the final
    /// front-to-back order is the reverse of the argument order. Returns the
    /// resulting length. An empty slice writes nothing and returns the
    /// current length.
    pub fn push_front(&self, values: &[Bytes]) -> usize {
        let mut entries = self.entries.lock();
        for value in values {
            entries.push_front(value.clone());
        }
        if !values.is_empty() {
            trace!(
                "Pushed {} values at the front, length is now {}.",
                values.len(),
                entries.len()
            );
        }
        entries.len()
    }

    /// Inserts each value, in argument order, at the back of the list; each
    /// subsequent value becomes the new back. Returns the resulting length.
    /// An empty slice writes nothing and returns the current length.
    pub fn push_back(&self, values: &[Bytes]) -> usize {
        let mut entries = self.entries.lock();
        for value in values {
            entries.push_back(value.clone());
        }
        if !values.is_empty() {
            trace!(
                "Pushed {} values at the back, length is now {}.",
                values.len(),
                entries.len()
            );
        }
        entries.len()
    }

    /// Removes and returns the front element, or `None` if the list is empty.
    pub fn pop_front(&self) -> Option<Bytes> {
        let mut entries = self.entries.lock();
        let popped = entries.pop_front();
        if popped.is_some() {
            trace!("Popped the front element, length is now {}.", entries.len());
        }
        popped
    }

    /// Removes and returns the back element, or `None` if the list is empty.
    pub fn pop_back(&self) -> Option<Bytes> {
        let mut entries = self.entries.lock();
        let popped = entries.pop_back();
        if popped.is_some() {
            trace!("Popped the back element, length is now {}.", entries.len());
        }
        popped
    }

    /// Returns the current number of elements. The count may be stale as
    /// soon as it is returned if other threads are mutating the list.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Zero-based, front-to-back positional lookup.
    ///
    /// Returns `None` for any index outside `0..len`, negative indices
    /// included: from-the-end translation belongs to the calling layer, not
    /// to this container.
    pub fn get(&self, index: i64) -> Option<Bytes> {
        let entries = self.entries.lock();
        if index < 0 || index >= entries.len() as i64 {
            return None;
        }
        entries.get(index as usize).cloned()
    }

    /// Returns the closed interval `[start, stop]` of elements by position,
    /// front to back, both bounds inclusive.
    ///
    /// A `start` past the end or a `stop` below `start` yields an empty
    /// vector; a `stop` past the end is clamped to the last element.
    /// Negative bounds are not translated from the end: positions below
    /// zero match no element, so a negative `start` behaves as zero.
    pub fn range(&self, start: i64, stop: i64) -> Vec<Bytes> {
        let entries = self.entries.lock();
        let len = entries.len() as i64;
        if len == 0 || start >= len || stop < start || stop < 0 {
            return Vec::new();
        }
        let first = start.max(0) as usize;
        let last = stop.min(len - 1) as usize;
        entries
            .iter()
            .skip(first)
            .take(last - first + 1)
            .cloned()
            .collect()
    }

    /// Total payload bytes currently held, for the owner's memory accounting.
    pub fn memory_usage(&self) -> usize {
        self.entries.lock().iter().map(|value| value.len()).sum()
    }

    /// Copies the full contents, front to back, in one atomic step.
    ///
    /// Persistence and replication collaborators use this to re-emit the
    /// list without holding the lock across their own I/O.
    pub fn snapshot(&self) -> Vec<Bytes> {
        self.entries.lock().iter().cloned().collect()
    }
}
