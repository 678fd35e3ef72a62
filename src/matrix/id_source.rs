// Id minting for cells - an explicit capability passed to every call that creates cells

use crate::matrix::cell::CellId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of cell ids. Implementations must never hand out the same id twice.
pub trait IdSource {
    fn next_id(&self) -> CellId;
}

/// Monotonic counter: `next_id` returns the current value, then increments.
///
/// The increment is a single atomic fetch-and-add, so a counter shared between
/// threads still never repeats an id.
#[derive(Debug)]
pub struct CellIdCounter {
    next: AtomicU64,
}

impl CellIdCounter {
    pub const FIRST_ID: CellId = 1;

    pub fn new() -> Self {
        Self::starting_at(Self::FIRST_ID)
    }

    pub fn starting_at(first: CellId) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// The id the next call to `next_id` will return
    pub fn peek(&self) -> CellId {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for CellIdCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for CellIdCounter {
    fn next_id(&self) -> CellId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl<T: IdSource + ?Sized> IdSource for &T {
    fn next_id(&self) -> CellId {
        (**self).next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_counter_starts_at_one() {
        let ids = CellIdCounter::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.peek(), 3);
    }

    #[test]
    fn test_counter_is_unique_across_threads() {
        let ids = Arc::new(CellIdCounter::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                thread::spawn(move || (0..250).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "id {} minted twice", id);
            }
        }
        assert_eq!(seen.len(), 1000);
        assert_eq!(ids.peek(), 1001);
    }
}
