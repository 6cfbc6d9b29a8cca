//! Bounded most-recently-used lists of queried dates.

use parking_lot::Mutex;

/// Most-recent-first list of date strings with a fixed capacity.
///
/// Recording an entry removes any earlier copy, puts it at the front and
/// drops whatever falls past the capacity. Lives for the process; nothing
/// is persisted.
#[derive(Debug)]
pub struct History {
    capacity: usize,
    entries: Mutex<Vec<String>>,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn record(&self, entry: &str) {
        let mut entries = self.entries.lock();
        entries.retain(|e| e != entry);
        entries.insert(0, entry.to_owned());
        entries.truncate(self.capacity);
    }

    /// Copy of the entries, most recent first.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
