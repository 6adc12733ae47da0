//! Keyed snapshot store for run state.

use parking_lot::Mutex;
use std::collections::BTreeMap;

/// A keyed snapshot store.
///
/// The runner commits the state after every completed node; a transport
/// resuming a run reads the last committed snapshot under the same
/// thread id. Access is per-key only; no ordering across keys.
pub trait Checkpointer<S>: Send + Sync {
    /// Store a snapshot under the given thread id.
    fn put(&self, thread_id: &str, snapshot: S);

    /// Load the last snapshot stored under the given thread id.
    fn get(&self, thread_id: &str) -> Option<S>;
}

/// In-memory checkpointer. Snapshots live for the lifetime of the
/// process.
#[derive(Default)]
pub struct MemorySaver<S> {
    snapshots: Mutex<BTreeMap<String, S>>,
}

impl<S> MemorySaver<S> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            snapshots: Mutex::new(BTreeMap::new()),
        }
    }
}

impl<S: Clone + Send> Checkpointer<S> for MemorySaver<S> {
    fn put(&self, thread_id: &str, snapshot: S) {
        self.snapshots.lock().insert(thread_id.into(), snapshot);
    }

    fn get(&self, thread_id: &str) -> Option<S> {
        self.snapshots.lock().get(thread_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get() {
        let saver = MemorySaver::new();
        saver.put("t1", 41u32);
        saver.put("t1", 42u32);
        assert_eq!(saver.get("t1"), Some(42));
    }

    #[test]
    fn keys_are_isolated() {
        let saver = MemorySaver::new();
        saver.put("t1", 1u32);
        assert_eq!(saver.get("t2"), None);
    }
}
