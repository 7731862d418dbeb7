use parking_lot::{Condvar, Mutex};
use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};

/// State shared by every handle minted from one [`Channel`].
///
/// All mutable state lives behind the single `registry` mutex; `ready` is
/// the condition paired with it, broadcast-notified after every send. Each
/// blocked consumer re-checks only its own queue on wake-up and goes back
/// to waiting if the notification was for someone else's delivery.
///
/// [`Channel`]: super::Channel
pub(super) struct Shared<T> {
    pub(super) registry: Mutex<Registry<T>>,
    pub(super) ready: Condvar,
}

impl<T> Shared<T> {
    pub(super) fn new() -> Self {
        Self {
            registry: Mutex::new(Registry {
                queues: HashMap::new(),
                next_id: 0,
            }),
            ready: Condvar::new(),
        }
    }
}

/// The consumer registry: one pending-value queue per live consumer plus
/// the id counter that names them.
///
/// Ids are handed out strictly increasing and never recycled, so an id held
/// by a dropped consumer can never alias a consumer registered later.
pub(super) struct Registry<T> {
    /// Exactly one entry per live consumer. Queue order is that consumer's
    /// delivery order.
    queues: HashMap<u64, VecDeque<Arc<T>>>,
    next_id: u64,
}

impl<T> Registry<T> {
    /// Allocates a fresh consumer id with an empty queue.
    ///
    /// Callers hold the registry lock, so no send can observe the entry
    /// half-initialized: it is either absent or present and empty.
    pub(super) fn register(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let displaced = self.queues.insert(id, VecDeque::new());
        debug_assert!(displaced.is_none());
        id
    }

    /// Removes a consumer's queue, discarding any values still unread.
    pub(super) fn unregister(&mut self, id: u64) {
        let removed = self.queues.remove(&id);
        debug_assert!(removed.is_some());
    }

    /// Appends one shared copy of `value` to every registered queue.
    ///
    /// With zero consumers this fans out into nothing and the value is
    /// dropped once the caller lets go of its `Arc`.
    pub(super) fn fan_out(&mut self, value: &Arc<T>) {
        for queue in self.queues.values_mut() {
            queue.push_back(value.clone());
        }
    }

    /// Pops the oldest pending value for `id`, if there is one.
    pub(super) fn pop(&mut self, id: u64) -> Option<Arc<T>> {
        self.queues.get_mut(&id).and_then(VecDeque::pop_front)
    }

    #[cfg(test)]
    fn pending(&self, id: u64) -> usize {
        self.queues.get(&id).map_or(0, VecDeque::len)
    }
}
