use super::state::Shared;
use std::{fmt, sync::Arc};

/// The publishing half of a broadcast channel.
///
/// A `Producer` is a lightweight handle; any number of them may exist for
/// one channel and they are all equivalent. Cloning a producer is cheap and
/// produces another handle to the same channel, so producers can be spread
/// freely across threads.
///
/// # Examples
///
/// ```
/// use std::thread;
/// use ucast::Channel;
///
/// let channel = Channel::new();
/// let consumer = channel.consumer();
///
/// for i in 0..4 {
///     let producer = channel.producer();
///     thread::spawn(move || producer.send(i));
/// }
///
/// for _ in 0..4 {
///     assert!(*consumer.recv() < 4);
/// }
/// ```
pub struct Producer<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Producer<T> {
    pub(super) fn new(shared: Arc<Shared<T>>) -> Self {
        Self { shared }
    }

    /// Publishes a value to every consumer currently registered.
    ///
    /// The value is moved into a single shared allocation and a copy of
    /// that allocation is appended to each consumer's queue, so fanning out
    /// a large payload costs one allocation regardless of the number of
    /// consumers. Consumers registered after this call returns will not see
    /// the value.
    ///
    /// `send` never blocks on consumer readiness and cannot fail: with no
    /// consumers registered the value is simply dropped. Note that nothing
    /// bounds a consumer's queue; a consumer that stops calling
    /// [`recv`](super::Consumer::recv) while producers keep sending will
    /// accumulate values without limit.
    pub fn send(&self, value: T) {
        let value = Arc::new(value);

        let mut registry = self.shared.registry.lock();
        registry.fan_out(&value);
        drop(registry);

        // Every waiter re-checks its own queue, not just the ones this
        // send delivered to.
        self.shared.ready.notify_all();
    }
}

impl<T> Clone for Producer<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T> fmt::Debug for Producer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("Producer { .. }")
    }
}
