use super::state::Shared;
use std::{fmt, sync::Arc};

/// The receiving half of a broadcast channel.
///
/// Each `Consumer` owns a private queue in the channel's registry for as
/// long as the handle lives: the queue is created when the consumer is
/// minted and removed when the consumer is dropped, discarding anything
/// still unread. A consumer only ever observes values published after its
/// own registration.
///
/// Consumers are deliberately not `Clone`; a handle uniquely owns its
/// registry entry. Mint additional consumers from the channel instead.
pub struct Consumer<T> {
    shared: Arc<Shared<T>>,
    id: u64,
}

impl<T> Consumer<T> {
    pub(super) fn new(shared: Arc<Shared<T>>) -> Self {
        let id = shared.registry.lock().register();
        Self { shared, id }
    }

    /// Blocks until a value is available for this consumer, then returns
    /// the oldest one.
    ///
    /// Values from a single producer arrive in the order they were sent,
    /// and all consumers observe the same interleaving of sends overall.
    /// The returned [`Arc`] is the same allocation every other consumer
    /// receives for this value.
    ///
    /// There is no timeout and no disconnect signal: on a channel where no
    /// producer ever sends again, `recv` blocks forever. A wake-up that
    /// finds this consumer's queue still empty (a delivery to someone else,
    /// or a spurious wake) goes back to waiting rather than returning.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::thread;
    /// use ucast::Channel;
    ///
    /// let channel = Channel::new();
    /// let producer = channel.producer();
    /// let consumer = channel.consumer();
    ///
    /// thread::spawn(move || {
    ///     producer.send(String::from("hello"));
    /// });
    ///
    /// assert_eq!(*consumer.recv(), "hello");
    /// ```
    pub fn recv(&self) -> Arc<T> {
        let mut registry = self.shared.registry.lock();
        loop {
            if let Some(value) = registry.pop(self.id) {
                return value;
            }
            self.shared.ready.wait(&mut registry);
        }
    }
}

impl<T> Drop for Consumer<T> {
    fn drop(&mut self) {
        // Runs on every exit path of the owning scope, so the registry
        // never holds a queue for a dead consumer.
        self.shared.registry.lock().unregister(self.id);
    }
}

impl<T> fmt::Debug for Consumer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer").field("id", &self.id).finish()
    }
}
