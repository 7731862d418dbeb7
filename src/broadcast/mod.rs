//! Multi-producer, multi-consumer broadcast communication primitives.
//!
//! This module provides fan-out message passing over a channel, concretely
//! defined among three types:
//!
//! * [`Channel`]
//! * [`Producer`]
//! * [`Consumer`]
//!
//! A [`Channel`] represents one broadcast topic and mints any number of
//! [`Producer`] and [`Consumer`] handles. Unlike an mpsc channel, where
//! consumers compete and each value is taken by exactly one of them, a value
//! sent here is delivered to **every** consumer registered at the time of
//! the send, each through its own private FIFO queue.
//!
//! The delivery rules are:
//!
//! 1. A consumer only observes values sent after it was minted; there is no
//!    replay of earlier traffic for late joiners.
//! 2. Values from one producer arrive at every consumer in the order that
//!    producer sent them. Sends are serialized by one internal lock, so all
//!    consumers also agree on a single interleaving of different producers'
//!    sends, but no particular interleaving is promised.
//! 3. Dropping a consumer discards whatever it had not yet received and has
//!    no effect on producers or on other consumers.
//!
//! Sends never block and never fail; the channel is unbounded. That keeps
//! producers decoupled from consumer progress at the price of memory: a
//! consumer that stops receiving while producers keep sending grows its
//! queue without limit. [`Consumer::recv`] is the only blocking operation
//! and blocks until a value arrives, with no timeout or cancellation.
//!
//! # Examples
//!
//! Simple usage:
//!
//! ```
//! use std::thread;
//! use ucast::Channel;
//!
//! let channel = Channel::new();
//! let producer = channel.producer();
//! let consumer = channel.consumer();
//!
//! thread::spawn(move || {
//!     producer.send(10);
//! });
//! assert_eq!(*consumer.recv(), 10);
//! ```
//!
//! Fanning out to multiple consumers:
//!
//! ```
//! use std::thread;
//! use ucast::Channel;
//!
//! let channel = Channel::new();
//! let producer = channel.producer();
//!
//! let consumers = (0..3)
//!     .map(|_| {
//!         let consumer = channel.consumer();
//!         thread::spawn(move || {
//!             // Every consumer sees the full stream, in order.
//!             assert_eq!(*consumer.recv(), "first");
//!             assert_eq!(*consumer.recv(), "second");
//!         })
//!     })
//!     .collect::<Vec<_>>();
//!
//! producer.send("first");
//! producer.send("second");
//!
//! for consumer in consumers {
//!     consumer.join().unwrap();
//! }
//! ```

mod consumer;
mod producer;
mod state;

pub use self::{consumer::Consumer, producer::Producer};

use self::state::Shared;
use std::{fmt, sync::Arc};

/// A broadcast topic: the factory that owns the shared consumer registry
/// and mints [`Producer`] and [`Consumer`] handles for it.
///
/// All handles minted from one channel (and clones of the channel itself)
/// share a single reference-counted registry; it is freed when the last
/// handle of any kind is dropped. The channel value does not itself take
/// part in message flow, so it can be dropped as soon as the handles have
/// been handed out.
pub struct Channel<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Channel<T> {
    /// Creates a new, empty broadcast channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use ucast::Channel;
    ///
    /// let channel: Channel<String> = Channel::new();
    /// ```
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared::new()),
        }
    }

    /// Mints a new producer handle for this channel.
    ///
    /// Producers are interchangeable; this may be called any number of
    /// times, and producers can also be cloned directly.
    pub fn producer(&self) -> Producer<T> {
        Producer::new(self.shared.clone())
    }

    /// Mints a new consumer handle for this channel.
    ///
    /// The consumer is registered before this returns: it will observe
    /// every value sent after this call, and none sent before it. Its
    /// registration is atomic with respect to concurrent sends, so a value
    /// is never partially delivered to a consumer being minted.
    pub fn consumer(&self) -> Consumer<T> {
        Consumer::new(self.shared.clone())
    }
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("Channel { .. }")
    }
}
