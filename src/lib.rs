#![warn(
    rust_2018_idioms,
    unreachable_pub,
    // missing_docs
    // missing_debug_implementations
)]

mod broadcast;

pub use self::broadcast::{Channel, Consumer, Producer};
