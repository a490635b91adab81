//! Redis Pub/Sub module.
//!
//! Publishes meeting events for distribution to live subscribers.

mod channels;
mod publisher;

pub use channels::PubSubChannel;
pub use publisher::{PubSubEvent, Publisher};
