//! Analytics event queue

mod queue;

pub use queue::AnalyticsQueue;
