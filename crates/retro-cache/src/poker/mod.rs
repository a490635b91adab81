//! Poker meeting state kept in Redis

mod hover;

pub use hover::{hover_key, PokerHoverStore, POKER_HOVER_PREFIX};
