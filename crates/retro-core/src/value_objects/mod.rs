//! Value objects - immutable types that represent domain concepts

mod emoji;
mod ids;
mod reactji_group;

pub use emoji::{is_valid_reactji, DEFAULT_MAX_REACTJIS, EMOJI_IDS};
pub use ids::{IdParseError, MeetingMemberId, ResponseId};
pub use reactji_group::{group_reactjis, ReactjiGroup};
