//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in retro-core.

mod error;
mod meeting;
mod member;
mod prompt;
mod response;
mod user;

pub use meeting::PgMeetingRepository;
pub use member::PgMeetingMemberRepository;
pub use prompt::PgPromptRepository;
pub use response::PgResponseStore;
pub use user::PgUserRepository;
