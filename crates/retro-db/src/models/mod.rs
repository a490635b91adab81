//! Database models - SQLx-compatible structs for PostgreSQL tables

mod meeting;
mod member;
mod prompt;
mod response;
mod user;

pub use meeting::MeetingModel;
pub use member::MeetingMemberModel;
pub use prompt::ReflectPromptModel;
pub use response::TeamPromptResponseModel;
pub use user::UserModel;
