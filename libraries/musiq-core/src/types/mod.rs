mod history;
mod playlist;
mod track;
mod user;

pub use history::HistoryEntry;
pub use playlist::Playlist;
pub use track::{format_duration, Track};
pub use user::User;
