mod album;
mod artist;
mod ids;
mod playlist;
mod track;

pub use album::Album;
pub use artist::Artist;
pub use ids::{PlaylistId, TrackId};
pub use playlist::Playlist;
pub use track::Track;
