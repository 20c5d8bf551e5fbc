pub mod track;

pub use track::{StoredTrack, Track};
