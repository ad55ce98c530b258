mod entry;

pub use entry::{CoverImage, ListEntry, Media, MediaTitle, NextAiringEpisode, WatchStatus};
