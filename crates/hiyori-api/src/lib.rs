//! Service clients for the hiyori airing calendar.

pub mod anilist;

pub use anilist::{AniListClient, AniListError};
