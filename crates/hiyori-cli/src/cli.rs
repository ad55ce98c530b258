use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "hiyori", version, about = "AniList airing calendar for the terminal")]
pub struct Cli {
    /// AniList username (overrides the configured one)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Log filter, e.g. "hiyori=debug"
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the next seven days of airing episodes (the default)
    Week {
        /// Render only the day at this index of the week window (0 = today)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=6))]
        day: Option<u8>,
    },
    /// Show only today's episodes
    Today,
    /// Show which AniList user the configured token belongs to
    Whoami,
}
