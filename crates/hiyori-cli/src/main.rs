mod cli;
mod view;

use clap::Parser;
use chrono::Local;
use tracing_subscriber::EnvFilter;

use hiyori_api::AniListClient;
use hiyori_core::config::AppConfig;
use hiyori_core::schedule::group_shows_by_airing_date;
use hiyori_core::week;

use cli::{Cli, Command};

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    let filter = args.log.clone().unwrap_or_else(|| "hiyori=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    if let Err(e) = run(args).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    tracing::debug!(path = %AppConfig::config_path().display(), "config loaded");
    let client = AniListClient::new(config.anilist.access_token.clone());
    let countdowns = config.display.time_until_labels;

    let command = args.command.unwrap_or(Command::Week { day: None });
    match command {
        Command::Week { day } => {
            let user = resolve_user(args.user, &config)?;
            let entries = client.get_user_list(&user).await?;
            let now = Local::now();
            let buckets = group_shows_by_airing_date(Some(&entries), &now);

            match day {
                None => print!("{}", view::render_week(&buckets, &now, countdowns)),
                Some(i) => {
                    let i = usize::from(i);
                    let dates = week::next_week_dates(&now);
                    let names = week::ordered_weekdays(&now);
                    print!(
                        "{}",
                        view::render_day(dates[i], &buckets, &now, names[i], i == 0, countdowns)
                    );
                }
            }
        }
        Command::Today => {
            let user = resolve_user(args.user, &config)?;
            let entries = client.get_user_list(&user).await?;
            let now = Local::now();
            let buckets = group_shows_by_airing_date(Some(&entries), &now);

            let today = now.date_naive();
            let weekday = week::ordered_weekdays(&now)[0];
            print!(
                "{}",
                view::render_day(today, &buckets, &now, weekday, true, countdowns)
            );
        }
        Command::Whoami => {
            let viewer = client.get_viewer().await?;
            println!("{} (id {})", viewer.name, viewer.id);
        }
    }
    Ok(())
}

fn resolve_user(
    flag: Option<String>,
    config: &AppConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    flag.or_else(|| config.anilist.user_name.clone()).ok_or_else(|| {
        format!(
            "no AniList username; pass --user or set anilist.user_name in {}",
            AppConfig::config_path().display()
        )
        .into()
    })
}
