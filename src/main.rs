//! `conference-data`: inspect a conference schedule from the command line.
//!
//! ```sh
//! # Sessions of the first day mentioning "ionic", hiding the Design track
//! conference-data --data data/data.json timeline --day 0 --query ionic --exclude Design
//!
//! # Only favorites
//! conference-data --favorite "Breakfast" timeline --segment favorites
//!
//! conference-data speakers
//! conference-data tracks --json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use conference_data::config::Config;
use conference_data::{Day, Segment, TimelineFilter};

#[derive(Parser)]
#[command(name = "conference-data", version, about = "Conference schedule browser")]
struct Cli {
    /// Schedule document: a file path or an http(s) URL
    /// (defaults to $CONFERENCE_DATA, then data/data.json)
    #[arg(long, global = true)]
    data: Option<String>,

    /// Mark a session as favorite by name (repeatable)
    #[arg(long = "favorite", global = true)]
    favorites: Vec<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one day of the schedule with filters applied
    Timeline {
        /// Zero-based day index
        #[arg(short, long, default_value_t = 0)]
        day: usize,
        /// Words to look for in session names
        #[arg(short, long, default_value = "")]
        query: String,
        /// Track to hide (repeatable)
        #[arg(short, long)]
        exclude: Vec<String>,
        /// "all" or "favorites"
        #[arg(short, long, default_value_t = Segment::All)]
        segment: Segment,
    },
    /// List speakers ordered by last name
    Speakers,
    /// List all tracks
    Tracks,
    /// List map pins
    Map,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.data, cli.favorites);
    log::info!("Using schedule at {}", config.source);
    let (service, _favorites) = config.into_service();

    match cli.command {
        Commands::Timeline {
            day,
            query,
            exclude,
            segment,
        } => {
            let filter = exclude
                .into_iter()
                .fold(TimelineFilter::new().with_query(query), |f, track| {
                    f.exclude_track(track)
                })
                .with_segment(segment);
            let day = service
                .timeline(day, &filter)
                .await
                .context("building timeline")?;
            if cli.json {
                print_json(&day)?;
            } else {
                print_day(&day);
            }
        }
        Commands::Speakers => {
            let speakers = service.speakers().await.context("loading speakers")?;
            if cli.json {
                print_json(&speakers)?;
            } else {
                for speaker in &speakers {
                    match &speaker.twitter {
                        Some(handle) => println!("{}  ({handle})", speaker.name),
                        None => println!("{}", speaker.name),
                    }
                }
            }
        }
        Commands::Tracks => {
            let tracks = service.tracks().await.context("loading tracks")?;
            if cli.json {
                print_json(&tracks)?;
            } else {
                for track in &tracks {
                    println!("{track}");
                }
            }
        }
        Commands::Map => {
            let pins = service.map().await.context("loading map")?;
            if cli.json {
                print_json(&pins)?;
            } else {
                for pin in &pins {
                    let marker = if pin.centre { " *" } else { "" };
                    println!("{:>10.6} {:>11.6}  {}{marker}", pin.lat, pin.long, pin.name);
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{text}");
    Ok(())
}

fn print_day(day: &Day) {
    println!("{}  ({} sessions shown)", day.date, day.shown_sessions);
    for group in day.groups.iter().filter(|g| !g.hide) {
        println!("  {}", group.time);
        for session in group.sessions.iter().filter(|s| !s.hide) {
            let location = session.location.as_deref().unwrap_or("");
            println!("    {}  [{}]  {location}", session.name, session.tracks.join(", "));
        }
    }
}
