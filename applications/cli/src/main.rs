/// Musiq - command-line music library and player
use clap::{Parser, Subcommand};
use musiq_core::{format_duration, Playlist, Track};
use musiq_cli::{session, App, CliConfig, CliError};
use musiq_playback::{PlaybackEvent, RepeatMode, SurfaceBinding};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "musiq")]
#[command(about = "Musiq music library and player", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./musiq.toml if present)
    #[arg(short, long, global = true, env = "MUSIQ_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalogue tracks
    Tracks {
        /// Case-insensitive search over title, artist, album and genre
        #[arg(short, long)]
        query: Option<String>,
        #[arg(short, long)]
        genre: Option<String>,
        #[arg(short, long)]
        artist: Option<String>,
    },
    /// Most played tracks
    Trending {
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// List genres
    Genres,
    /// Play a track in a simulated session
    Play {
        /// Track to start with
        track_id: String,
        /// Play from this playlist instead of the whole catalogue
        #[arg(short, long)]
        playlist: Option<String>,
        /// Skip forward this many times before listening
        #[arg(long, default_value_t = 0)]
        skip: usize,
        /// Turn shuffle on
        #[arg(long)]
        shuffle: bool,
        /// Repeat mode (off, all, one)
        #[arg(long)]
        repeat: Option<RepeatMode>,
        /// Simulated seconds to listen for
        #[arg(short, long, default_value_t = 600.0)]
        listen: f64,
    },
    /// Show listening history
    History {
        /// Erase the history instead
        #[arg(long)]
        clear: bool,
        /// Only distinct tracks among the last N plays
        #[arg(long)]
        recent: Option<usize>,
    },
    /// Like or unlike a track
    Like { track_id: String },
    /// Mark or unmark a track as downloaded
    Download { track_id: String },
    /// Manage playlists
    #[command(subcommand)]
    Playlist(PlaylistCommands),
    /// Sign in locally
    Login { name: String, email: String },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
}

#[derive(Subcommand)]
enum PlaylistCommands {
    /// Create an empty playlist
    Create {
        name: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Add a track to a playlist
    Add { playlist_id: String, track_id: String },
    /// Remove a track from a playlist
    Remove { playlist_id: String, track_id: String },
    /// Delete a playlist
    Delete { playlist_id: String },
    /// List playlists
    List,
    /// Show the tracks of a playlist
    Show { playlist_id: String },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "musiq=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = CliConfig::load_from(cli.config.as_deref())?;
    config.validate()?;
    let mut app = App::open(config)?;

    match cli.command {
        Commands::Tracks {
            query,
            genre,
            artist,
        } => {
            let tracks = app.filter_tracks(query.as_deref(), genre.as_deref(), artist.as_deref());
            print_tracks(&app, &tracks);
        }
        Commands::Trending { limit } => {
            let tracks = app.library.trending(limit);
            for (rank, track) in tracks.iter().enumerate() {
                println!("{:>2}. {}  ({} plays)", rank + 1, describe(&app, track), track.play_count);
            }
        }
        Commands::Genres => {
            for genre in app.library.genres() {
                println!("{} ({})", genre, app.library.tracks_by_genre(genre).len());
            }
        }
        Commands::Play {
            track_id,
            playlist,
            skip,
            shuffle,
            repeat,
            listen,
        } => {
            play(&app, &track_id, playlist.as_deref(), skip, shuffle, repeat, listen)?;
        }
        Commands::History { clear, recent } => history(&app, clear, recent)?,
        Commands::Like { track_id } => {
            ensure_track(&app, &track_id)?;
            let liked = app.library.toggle_like(&track_id)?;
            println!("{} {}", if liked { "Liked" } else { "Unliked" }, track_id);
        }
        Commands::Download { track_id } => {
            ensure_track(&app, &track_id)?;
            let downloaded = app.library.toggle_download(&track_id)?;
            println!(
                "{} {}",
                if downloaded { "Downloaded" } else { "Removed download of" },
                track_id
            );
        }
        Commands::Playlist(command) => playlist(&mut app, command)?,
        Commands::Login { name, email } => {
            let user = app.library.login(&name, &email)?;
            println!("Signed in as {} <{}> ({})", user.name, user.email, user.id);
        }
        Commands::Logout => {
            app.library.logout()?;
            println!("Signed out");
        }
        Commands::Whoami => match app.library.current_user() {
            Some(user) => println!("{} <{}> ({})", user.name, user.email, user.id),
            None => println!("Not signed in"),
        },
    }

    Ok(())
}

fn play(
    app: &App,
    track_id: &str,
    playlist: Option<&str>,
    skip: usize,
    shuffle: bool,
    repeat: Option<RepeatMode>,
    listen: f64,
) -> anyhow::Result<()> {
    let (track, queue) = app.play_queue(track_id, playlist)?;

    let mut controller = app.controller();
    if shuffle && !controller.shuffle() {
        controller.toggle_shuffle();
    }
    if let Some(repeat) = repeat {
        while controller.repeat() != repeat {
            controller.cycle_repeat();
        }
    }

    controller.play(track, Some(queue.clone()));
    for _ in 0..skip {
        controller.next();
    }

    println!(
        "Queue: {} tracks, shuffle {}, repeat {}",
        controller.queue().len(),
        if controller.shuffle() { "on" } else { "off" },
        controller.repeat()
    );

    let mut binding = SurfaceBinding::new(session::surface_for(&queue));
    let report = session::run(
        &mut controller,
        &mut binding,
        listen,
        session::DEFAULT_STEP_SECS,
        |_, event| match event {
            PlaybackEvent::TrackChanged { track_id, .. } => {
                if let Some(track) = queue.iter().find(|t| &t.id == track_id) {
                    println!(
                        "▶ {} - {} [{}]",
                        track.title,
                        track.artist,
                        format_duration(track.duration)
                    );
                }
            }
            PlaybackEvent::StateChanged { is_playing: false } => println!("■ stopped"),
            _ => {}
        },
    );

    println!(
        "Listened {} across {} track(s){}",
        format_duration(report.listened),
        report.started.len(),
        if report.finished { ", queue finished" } else { "" }
    );
    if let Some(track) = controller.current_track() {
        println!(
            "Now at {} - {} ({} / {}, {:.0}%) volume {}%",
            track.title,
            track.artist,
            format_duration(controller.elapsed()),
            format_duration(controller.duration()),
            controller.state().progress() * 100.0,
            controller.volume().percent()
        );
    }
    Ok(())
}

fn history(app: &App, clear: bool, recent: Option<usize>) -> anyhow::Result<()> {
    let recorder = app.history();
    if clear {
        recorder.clear()?;
        println!("History cleared");
        return Ok(());
    }

    let entries = recorder.read();
    if entries.is_empty() {
        println!("No listening history yet");
        return Ok(());
    }

    match recent {
        Some(window) => {
            let tracks = app.library.recently_played(&entries, window);
            print_tracks(app, &tracks);
        }
        None => {
            for (entry, track) in app.library.history_tracks(&entries) {
                println!(
                    "{}  {}",
                    entry.played_at.format("%Y-%m-%d %H:%M"),
                    describe(app, track)
                );
            }
        }
    }
    Ok(())
}

fn playlist(app: &mut App, command: PlaylistCommands) -> anyhow::Result<()> {
    match command {
        PlaylistCommands::Create { name, description } => {
            let mut playlist = Playlist::new(name);
            playlist.description = description.unwrap_or_default();
            let id = app.library.create_playlist(playlist)?;
            println!("Created playlist {}", id);
        }
        PlaylistCommands::Add {
            playlist_id,
            track_id,
        } => {
            ensure_track(app, &track_id)?;
            if app.library.add_track_to_playlist(&playlist_id, &track_id)? {
                println!("Added {} to {}", track_id, playlist_id);
            } else {
                println!("{} is already in {}", track_id, playlist_id);
            }
        }
        PlaylistCommands::Remove {
            playlist_id,
            track_id,
        } => {
            app.library
                .remove_track_from_playlist(&playlist_id, &track_id)?;
            println!("Removed {} from {}", track_id, playlist_id);
        }
        PlaylistCommands::Delete { playlist_id } => {
            if !app.library.delete_playlist(&playlist_id)? {
                return Err(CliError::playlist_not_found(playlist_id).into());
            }
            println!("Deleted playlist {}", playlist_id);
        }
        PlaylistCommands::List => {
            for playlist in app.library.playlists() {
                println!(
                    "{}  {} ({} tracks)",
                    playlist.id,
                    playlist.name,
                    playlist.track_ids.len()
                );
            }
        }
        PlaylistCommands::Show { playlist_id } => {
            let tracks = app.library.playlist_tracks(&playlist_id)?;
            print_tracks(app, &tracks);
        }
    }
    Ok(())
}

fn ensure_track(app: &App, track_id: &str) -> Result<(), CliError> {
    if app.library.track(track_id).is_none() {
        return Err(CliError::track_not_found(track_id));
    }
    Ok(())
}

fn describe(app: &App, track: &Track) -> String {
    let mut line = format!(
        "{} - {} [{}]",
        track.title,
        track.artist,
        format_duration(track.duration)
    );
    if app.library.is_liked(&track.id) {
        line.push_str(" ♥");
    }
    if app.library.is_downloaded(&track.id) {
        line.push_str(" ↓");
    }
    line
}

fn print_tracks(app: &App, tracks: &[&Track]) {
    if tracks.is_empty() {
        println!("No tracks");
        return;
    }
    for track in tracks {
        println!("{}  {}", track.id, describe(app, track));
    }
}
