//! Bundled sample catalogue
//!
//! Seeded into storage the first time a library is initialized on an empty
//! device.

use musiq_core::Track;

const AUDIO_BASE: &str = "https://www.soundhelix.com/examples/mp3";
const COVER_BASE: &str = "https://images.unsplash.com";

struct Sample {
    id_suffix: &'static str,
    title: &'static str,
    artist: &'static str,
    album: &'static str,
    genre: &'static str,
    duration: f64,
    cover: &'static str,
    play_count: u64,
}

const SAMPLES: [Sample; 10] = [
    Sample {
        id_suffix: "c1",
        title: "Midnight Dreams",
        artist: "Aurora Waves",
        album: "Dreamscape",
        genre: "Electronic",
        duration: 240.0,
        cover: "photo-1614680376593-902f74cf0d41",
        play_count: 1240,
    },
    Sample {
        id_suffix: "c2",
        title: "Electric Pulse",
        artist: "Neon Lights",
        album: "Voltage",
        genre: "Electronic",
        duration: 195.0,
        cover: "photo-1470225620780-dba8ba36b745",
        play_count: 890,
    },
    Sample {
        id_suffix: "c3",
        title: "Ocean Waves",
        artist: "Calm Collective",
        album: "Serenity",
        genre: "Ambient",
        duration: 320.0,
        cover: "photo-1511379938547-c1f69419868d",
        play_count: 2100,
    },
    Sample {
        id_suffix: "c4",
        title: "Urban Rhythm",
        artist: "City Beats",
        album: "Street Sounds",
        genre: "Hip Hop",
        duration: 210.0,
        cover: "photo-1493225457124-a3eb161ffa5f",
        play_count: 3400,
    },
    Sample {
        id_suffix: "c5",
        title: "Jazz Lounge",
        artist: "Smooth Operators",
        album: "Late Night",
        genre: "Jazz",
        duration: 280.0,
        cover: "photo-1415201364774-f6f0bb35f28f",
        play_count: 1560,
    },
    Sample {
        id_suffix: "c6",
        title: "Summer Vibes",
        artist: "Tropical Dreams",
        album: "Paradise",
        genre: "Pop",
        duration: 200.0,
        cover: "photo-1459749411175-04bf5292ceea",
        play_count: 5200,
    },
    Sample {
        id_suffix: "c7",
        title: "Rock Anthem",
        artist: "Thunder Strike",
        album: "Lightning",
        genre: "Rock",
        duration: 250.0,
        cover: "photo-1498038432885-c6f3f1b912ee",
        play_count: 4100,
    },
    Sample {
        id_suffix: "c8",
        title: "Classical Journey",
        artist: "Symphony Orchestra",
        album: "Masterpieces",
        genre: "Classical",
        duration: 360.0,
        cover: "photo-1507838153414-b4b713384a76",
        play_count: 890,
    },
    Sample {
        id_suffix: "c9",
        title: "Morning Coffee",
        artist: "Acoustic Soul",
        album: "Unplugged",
        genre: "Acoustic",
        duration: 180.0,
        cover: "photo-1487180144351-b8472da7d491",
        play_count: 2800,
    },
    Sample {
        id_suffix: "d0",
        title: "Night Drive",
        artist: "Synthwave Heroes",
        album: "Retrowave",
        genre: "Electronic",
        duration: 270.0,
        cover: "photo-1514525253161-7a46d19cd819",
        play_count: 6700,
    },
];

/// The ten bundled tracks, in catalogue order
pub fn sample_tracks() -> Vec<Track> {
    SAMPLES
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let mut track = Track::new(
                format!("6489a8c2-37f2-4e4b-9e4a-5b4d8c89a8{}", sample.id_suffix),
                sample.title,
                sample.artist,
                sample.duration,
            )
            .with_album(sample.album)
            .with_genre(sample.genre)
            .with_play_count(sample.play_count);

            track.audio_url = format!("{}/SoundHelix-Song-{}.mp3", AUDIO_BASE, i + 1);
            track.cover_url = format!("{}/{}?w=500&h=500&fit=crop", COVER_BASE, sample.cover);
            track
        })
        .collect()
}
