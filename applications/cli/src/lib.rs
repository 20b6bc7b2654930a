//! Musiq CLI Library
//!
//! Terminal front end for the Musiq library and player: browse the catalogue,
//! manage playlists, likes and downloads, and run simulated listening
//! sessions that write real listening history.
//!
//! This library exposes the building blocks for testing purposes.

pub mod app;
pub mod config;
pub mod error;
pub mod session;

pub use app::App;
pub use config::CliConfig;
pub use error::{CliError, Result};
pub use session::SessionReport;
