//! Simulation layer - a caller of the board engine
//!
//! Wraps the pure engine in the pieces a running game needs: session state, settings,
//! an autoplayer for headless runs, and a JSON-lines transcript of what happened.
//!
//! - [`config`]: [`SimConfig`] loaded from TOML
//! - [`session`]: [`Session`] threads boards from move to move and keeps tallies
//! - [`autoplay`]: [`Autoplayer`] picks random legal moves
//! - [`transcript`]: [`TranscriptWriter`] emits `start` / `move` / `end` records

pub mod autoplay;
pub mod config;
pub mod error;
pub mod session;
pub mod transcript;

pub use autoplay::Autoplayer;
pub use config::SimConfig;
pub use error::SimError;
pub use session::Session;
pub use transcript::{Record, Summary, TranscriptWriter};
