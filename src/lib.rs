//! Brick Snake: a turn-based snake on a toroidal board where permanent
//! brick walls accumulate over the session.
//!
//! The engine (`board`, `bricks`, `snake`, `food`, `game`) is pure: every
//! transition maps an immutable snapshot plus one event to a new snapshot,
//! so a whole session replays deterministically from a seed and an event
//! sequence. The terminal front end (`renderer`, `ui`, the binary) drives it
//! with two independent tick cadences and a key listener.

pub mod board;
pub mod bricks;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod ui;
