//! # Mapsight Tools
//!
//! Command-line plumbing around `mapsight_core`:
//! - Map bundle loading (the map library's JSON export)
//! - Bundle-backed preview rendering
//! - PNG and JSON report output

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod bundle;
pub mod commands;
pub mod error;
pub mod png;
pub mod render;
