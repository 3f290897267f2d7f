//! riftlens - match timeline analysis for game-statistics API data
//!
//! This library derives a macro score (time spent near a key objective) and a
//! tilt index (volatility of death timing) from a match timeline, and shapes
//! match details and league entries into the report shown by the dashboard.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod league;
pub mod match_summary;
pub mod participant;
pub mod report;
pub mod riot_id;
pub mod stats;
pub mod text_output;
pub mod timeline;
