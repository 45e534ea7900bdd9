//! Hoops Tracker - a live basketball stat tracker for the console.
//!
//! This crate wires the stat engine to a command-line front end: it loads
//! the roster, reads operator events, shows the running box score and
//! exports it.
//!
//! # Modules
//!
//! - [`config`] - TOML configuration (team, roster, export path)
//! - [`session`] - interactive console session and script replay
//! - [`table`] - plain-text box score rendering
//! - [`csv_export`] - CSV box score export
//! - [`json_output`] - JSON match snapshot

pub mod config;
pub mod csv_export;
pub mod json_output;
pub mod session;
pub mod table;
