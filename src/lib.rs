//! Terminal Kiosk Library
//!
//! This library provides the core functionality for the Terminal Kiosk
//! application: page content loading, the panel controllers behind the
//! carousel, tabs, and application form, and the TUI itself.

// Module declarations
pub mod config;
pub mod constants;
pub mod controller;
pub mod models;
pub mod services;
pub mod tui;
pub mod validate;
