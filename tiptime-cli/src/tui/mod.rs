//! # TUI Module
//!
//! Full-screen terminal user interface for the tip calculator.
//!
//! A single calculator screen built with ratatui: two text fields, a
//! round-up switch, and live result cards, styled with the Copper/Mint
//! theme.

pub mod app;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use event::handle_events;
pub use ui::ui;
