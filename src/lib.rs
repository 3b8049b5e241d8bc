//! Quire - paginated rich-text editing core
//!
//! This crate lays styled runs out into rows, distributes the rows over
//! fixed-size pages, and keeps a position index that maps clicks to
//! insertion indices and insertion indices back to cursor geometry. All
//! state changes go through the Elm-style [`update`](update::update)
//! function.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod geometry;
pub mod layout;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::EditorSession;
