//! Tunebox CLI Library
//!
//! Terminal front end for Tunebox: configuration, the navigation session, the
//! interactive shell and a headless stand-in for the media widget.
//!
//! This library exposes the core components for testing purposes.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod shell;
pub mod widget;

// Re-export commonly used types for convenience
pub use config::TuneboxConfig;
pub use error::{AppError, Result};
pub use session::{Session, SessionEvents, SessionParts, View};
pub use shell::Command;
pub use widget::{HeadlessWidget, HeadlessWidgetFactory};
