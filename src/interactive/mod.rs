//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{App, MESSAGE_DURATION, MenuField, MenuState, Message, MessageStyle, Screen, run_tui};
