//! Terminal chat view for the FAQ chatbot.
//!
//! [`state`] holds the view state and its transitions, [`keys`] maps terminal
//! input onto them, [`effects`] runs backend calls, [`view`] draws, and
//! [`app`] ties them together in the event loop.

pub mod app;
pub mod effects;
pub mod keys;
pub mod logging;
pub mod state;
pub mod theme;
pub mod view;

pub use app::run;
pub use state::{ChatEvent, ChatState, Effect, Message, Role};
