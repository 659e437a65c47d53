//! HTTP handlers for nuvora-service.
//!
//! Every prompt route validates its body, builds a fixed prompt, and hands it
//! to the provider bound to that route through [`crate::services::complete`].

pub mod app;
pub mod learning;
pub mod wellbeing;

pub use app::{health_check, index, metrics};
pub use learning::{language_correct, quiz, summarize};
pub use wellbeing::{conversation_prompt, daily_inspiration, reminder};
