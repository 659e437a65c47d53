pub mod config;
pub mod dtos;
pub mod handlers;
pub mod prompts;
pub mod reminder;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};
