//! Inbound webhook handling and request processing

pub mod command;
pub mod handler;
pub mod parsing;
pub mod signature;

// Re-export the router builder for convenience
pub use handler::{AppState, build_router};
