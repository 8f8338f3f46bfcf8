mod client;

pub use client::*;

// Re-export core client for convenience
pub use ajax_core::*;
