//! Authentication module

pub mod context;
pub mod error_messages;

// Re-export commonly used items
pub use context::{Session, SessionAction, SessionStore, SubscriptionId};
