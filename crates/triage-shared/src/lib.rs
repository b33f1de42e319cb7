//! Shared types for the ticket triage components.

pub mod error;
pub mod ticket;

pub use error::TriageError;
pub use ticket::{AnalysisResult, Category, Priority, TicketRequest};

/// Workspace version, shared by the engine and the CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
