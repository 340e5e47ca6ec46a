//! Pacfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for pacfolio: the asset
//! model, portfolio aggregation, target-weight normalization, the monthly
//! accumulation-plan allocator, and the long-horizon growth projector.
//!
//! The computations are pure, synchronous functions of their inputs: no
//! I/O, no retries, no blocking, no shared mutable state. Storage and
//! quote fetching live behind traits implemented by the application layer.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod settings;

// Re-export common types
pub use assets::*;
pub use portfolio::*;
pub use settings::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
