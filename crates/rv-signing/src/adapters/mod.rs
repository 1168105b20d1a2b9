//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.

pub mod clock;
pub mod logging;
