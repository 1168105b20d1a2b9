//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that the HTTP layer calls
//! - **Outbound (Driven)**: Dependencies this subsystem needs

pub mod inbound;
pub mod outbound;
