//! # Domain Layer
//!
//! Pure verification logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod entities;
pub mod errors;
pub mod intermediate;
pub mod keys;
pub mod layout;
pub mod parameters;
pub mod signer;
