//! # Response Verification Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs          # Keys, signers and captured server signatures
//! └── integration/
//!     ├── golden_vectors.rs    # Signatures produced by the production backend
//!     └── response_flows.rs    # Request → response → result, end to end
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p rv-tests
//!
//! # Benchmarks
//! cargo bench -p rv-tests
//! ```

pub mod fixtures;
