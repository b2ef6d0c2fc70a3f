//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal destination generation per piece kind
//! - `check.rs` - Check, checkmate, stalemate and simulation
//! - `eval.rs` - Static evaluation
//! - `notation.rs` - Move notation encoding and resolution
//! - `search.rs` - Alpha-beta search and the depth schedule
//! - `proptest.rs` - Property-based tests

mod notation;
