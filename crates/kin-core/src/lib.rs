//! # kin-core
//!
//! Core types for Kindred.
//!
//! This crate provides the foundational types shared across all Kindred
//! crates:
//! - Entity structs for the interaction domain (businesses, per-user likes)
//! - The verified caller identity passed across crate boundaries
//! - Response envelopes returned as JSON by `kin` commands
//!
//! Domain-specific errors (e.g., `StoreError`, `RecommendError`) are defined
//! in their respective crates and converge into `anyhow` in `kin-cli`.

pub mod entities;
pub mod identity;
pub mod responses;
