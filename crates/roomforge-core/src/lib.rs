//! Core types and room geometry model for the roomforge engine.
//!
//! This crate provides the foundational types used across all other
//! roomforge crates:
//! - Room geometry model (walls, doors, windows, floor polygon)
//! - Construction of default rooms from coarse estimates
//! - Furniture catalogue (kinds, categories, placement rules, recipes)
//! - Error types

pub mod catalog;
pub mod errors;
pub mod room;
pub mod types;

pub use catalog::*;
pub use errors::*;
pub use room::*;
pub use types::*;
