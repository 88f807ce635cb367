//! # consty-core
//!
//! Core types, traits, and utilities for Consty RS.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Common error types and the `ValidationErrors` collection
//! - Result type aliases and the submission result carrier
//! - Core traits (Identifiable, ProjectScoped, StockTracked)
//! - Common value types (PayMonth, DateSpan)
//! - Configuration loading

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::*;
pub use result::*;
pub use traits::*;
pub use types::*;
