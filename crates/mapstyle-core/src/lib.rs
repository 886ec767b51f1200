//! Core types and error definitions for mapstyle.
//!
//! This crate provides the foundational types shared by the other mapstyle crates:
//! - The typed style document model (sources, sprite, glyphs, projection)
//! - Parsed locator and resource kind types
//! - Error types

pub mod errors;
pub mod locator;
pub mod style;

pub use errors::*;
pub use locator::*;
pub use style::*;
