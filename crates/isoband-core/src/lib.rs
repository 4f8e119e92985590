//! Core types for isoband-rs.
//!
//! This crate provides the foundations shared by the band mesher:
//! - [`BandConfig`] describing the iso-level window and palette
//! - [`IsobandError`] and the crate-wide [`Result`] alias
//! - The color map (LUT) system: [`ColorMap`] and [`ColorMapRegistry`]
//! - Whole-field min-max normalization ([`field::normalize`])

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod colormap;
pub mod config;
pub mod error;
pub mod field;

pub use colormap::{ColorMap, ColorMapRegistry, LUT_BINS};
pub use config::BandConfig;
pub use error::{IsobandError, Result};

// Re-export glam types for convenience
pub use glam::{DVec3, UVec3, Vec3};
