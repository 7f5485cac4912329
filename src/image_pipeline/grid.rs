//! Pixel grid module
//!
//! This module provides the owned 2D pixel grid that every pipeline
//! stage consumes and produces.

pub mod types;

pub use types::{PixelGrid, Rgb};
