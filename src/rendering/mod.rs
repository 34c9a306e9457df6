//! # Rendering Module
//!
//! Text output for the command-line front end.

pub mod display;

pub use display::*;
