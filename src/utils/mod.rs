//! # Utilities Module
//!
//! Numeric generation rules and filename slugs.

pub mod math;
pub mod slug;

pub use math::*;
pub use slug::*;
