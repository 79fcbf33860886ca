//! Shared helpers.

pub mod normalize;
