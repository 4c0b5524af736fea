//! Geometric transforms applied to shape geometry.

pub mod distort;
