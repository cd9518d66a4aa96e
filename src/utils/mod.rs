//! Shared numeric helpers.

pub mod matrix;
