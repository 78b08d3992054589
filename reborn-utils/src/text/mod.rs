//! Text formatting helpers.

pub mod fluid;
