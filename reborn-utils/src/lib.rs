//! # Reborn Utils
//!
//! Shared primitive types, codecs and helpers used by the Reborn crates.

pub mod codec;
pub mod logger;
pub mod math;
pub mod serial;
pub mod text;
pub mod types;
pub mod units;

pub use types::{BlockPos, ChunkPos, Identifier, WorldId};
