//! # Reborn Core
//!
//! Fluid quantities and chunk scoped event listeners shared by Reborn machines.

pub mod config;
pub mod fluid;
pub mod server;
pub mod world;

pub use server::ServerSession;
