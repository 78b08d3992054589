//! Per world, per chunk bookkeeping.

pub mod chunk_event_listeners;
pub mod chunk_pos_multi_map;
pub mod world_ids;

pub use chunk_event_listeners::{ChunkEventListener, ChunkEventListeners, HostWorld, ListenerHandle};
pub use chunk_pos_multi_map::{ChunkPosMultiMap, NotRegisteredError};
pub use world_ids::WorldIds;
