//! Chunk scoped event listeners.
//!
//! Machines register themselves against the chunks they care about and get
//! called back when the server loads or unloads that chunk, or when a block
//! inside it changes state. Only server side worlds dispatch events.

use std::{
    hash::{Hash, Hasher},
    sync::Arc,
};

use reborn_utils::{BlockPos, ChunkPos, WorldId};

use super::chunk_pos_multi_map::{ChunkPosMultiMap, NotRegisteredError};

/// Receives lifecycle events for the chunks it is registered in.
pub trait ChunkEventListener: Send + Sync {
    /// The chunk was loaded.
    fn on_load_chunk(&self);

    /// The chunk was unloaded.
    fn on_unload_chunk(&self);

    /// The block at `pos` changed state.
    fn on_block_update(&self, pos: BlockPos);
}

/// The view of a host world needed to route events.
pub trait HostWorld {
    /// The id the server assigned when this world loaded.
    fn world_id(&self) -> WorldId;

    /// Whether this is a client side copy of the world.
    fn is_client(&self) -> bool;
}

/// A registered listener. Two handles are equal only if they point to the same listener.
#[derive(Clone)]
pub struct ListenerHandle(pub Arc<dyn ChunkEventListener>);

impl ListenerHandle {
    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0).cast::<()>()
    }
}

impl PartialEq for ListenerHandle {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for ListenerHandle {}

impl Hash for ListenerHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

/// Dispatches chunk events to the listeners registered for each chunk.
#[derive(Default)]
pub struct ChunkEventListeners {
    listeners: ChunkPosMultiMap<ListenerHandle>,
    log_dispatch: bool,
}

impl ChunkEventListeners {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry that logs every dispatched event at trace level.
    #[must_use]
    pub fn with_dispatch_logging(log_dispatch: bool) -> Self {
        Self {
            listeners: ChunkPosMultiMap::new(),
            log_dispatch,
        }
    }

    /// Registers `listener` for events in `chunk`.
    pub fn register(
        &mut self,
        world: WorldId,
        chunk: ChunkPos,
        listener: Arc<dyn ChunkEventListener>,
    ) {
        self.listeners.add(world, chunk, ListenerHandle(listener));
    }

    /// Removes a listener added with [`ChunkEventListeners::register`].
    ///
    /// Removing a listener twice is a bug in the caller and returns an error.
    pub fn unregister(
        &mut self,
        world: WorldId,
        chunk: ChunkPos,
        listener: &Arc<dyn ChunkEventListener>,
    ) -> Result<(), NotRegisteredError> {
        self.listeners
            .remove(world, chunk, &ListenerHandle(listener.clone()))
            .inspect_err(|err| log::error!("{err}"))
    }

    /// Read only access to the underlying map.
    #[must_use]
    pub fn listeners(&self) -> &ChunkPosMultiMap<ListenerHandle> {
        &self.listeners
    }

    /// Called by the host after it loaded `chunk`.
    pub fn on_chunk_load(&self, world: &impl HostWorld, chunk: ChunkPos) {
        self.dispatch(world, chunk, "load", |listener| listener.on_load_chunk());
    }

    /// Called by the host before it unloads `chunk`.
    pub fn on_chunk_unload(&self, world: &impl HostWorld, chunk: ChunkPos) {
        self.dispatch(world, chunk, "unload", |listener| listener.on_unload_chunk());
    }

    /// Called by the host after the block at `pos` changed state.
    pub fn on_block_state_change(&self, world: &impl HostWorld, pos: BlockPos) {
        self.dispatch(world, pos.chunk_pos(), "block update", |listener| {
            listener.on_block_update(pos);
        });
    }

    /// Drops every listener of `world`, used when the host unloads it.
    pub fn remove_world(&mut self, world: WorldId) -> usize {
        self.listeners.remove_world(world)
    }

    /// Drops every listener. Called when the server stops.
    pub fn reset(&mut self) {
        if self.listeners.size() != 0 {
            log::debug!(
                "Dropping chunk listeners of {} world(s)",
                self.listeners.size()
            );
            self.listeners = ChunkPosMultiMap::new();
        }
    }

    fn dispatch(
        &self,
        world: &impl HostWorld,
        chunk: ChunkPos,
        event: &str,
        callback: impl Fn(&dyn ChunkEventListener),
    ) {
        if world.is_client() {
            return;
        }

        let world_id = world.world_id();
        let Some(listeners) = self.listeners.get(world_id, chunk) else {
            return;
        };

        if self.log_dispatch {
            log::trace!(
                "Dispatching chunk {event} for {chunk} in {world_id} to {} listener(s)",
                listeners.len()
            );
        }

        for listener in listeners {
            callback(listener.0.as_ref());
        }
    }
}
