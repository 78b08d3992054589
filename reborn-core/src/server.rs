//! State owned by one running server.

use std::path::Path;

use reborn_utils::{Identifier, WorldId, logger};

use crate::{
    config::{ConfigError, CoreConfig},
    world::{ChunkEventListeners, WorldIds},
};

/// Everything the core keeps for one server session.
///
/// Created when the server starts and passed by reference to whatever
/// forwards host events. Nothing survives [`ServerSession::on_server_stopped`],
/// so listeners from one world can't leak into the next session.
pub struct ServerSession {
    config: CoreConfig,
    worlds: WorldIds,
    listeners: ChunkEventListeners,
}

impl ServerSession {
    /// Creates a session with no loaded worlds.
    #[must_use]
    pub fn new(config: CoreConfig) -> Self {
        let listeners = ChunkEventListeners::with_dispatch_logging(config.log_listener_dispatch);
        Self {
            config,
            worlds: WorldIds::new(),
            listeners,
        }
    }

    /// Loads the config at `config_path`, installs the logger and creates the session.
    pub fn start(config_path: &Path) -> Result<Self, ConfigError> {
        let config = CoreConfig::load_or_create(config_path)?;
        if let Err(err) = logger::init(&config.log_level) {
            log::warn!("Keeping the existing logger: {err}");
        }
        log::info!("Starting server session");
        Ok(Self::new(config))
    }

    /// The config this session was started with.
    #[must_use]
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Loaded worlds.
    #[must_use]
    pub fn worlds(&self) -> &WorldIds {
        &self.worlds
    }

    /// The chunk listener registry, for dispatching host events.
    #[must_use]
    pub fn listeners(&self) -> &ChunkEventListeners {
        &self.listeners
    }

    /// The chunk listener registry, for registering listeners.
    pub fn listeners_mut(&mut self) -> &mut ChunkEventListeners {
        &mut self.listeners
    }

    /// Called by the host when it loads a world.
    pub fn on_world_load(&mut self, identifier: Identifier) -> WorldId {
        let id = self.worlds.load(identifier);
        log::debug!("Loaded world {id}");
        id
    }

    /// Called by the host when it unloads a world. Drops the world's listeners.
    pub fn on_world_unload(&mut self, identifier: &Identifier) -> Option<WorldId> {
        let id = self.worlds.unload(identifier)?;
        let dropped = self.listeners.remove_world(id);
        if dropped > 0 {
            log::warn!("World {identifier} unloaded with {dropped} chunk listener(s) still registered");
        }
        Some(id)
    }

    /// Called by the host once the server stopped.
    pub fn on_server_stopped(&mut self) {
        self.listeners.reset();
        self.worlds.clear();
        log::info!("Server session cleaned up");
    }
}

impl Default for ServerSession {
    fn default() -> Self {
        Self::new(CoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    };

    use reborn_utils::{BlockPos, ChunkPos};

    use super::*;
    use crate::world::{ChunkEventListener, HostWorld};

    #[derive(Default)]
    struct Machine {
        loads: AtomicU32,
    }

    impl ChunkEventListener for Machine {
        fn on_load_chunk(&self) {
            self.loads.fetch_add(1, Ordering::Relaxed);
        }

        fn on_unload_chunk(&self) {}

        fn on_block_update(&self, _pos: BlockPos) {}
    }

    struct ServerWorld(WorldId);

    impl HostWorld for ServerWorld {
        fn world_id(&self) -> WorldId {
            self.0
        }

        fn is_client(&self) -> bool {
            false
        }
    }

    fn overworld() -> Identifier {
        Identifier::vanilla_static("overworld")
    }

    fn nether() -> Identifier {
        Identifier::vanilla_static("the_nether")
    }

    #[test]
    fn test_world_unload_drops_its_listeners() {
        let mut session = ServerSession::default();
        let overworld_id = session.on_world_load(overworld());
        let nether_id = session.on_world_load(nether());
        let chunk = ChunkPos::new(0, 0);

        let machine = Arc::new(Machine::default());
        session.listeners_mut().register(overworld_id, chunk, machine.clone());
        session.listeners_mut().register(nether_id, chunk, machine.clone());

        assert_eq!(session.on_world_unload(&nether()), Some(nether_id));
        assert!(session.listeners().listeners().get(nether_id, chunk).is_none());

        session.listeners().on_chunk_load(&ServerWorld(overworld_id), chunk);
        session.listeners().on_chunk_load(&ServerWorld(nether_id), chunk);
        assert_eq!(machine.loads.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_stop_clears_everything() {
        let mut session = ServerSession::default();
        let overworld_id = session.on_world_load(overworld());
        let chunk = ChunkPos::new(1, 1);

        let machine = Arc::new(Machine::default());
        session.listeners_mut().register(overworld_id, chunk, machine.clone());

        session.on_server_stopped();
        assert!(session.listeners().listeners().is_empty());
        assert!(session.worlds().is_empty());

        // A new world reusing the id must not see the old listener.
        let reloaded = session.on_world_load(overworld());
        session.listeners().on_chunk_load(&ServerWorld(reloaded), chunk);
        assert_eq!(machine.loads.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_start_with_fresh_config() {
        let dir = tempfile::tempdir().expect("temp dir");
        let session = ServerSession::start(&dir.path().join("reborn_config.json5"))
            .expect("default config is written and loaded");

        assert_eq!(session.config(), &CoreConfig::default());
        assert!(session.worlds().is_empty());
    }

    #[test]
    fn test_unload_unknown_world() {
        let mut session = ServerSession::default();
        assert_eq!(session.on_world_unload(&overworld()), None);
    }
}
