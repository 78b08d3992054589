//! Hands out [`WorldId`]s for loaded worlds.

use reborn_utils::{Identifier, WorldId};
use rustc_hash::FxHashMap;

/// Side table between world identifiers and the [`WorldId`]s used as map keys.
///
/// Ids are handed out in load order and never reused until [`WorldIds::clear`].
#[derive(Debug, Default)]
pub struct WorldIds {
    by_identifier: FxHashMap<Identifier, WorldId>,
    by_id: FxHashMap<WorldId, Identifier>,
    next_id: u32,
}

impl WorldIds {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `identifier`, assigning a new one if it isn't loaded.
    pub fn load(&mut self, identifier: Identifier) -> WorldId {
        if let Some(id) = self.by_identifier.get(&identifier) {
            return *id;
        }

        let id = WorldId(self.next_id);
        self.next_id += 1;
        self.by_id.insert(id, identifier.clone());
        self.by_identifier.insert(identifier, id);
        id
    }

    /// Forgets `identifier`. Returns the id it had, if it was loaded.
    pub fn unload(&mut self, identifier: &Identifier) -> Option<WorldId> {
        let id = self.by_identifier.remove(identifier)?;
        self.by_id.remove(&id);
        Some(id)
    }

    /// The id of a loaded world.
    #[must_use]
    pub fn get(&self, identifier: &Identifier) -> Option<WorldId> {
        self.by_identifier.get(identifier).copied()
    }

    /// The identifier of a loaded world.
    #[must_use]
    pub fn identifier(&self, id: WorldId) -> Option<&Identifier> {
        self.by_id.get(&id)
    }

    /// Number of loaded worlds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if no world is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Forgets every world and starts numbering from zero again.
    pub fn clear(&mut self) {
        self.by_identifier.clear();
        self.by_id.clear();
        self.next_id = 0;
    }
}
