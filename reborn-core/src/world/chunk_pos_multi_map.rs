//! A multimap from (world, chunk) to a set of values.

use std::hash::Hash;

use reborn_utils::{ChunkPos, WorldId};
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Raised when removing a value that was never added at that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("could not remove element at position {chunk} in {world} as it does not exist")]
pub struct NotRegisteredError {
    /// The world the removal targeted.
    pub world: WorldId,
    /// The chunk the removal targeted.
    pub chunk: ChunkPos,
}

/// Maps (world, chunk) pairs to sets of values.
///
/// Empty sets and worlds without chunks are dropped as soon as they become
/// empty, so [`ChunkPosMultiMap::size`] only counts worlds that still track
/// something.
pub struct ChunkPosMultiMap<T: Eq + Hash> {
    storage: FxHashMap<WorldId, FxHashMap<ChunkPos, FxHashSet<T>>>,
}

impl<T: Eq + Hash> ChunkPosMultiMap<T> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: FxHashMap::default(),
        }
    }

    /// Adds `value` at the given position.
    ///
    /// Returns `false` if it was already present.
    pub fn add(&mut self, world: WorldId, chunk: ChunkPos, value: T) -> bool {
        self.storage
            .entry(world)
            .or_default()
            .entry(chunk)
            .or_default()
            .insert(value)
    }

    /// Removes `value` from the given position, dropping any level left empty.
    pub fn remove(
        &mut self,
        world: WorldId,
        chunk: ChunkPos,
        value: &T,
    ) -> Result<(), NotRegisteredError> {
        let error = NotRegisteredError { world, chunk };

        let chunks = self.storage.get_mut(&world).ok_or(error)?;
        let set = chunks.get_mut(&chunk).ok_or(error)?;

        if !set.remove(value) {
            return Err(error);
        }

        if set.is_empty() {
            chunks.remove(&chunk);

            if chunks.is_empty() {
                self.storage.remove(&world);
            }
        }

        Ok(())
    }

    /// Returns the values at the given position.
    #[must_use]
    pub fn get(&self, world: WorldId, chunk: ChunkPos) -> Option<&FxHashSet<T>> {
        self.storage.get(&world)?.get(&chunk)
    }

    /// Drops every entry of `world`. Returns how many values were removed.
    pub fn remove_world(&mut self, world: WorldId) -> usize {
        self.storage
            .remove(&world)
            .map_or(0, |chunks| chunks.values().map(FxHashSet::len).sum())
    }

    /// Number of chunks of `world` with at least one value.
    #[must_use]
    pub fn chunk_count(&self, world: WorldId) -> usize {
        self.storage.get(&world).map_or(0, FxHashMap::len)
    }

    /// Number of worlds with at least one value.
    #[must_use]
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.storage.clear();
    }
}

impl<T: Eq + Hash> Default for ChunkPosMultiMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERWORLD: WorldId = WorldId(0);
    const NETHER: WorldId = WorldId(1);

    #[test]
    fn test_add_and_get() {
        let mut map = ChunkPosMultiMap::new();
        let chunk = ChunkPos::new(3, -7);

        assert!(map.add(OVERWORLD, chunk, 1));
        assert!(map.add(OVERWORLD, chunk, 2));
        assert!(!map.add(OVERWORLD, chunk, 1));

        let set = map.get(OVERWORLD, chunk).expect("chunk is tracked");
        assert_eq!(set.len(), 2);
        assert!(set.contains(&1) && set.contains(&2));

        assert!(map.get(OVERWORLD, ChunkPos::new(0, 0)).is_none());
        assert!(map.get(NETHER, chunk).is_none());
    }

    #[test]
    fn test_remove_prunes_empty_levels() {
        let mut map = ChunkPosMultiMap::new();
        let a = ChunkPos::new(0, 0);
        let b = ChunkPos::new(1, 0);

        map.add(OVERWORLD, a, "pump");
        map.add(OVERWORLD, b, "tank");
        assert_eq!(map.size(), 1);
        assert_eq!(map.chunk_count(OVERWORLD), 2);

        map.remove(OVERWORLD, a, &"pump").expect("was added");
        assert!(map.get(OVERWORLD, a).is_none());
        assert_eq!(map.chunk_count(OVERWORLD), 1);
        assert_eq!(map.size(), 1);

        map.remove(OVERWORLD, b, &"tank").expect("was added");
        assert_eq!(map.size(), 0);
        assert!(map.is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut map = ChunkPosMultiMap::new();
        let chunk = ChunkPos::new(5, 5);

        let err = map.remove(OVERWORLD, chunk, &1).expect_err("nothing added");
        assert_eq!(err, NotRegisteredError { world: OVERWORLD, chunk });

        map.add(OVERWORLD, chunk, 1);
        assert!(map.remove(OVERWORLD, chunk, &2).is_err());
        assert!(map.remove(OVERWORLD, ChunkPos::new(5, 6), &1).is_err());
        assert!(map.remove(NETHER, chunk, &1).is_err());

        map.remove(OVERWORLD, chunk, &1).expect("was added");
        assert!(map.remove(OVERWORLD, chunk, &1).is_err());
    }

    #[test]
    fn test_worlds_are_separate() {
        let mut map = ChunkPosMultiMap::new();
        let chunk = ChunkPos::new(0, 0);

        map.add(OVERWORLD, chunk, 1);
        map.add(NETHER, chunk, 2);
        assert_eq!(map.size(), 2);

        assert_eq!(map.remove_world(NETHER), 1);
        assert_eq!(map.size(), 1);
        assert!(map.get(NETHER, chunk).is_none());
        assert!(map.get(OVERWORLD, chunk).is_some_and(|set| set.contains(&1)));

        assert_eq!(map.remove_world(NETHER), 0);
        map.clear();
        assert!(map.is_empty());
    }
}
