/// A lightweight handle to an entity inside one [`Context`](crate::Context).
///
/// An entity is nothing but its slot index; all data lives in the
/// context's component columns. Handles are only meaningful for the
/// context that created them.
///
/// # Identity
///
/// Slot indices are assigned in creation order and never reused, so an
/// `Entity` handle stays unambiguous for the lifetime of its context
/// even after the entity is destroyed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity {
    id: u32,
}

impl Entity {
    /// Creates a handle from a slot index (allocator internal).
    pub(crate) fn new(index: u32) -> Self {
        Self { id: index }
    }

    /// Returns the slot index of this entity.
    pub fn index(&self) -> u32 {
        self.id
    }
}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.index())
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.index())
    }
}

/// Allocates entity slots in creation order.
///
/// Slots are append-only: destroying an entity marks its slot dead but
/// the index is never handed out again. This keeps entity order stable
/// across a context's lifetime, which snapshotting relies on.
pub(crate) struct EntityAllocator {
    /// Alive flag per slot. Index = entity index.
    alive: Vec<bool>,
    /// Total number of currently alive entities.
    count: u32,
}

impl EntityAllocator {
    /// Creates a new empty allocator.
    pub fn new() -> Self {
        Self {
            alive: Vec::new(),
            count: 0,
        }
    }

    /// Allocates the next entity slot.
    pub fn allocate(&mut self) -> Entity {
        let index = self.alive.len() as u32;
        self.alive.push(true);
        self.count += 1;
        Entity::new(index)
    }

    /// Allocates `count` entities at once.
    ///
    /// More efficient than calling [`allocate`](Self::allocate) in a loop
    /// because the alive vector is grown in bulk.
    pub fn allocate_many(&mut self, count: u32) -> Vec<Entity> {
        let start = self.alive.len() as u32;
        self.alive.resize(self.alive.len() + count as usize, true);
        self.count += count;
        (start..start + count).map(Entity::new).collect()
    }

    /// Marks an entity slot dead. Returns false if it was already dead
    /// or never allocated.
    pub fn deallocate(&mut self, entity: Entity) -> bool {
        let idx = entity.index() as usize;
        if idx >= self.alive.len() || !self.alive[idx] {
            return false;
        }
        self.alive[idx] = false;
        self.count -= 1;
        true
    }

    /// Returns whether the entity is currently alive.
    pub fn is_alive(&self, entity: Entity) -> bool {
        let idx = entity.index() as usize;
        idx < self.alive.len() && self.alive[idx]
    }

    /// Returns the number of alive entities.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Iterates over all currently alive entities in ascending index order.
    pub fn iter_alive(&self) -> impl Iterator<Item = Entity> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(idx, _)| Entity::new(idx as u32))
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}
