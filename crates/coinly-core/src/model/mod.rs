// ── Domain model ──
//
// Three-level hierarchy: Group → Collection → Coin. Parents embed their
// children as optional aggregates; children point back at their parent
// through optional, non-owning id references.

pub mod coin;
pub mod collection;
pub mod entity_id;
pub mod group;

pub use coin::Coin;
pub use collection::Collection;
pub use entity_id::EntityId;
pub use group::Group;

/// The three entity kinds the cache tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum EntityKind {
    Group,
    Collection,
    Coin,
}

/// Behavior shared by every cached entity.
pub trait Entity: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> &EntityId;

    /// Shallow-merge a newer copy of the same entity into `self`.
    ///
    /// Attribute fields take the incoming value. Nested aggregates and
    /// parent references are only replaced when the incoming copy
    /// carries them.
    fn merge(&mut self, incoming: Self);
}
