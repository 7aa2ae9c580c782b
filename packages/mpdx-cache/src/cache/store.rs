//! Explicitly passed cache context.

use super::key::*;
use super::self_prelude::*;
use crate::connection::Connection;
use crate::policy::{merge_page, FieldArgs, FieldPolicies};
use tracing::debug;

/// In-memory store of cached connections, keyed by entity, field and
/// key-argument signature.
///
/// Created at application start and passed explicitly to its callers; reset
/// at sign-out. Merges run to completion on the calling thread, so a write
/// is always observed in full by the next read.
#[derive(Clone, Debug, Default)]
pub struct CacheStore {
    policies: FieldPolicies,
    connections: IndexMap<ConnectionKey, Connection>,
}

impl CacheStore {
    pub fn new(policies: FieldPolicies) -> Self {
        Self {
            policies,
            connections: IndexMap::new(),
        }
    }

    /// Merge an incoming page into the connection addressed by
    /// `(entity, field, key args)` and store the new snapshot.
    pub fn write_page(
        &mut self,
        entity: &EntityKey,
        field: &str,
        args: &FieldArgs,
        incoming: &Connection,
    ) -> &Connection {
        let key = self.key(entity, field, args);
        let merged = merge_page(self.connections.get(&key), incoming, args);

        debug!("wrote {} edges to {}", merged.edges.len(), key);

        let slot = self
            .connections
            .entry(key)
            .or_insert_with(Connection::default);
        *slot = merged;
        slot
    }

    /// Cached connection for `(entity, field, key args)`, if any.
    pub fn read(
        &self,
        entity: &EntityKey,
        field: &str,
        args: &FieldArgs,
    ) -> Option<&Connection> {
        self.connections.get(&self.key(entity, field, args))
    }

    /// Drop every connection owned by the entity.
    pub fn evict_entity(&mut self, entity: &EntityKey) {
        let before = self.connections.len();
        self.connections.retain(|key, _| &key.entity != entity);

        debug!(
            "evicted {} connections for {}",
            before - self.connections.len(),
            entity
        );
    }

    /// Clear the store. Sign-out semantics.
    pub fn reset(&mut self) {
        self.connections.clear();
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    fn key(&self, entity: &EntityKey, field: &str, args: &FieldArgs) -> ConnectionKey {
        let signature = self.policies.rule(field).signature(args);
        ConnectionKey::new(entity.clone(), field, signature)
    }
}
