//! Pairwise collision dispatch
//!
//! A flat membership of entity ids, fixed at setup. Each frame the registry
//! scans every ordered pair of distinct members, rect by rect, and returns
//! the overlaps as [`Contact`] events. The caller applies the events as
//! collision callbacks afterwards, which keeps the scan itself free of
//! mutation. N^2 over a handful of entities with at most five rects each.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId, EntityKind};

/// One overlapping rect pair between an ordered pair of entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: EntityId,
    pub a_kind: EntityKind,
    pub b: EntityId,
    pub b_kind: EntityKind,
}

/// Observes registered entities; owns nothing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollisionRegistry {
    members: Vec<EntityId>,
}

impl CollisionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register at setup. Membership does not change during play.
    pub fn register(&mut self, id: EntityId) {
        if !self.members.contains(&id) {
            self.members.push(id);
        }
    }

    pub fn is_registered(&self, id: EntityId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Scan every ordered pair of distinct registered entities and emit one
    /// contact per overlapping rect pair. Both orderings of a pair are
    /// visited, so each party hears about the other.
    pub fn detect(&self, entities: &[&dyn Entity]) -> Vec<Contact> {
        let mut contacts = Vec::new();

        for a in entities {
            if !self.is_registered(a.id()) {
                continue;
            }
            for b in entities {
                if a.id() == b.id() || !self.is_registered(b.id()) {
                    continue;
                }
                for rect_a in a.collision_rects() {
                    for rect_b in b.collision_rects() {
                        if rect_a.overlaps(rect_b) {
                            contacts.push(Contact {
                                a: a.id(),
                                a_kind: a.kind(),
                                b: b.id(),
                                b_kind: b.kind(),
                            });
                        }
                    }
                }
            }
        }

        contacts
    }
}
