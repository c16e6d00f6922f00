//! Badge list caching for a catalog display context.
//!
//! The badge list is derived state: it is recomputed only when the
//! descriptor identity (name plus version) changes. One cache instance
//! belongs to one display context and dies with it; no other invalidation
//! trigger exists besides [`BadgeCache::clear`].

use std::sync::Arc;

use verbena_component::{ComponentDescriptor, DescriptorKey};

use crate::badge::{badges_for, Badge};

/// One-slot memo for the derived badge list, keyed by descriptor identity.
#[derive(Debug)]
pub struct BadgeCache {
  slot: Option<(DescriptorKey, Arc<Vec<Badge>>)>,
}

impl BadgeCache {
  pub fn new() -> Self {
    Self { slot: None }
  }

  /// Get the badge list from cache, or compute and cache it.
  ///
  /// The same descriptor identity returns the same `Arc`; a different
  /// identity replaces the slot.
  pub fn badges(&mut self, descriptor: &ComponentDescriptor) -> Arc<Vec<Badge>> {
    let key = descriptor.key();

    if let Some((cached_key, badges)) = &self.slot {
      if *cached_key == key {
        return Arc::clone(badges);
      }
    }

    let badges = Arc::new(badges_for(descriptor));
    self.slot = Some((key, Arc::clone(&badges)));
    badges
  }

  /// Clear the cached entry.
  pub fn clear(&mut self) {
    self.slot = None;
  }
}

impl Default for BadgeCache {
  fn default() -> Self {
    Self::new()
  }
}
