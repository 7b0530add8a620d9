//! Type registry — runtime reverse lookup from ids back to names.
//!
//! Names and ids are compile-time constants; the registry only exists for
//! the other direction, e.g. resolving a serialized type tag. Because the
//! additive id collides for anagram names, every insertion is checked and
//! handled according to [`RegistryConfig::on_collision`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hash::{checksum, fingerprint};
use crate::render::NameDisplay;
use crate::shape::Shape;
use crate::traits::TypeName;

/// Which identifier keys the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// The additive [`type_id`](crate::type_id).
    #[default]
    Checksum,
    /// The FNV-1a [`type_hash`](crate::type_hash).
    Fingerprint,
}

/// Behavior when two different names map to the same key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnCollision {
    /// Reject the second registration (default, safest)
    #[default]
    Error,
    /// Keep the first registration for key lookups, record the collision and
    /// log a warning
    Warn,
}

/// Registry configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub key: KeyKind,
    pub on_collision: OnCollision,
}

/// A registered type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeEntry {
    pub name: String,
    pub id: usize,
    pub fingerprint: u64,
}

impl TypeEntry {
    pub fn from_shape(shape: &'static Shape) -> Self {
        Self {
            name: NameDisplay::new(shape).to_string(),
            id: checksum(shape),
            fingerprint: fingerprint(shape),
        }
    }

    /// The identifier selected by `kind`.
    #[inline]
    pub fn key(&self, kind: KeyKind) -> u64 {
        match kind {
            KeyKind::Checksum => self.id as u64,
            KeyKind::Fingerprint => self.fingerprint,
        }
    }
}

/// Two names sharing a key, recorded under [`OnCollision::Warn`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    pub key: u64,
    /// Name that key lookups resolve to.
    pub kept: String,
    /// Name registered later under the same key.
    pub shadowed: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("type key collision: '{name}' and '{existing}' both map to {key:#018x}")]
    KeyCollision {
        name: String,
        existing: String,
        key: u64,
    },
}

/// Registry of type names keyed by id.
///
/// Provides:
/// - name ↔ key lookup in both directions
/// - idempotent registration
/// - collision detection under the configured [`KeyKind`]
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "bevy", derive(::bevy::prelude::Resource))]
pub struct TypeRegistry {
    config: RegistryConfig,
    entries: Vec<TypeEntry>,
    name_to_idx: HashMap<String, usize>,
    key_to_idx: HashMap<u64, usize>,
    collisions: Vec<Collision>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Build a registry from a list of shapes with the default configuration.
    pub fn build(shapes: &[&'static Shape]) -> Result<Self, RegistryError> {
        Self::build_with(RegistryConfig::default(), shapes)
    }

    pub fn build_with(
        config: RegistryConfig,
        shapes: &[&'static Shape],
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::with_config(config);
        for &shape in shapes {
            registry.register_shape(shape)?;
        }
        Ok(registry)
    }

    /// Rebuild a registry from previously exported entries.
    pub fn from_entries(
        config: RegistryConfig,
        entries: impl IntoIterator<Item = TypeEntry>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::with_config(config);
        for entry in entries {
            registry.insert(entry)?;
        }
        Ok(registry)
    }

    #[inline]
    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    /// Register `T`, returning its key.
    ///
    /// Registering the same name again is a no-op that returns the same key.
    pub fn register<T: TypeName + ?Sized>(&mut self) -> Result<u64, RegistryError> {
        self.register_shape(T::SHAPE)
    }

    pub fn register_shape(&mut self, shape: &'static Shape) -> Result<u64, RegistryError> {
        self.insert(TypeEntry::from_shape(shape))
    }

    fn insert(&mut self, entry: TypeEntry) -> Result<u64, RegistryError> {
        let key = entry.key(self.config.key);

        if self.name_to_idx.contains_key(&entry.name) {
            return Ok(key);
        }

        let idx = self.entries.len();
        if let Some(&existing_idx) = self.key_to_idx.get(&key) {
            let existing = self.entries[existing_idx].name.clone();
            match self.config.on_collision {
                OnCollision::Error => {
                    return Err(RegistryError::KeyCollision {
                        name: entry.name,
                        existing,
                        key,
                    });
                }
                OnCollision::Warn => {
                    tracing::warn!(
                        name = %entry.name,
                        existing = %existing,
                        key,
                        "type key collision, key lookups keep the first registration"
                    );
                    self.collisions.push(Collision {
                        key,
                        kept: existing,
                        shadowed: entry.name.clone(),
                    });
                }
            }
        } else {
            self.key_to_idx.insert(key, idx);
        }

        tracing::debug!(name = %entry.name, key, "registered type");
        self.name_to_idx.insert(entry.name.clone(), idx);
        self.entries.push(entry);
        Ok(key)
    }

    /// Key → name
    #[inline]
    pub fn name_of(&self, key: u64) -> Option<&str> {
        self.key_to_idx
            .get(&key)
            .map(|&i| self.entries[i].name.as_str())
    }

    /// Name → key
    #[inline]
    pub fn key_of(&self, name: &str) -> Option<u64> {
        self.entry(name).map(|e| e.key(self.config.key))
    }

    #[inline]
    pub fn entry(&self, name: &str) -> Option<&TypeEntry> {
        self.name_to_idx.get(name).map(|&i| &self.entries[i])
    }

    /// Check if `T` is registered.
    pub fn contains<T: TypeName + ?Sized>(&self) -> bool {
        self.name_to_idx
            .contains_key(T::display().to_string().as_str())
    }

    #[inline]
    pub fn contains_name(&self, name: &str) -> bool {
        self.name_to_idx.contains_key(name)
    }

    #[inline]
    pub fn contains_key(&self, key: u64) -> bool {
        self.key_to_idx.contains_key(&key)
    }

    /// Total number of registered names.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in registration order.
    #[inline]
    pub fn entries(&self) -> &[TypeEntry] {
        &self.entries
    }

    /// Collisions accepted under [`OnCollision::Warn`].
    #[inline]
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }
}
