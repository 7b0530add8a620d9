//! Bevy integration for type labels.
//!
//! Provides `TypeRegistryPlugin` — builder-pattern plugin that inserts a
//! [`TypeRegistry`] resource pre-filled with the listed types.
//!
//! # Example
//!
//! ```ignore
//! use bevy::prelude::*;
//! use type_label::bevy::TypeRegistryPlugin;
//! use type_label::TypeName;
//!
//! #[derive(TypeName)]
//! struct Health(u32);
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(TypeRegistryPlugin::new().with::<Health>())
//!         .add_systems(Startup, resolve_tags)
//!         .run();
//! }
//!
//! fn resolve_tags(registry: Res<TypeRegistry>) {
//!     let key = type_label::type_id::<Health>() as u64;
//!     assert_eq!(registry.name_of(key), Some("Health"));
//! }
//! ```

use ::bevy::prelude::*;

use crate::registry::{RegistryConfig, TypeRegistry};
use crate::shape::Shape;
use crate::traits::TypeName;

/// Bevy plugin for the type registry.
///
/// Use the builder pattern to configure:
///
/// ```ignore
/// App::new()
///     .add_plugins(
///         TypeRegistryPlugin::new()
///             .with::<Health>()
///             .with::<Vec<Health>>()
///             .config(RegistryConfig { on_collision: OnCollision::Warn, ..default() })
///     )
/// ```
#[derive(Default)]
pub struct TypeRegistryPlugin {
    shapes: Vec<&'static Shape>,
    config: RegistryConfig,
}

impl TypeRegistryPlugin {
    /// Create a plugin with no types and the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` when the plugin is built.
    pub fn with<T: TypeName + ?Sized>(mut self) -> Self {
        self.shapes.push(T::SHAPE);
        self
    }

    /// Set the registry configuration.
    ///
    /// Default: checksum keys, collisions are errors.
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }
}

impl Plugin for TypeRegistryPlugin {
    fn build(&self, app: &mut App) {
        let registry = TypeRegistry::build_with(self.config, &self.shapes)
            .expect("Failed to build TypeRegistry from plugin types");
        app.insert_resource(registry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::OnCollision;
    use crate::{type_id, TypeName};

    #[derive(TypeName)]
    struct Health(#[allow(dead_code)] u32);

    // Anagram names share an additive id.
    #[allow(non_camel_case_types)]
    #[derive(TypeName)]
    struct ab;

    #[allow(non_camel_case_types)]
    #[derive(TypeName)]
    struct ba;

    #[test]
    fn plugin_inserts_registry() {
        let mut app = App::new();
        app.add_plugins(TypeRegistryPlugin::new().with::<Health>().with::<Vec<Health>>());

        let registry = app.world().resource::<TypeRegistry>();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.name_of(type_id::<Health>() as u64), Some("Health"));
        assert!(registry.contains::<Vec<Health>>());
    }

    #[test]
    fn plugin_honors_collision_policy() {
        let mut app = App::new();
        app.add_plugins(
            TypeRegistryPlugin::new()
                .with::<ab>()
                .with::<ba>()
                .config(RegistryConfig {
                    on_collision: OnCollision::Warn,
                    ..RegistryConfig::default()
                }),
        );

        let registry = app.world().resource::<TypeRegistry>();
        assert_eq!(registry.collisions().len(), 1);
    }

    #[test]
    #[should_panic(expected = "Failed to build TypeRegistry")]
    fn plugin_panics_on_rejected_collision() {
        let mut app = App::new();
        app.add_plugins(TypeRegistryPlugin::new().with::<ab>().with::<ba>());
    }
}
