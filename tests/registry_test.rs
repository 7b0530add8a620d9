//! Registry usage with derived types and persisted entries.

use type_label::*;

#[derive(TypeName)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

#[derive(TypeName)]
pub enum Command {
    Move(Position),
    Stop,
}

#[derive(TypeName)]
pub struct Envelope<T>(pub T);

// Anagram pair.
#[allow(non_camel_case_types)]
#[derive(TypeName)]
pub struct Tag_xy;

#[allow(non_camel_case_types)]
#[derive(TypeName)]
pub struct Tag_yx;

#[test]
fn resolve_serialized_tags() {
    let mut registry = TypeRegistry::new();
    registry.register::<Position>().unwrap();
    registry.register::<Envelope<Command>>().unwrap();

    // A tag read off the wire resolves back to the name.
    let wire_tag = type_id::<Envelope<Command>>() as u64;
    assert_eq!(registry.name_of(wire_tag), Some("Envelope<Command>"));
    assert!(registry.contains::<Position>());
    assert!(!registry.contains::<Command>());
}

#[test]
fn register_returns_configured_key() {
    let mut checksums = TypeRegistry::new();
    let mut fingerprints = TypeRegistry::with_config(RegistryConfig {
        key: KeyKind::Fingerprint,
        ..RegistryConfig::default()
    });

    assert_eq!(
        checksums.register::<Position>().unwrap(),
        type_id::<Position>() as u64
    );
    assert_eq!(
        fingerprints.register::<Position>().unwrap(),
        type_hash::<Position>()
    );
}

#[test]
fn anagram_collision_policy() {
    let mut strict = TypeRegistry::new();
    strict.register::<Tag_xy>().unwrap();
    assert!(matches!(
        strict.register::<Tag_yx>(),
        Err(RegistryError::KeyCollision { .. })
    ));

    let mut lenient = TypeRegistry::with_config(RegistryConfig {
        on_collision: OnCollision::Warn,
        ..RegistryConfig::default()
    });
    lenient.register::<Tag_xy>().unwrap();
    lenient.register::<Tag_yx>().unwrap();
    assert_eq!(lenient.collisions().len(), 1);
    assert_eq!(lenient.collisions()[0].shadowed, "Tag_yx");
}

#[test]
fn entries_round_trip_through_json() {
    let registry = TypeRegistry::build(&[
        <Position as TypeName>::SHAPE,
        <Command as TypeName>::SHAPE,
        <*const Envelope<Position> as TypeName>::SHAPE,
    ])
    .unwrap();

    let json = serde_json::to_string(registry.entries()).unwrap();
    let entries: Vec<TypeEntry> = serde_json::from_str(&json).unwrap();
    let restored = TypeRegistry::from_entries(registry.config(), entries).unwrap();

    assert_eq!(restored, registry);
    assert_eq!(
        restored.entry("const Envelope<Position>*").map(|e| e.id),
        Some(type_id::<*const Envelope<Position>>())
    );
}

#[test]
fn config_from_json() {
    let config: RegistryConfig =
        serde_json::from_str(r#"{"key":"fingerprint","on_collision":"warn"}"#).unwrap();
    assert_eq!(
        config,
        RegistryConfig {
            key: KeyKind::Fingerprint,
            on_collision: OnCollision::Warn,
        }
    );
}
