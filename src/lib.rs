//! # Compile-time type labels (type-label)
//!
//! Provides a canonical, human-readable name and a numeric id for a type,
//! computed entirely during constant evaluation. No `TypeId`, no
//! `std::any::type_name`, no allocation: the name is an exactly sized byte
//! array embedded in the binary.
//!
//! ## Design
//!
//! Every name comes out of a two-pass pipeline over an immutable [`Shape`]:
//!
//! ```text
//! raw signature ─ trim ─ strip tag ─┐
//!                                   ├─ name_size ──► N
//! Const / Pointer / Reference ──────┤
//! Template { args } ────────────────┴─ render::<N> ──► FixedName<N> ──► id
//! ```
//!
//! The measuring pass ([`name_size`]) fixes the buffer size; the rendering pass
//! ([`render`]) fills a buffer of exactly that size and fails the build if
//! the two ever disagree.
//!
//! ## Usage
//!
//! ```
//! use type_label::{type_id, type_name, TypeName};
//!
//! #[derive(TypeName)]
//! struct Pair<A, B>(A, B);
//!
//! const NAME: type_label::FixedName<22> = type_name!(Pair<i32, *const f32>);
//! assert_eq!(NAME, "Pair<i32, const f32*>");
//!
//! const ID: usize = type_id::<Pair<i32, *const f32>>();
//! assert_eq!(ID, NAME.checksum());
//! ```

// Lets `#[derive(TypeName)]` refer to `::type_label` inside this crate.
extern crate self as type_label;

pub mod hash;
pub mod impls;
pub mod measure;
pub mod name;
pub mod registry;
pub mod render;
pub mod shape;
pub mod signature;
pub mod specifier;
pub mod traits;

#[cfg(feature = "bevy")]
pub mod bevy;

pub use hash::{checksum, digest, fingerprint, fnv1a_64, Digest};
pub use measure::name_size;
pub use name::FixedName;
pub use registry::{
    Collision, KeyKind, OnCollision, RegistryConfig, RegistryError, TypeEntry, TypeRegistry,
};
pub use render::{render, NameDisplay};
pub use shape::{Modifier, Shape};
pub use signature::{trim, SIGNATURE_PREFIX, SIGNATURE_SUFFIX};
pub use specifier::{classify, Specifier};
pub use traits::{name_len, type_hash, type_id, TypeName};

pub use type_label_macro::TypeName;

// Known answers for the built-in impls, checked at compile time.
const _: () = {
    assert!(name_len::<i32>() == 3);
    assert!(name_len::<*const i32>() == "const i32*".len());
    assert!(type_id::<u8>() == (b'u' as usize) + (b'8' as usize));
};
