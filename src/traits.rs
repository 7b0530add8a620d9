//! The `TypeName` trait and its const accessors.

use crate::hash::{checksum, fingerprint};
use crate::measure::name_size;
use crate::render::NameDisplay;
use crate::shape::Shape;

/// A type with a compile-time name.
///
/// Implemented by `#[derive(TypeName)]`, by
/// [`impl_type_name!`](crate::impl_type_name), and in this crate for
/// primitives, common std types, raw pointers and references.
///
/// ```
/// use type_label::{type_id, type_name, TypeName};
///
/// #[derive(TypeName)]
/// struct Pair<A, B>(A, B);
///
/// assert_eq!(type_name!(Pair<i32, f32>), "Pair<i32, f32>");
/// assert_eq!(type_id::<Pair<i32, f32>>(), type_name!(Pair<i32, f32>).checksum());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no compile-time type name",
    label = "missing `TypeName` impl",
    note = "derive it with `#[derive(TypeName)]` or declare it with `impl_type_name!`",
    note = "function pointers, arrays, slices, tuples and trait objects have no name shape"
)]
pub trait TypeName {
    /// Structural description of `Self`.
    const SHAPE: &'static Shape;

    /// The rendered name as a [`Display`](core::fmt::Display) value.
    #[inline]
    fn display() -> NameDisplay {
        NameDisplay::new(Self::SHAPE)
    }
}

/// Length of `T`'s rendered name, terminator excluded.
#[inline]
pub const fn name_len<T: TypeName + ?Sized>() -> usize {
    name_size(T::SHAPE, false)
}

/// Additive id of `T`'s rendered name.
///
/// Equal for equal names; NOT distinct for distinct names. Anagrams such as
/// `ab` and `ba` share an id. See [`type_hash`] for the stronger variant.
#[inline]
pub const fn type_id<T: TypeName + ?Sized>() -> usize {
    checksum(T::SHAPE)
}

/// FNV-1a 64 fingerprint of `T`'s rendered name.
#[inline]
pub const fn type_hash<T: TypeName + ?Sized>() -> u64 {
    fingerprint(T::SHAPE)
}
