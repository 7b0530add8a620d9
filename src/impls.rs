//! `TypeName` for primitives, std types, pointers and references.
//!
//! Raw pointers and references map onto the const/pointer/reference
//! modifiers:
//!
//! | Rust       | Rendered   |
//! |------------|------------|
//! | `*const T` | `const T*` |
//! | `*mut T`   | `T*`       |
//! | `&T`       | `const T&` |
//! | `&mut T`   | `T&`       |

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use crate::shape::Shape;
use crate::traits::TypeName;

/// Implement [`TypeName`] for types declared elsewhere.
///
/// ```
/// mod foreign {
///     pub struct Handle;
///     pub enum State { On, Off }
///     pub struct Slot<K, V>(pub K, pub V);
/// }
/// use foreign::{Handle, Slot, State};
///
/// type_label::impl_type_name!(struct Handle);
/// type_label::impl_type_name!(enum State);
/// type_label::impl_type_name!(struct Slot<K, V>);
///
/// assert_eq!(type_label::type_name!(Slot<Handle, State>), "Slot<Handle, State>");
/// ```
///
/// Untagged idents produce signatures without a specifier, as used for
/// primitives: `impl_type_name!(u8, u16)`.
#[macro_export]
macro_rules! impl_type_name {
    (struct $($rest:tt)+) => {
        $crate::impl_type_name!(@tagged "struct ", $($rest)+);
    };
    (enum $($rest:tt)+) => {
        $crate::impl_type_name!(@tagged "enum ", $($rest)+);
    };
    (@tagged $tag:literal, $name:ident < $first:ident $(, $rest:ident)* $(,)? >) => {
        impl<$first: $crate::TypeName $(, $rest: $crate::TypeName)*> $crate::TypeName
            for $name<$first $(, $rest)*>
        {
            const SHAPE: &'static $crate::Shape = &$crate::Shape::Template {
                signature: $crate::raw_signature!(
                    $tag,
                    stringify!($name),
                    "<",
                    stringify!($first)
                    $(, ", ", stringify!($rest))*,
                    ">"
                ),
                args: &[
                    <$first as $crate::TypeName>::SHAPE
                    $(, <$rest as $crate::TypeName>::SHAPE)*
                ],
            };
        }
    };
    (@tagged $tag:literal, $name:ident) => {
        impl $crate::TypeName for $name {
            const SHAPE: &'static $crate::Shape = &$crate::Shape::Plain {
                signature: $crate::raw_signature!($tag, stringify!($name)),
            };
        }
    };
    ($($name:ident),+ $(,)?) => {
        $(
            impl $crate::TypeName for $name {
                const SHAPE: &'static $crate::Shape = &$crate::Shape::Plain {
                    signature: $crate::raw_signature!(stringify!($name)),
                };
            }
        )+
    };
}

impl_type_name!(bool, char, str, f32, f64);
impl_type_name!(i8, i16, i32, i64, i128, isize);
impl_type_name!(u8, u16, u32, u64, u128, usize);

impl_type_name!(struct String);
impl_type_name!(struct Vec<T>);
impl_type_name!(struct VecDeque<T>);
impl_type_name!(struct HashSet<T>);
impl_type_name!(struct BTreeSet<T>);
impl_type_name!(struct HashMap<K, V>);
impl_type_name!(struct BTreeMap<K, V>);
impl_type_name!(enum Option<T>);
impl_type_name!(enum Result<T, E>);

// Pointer-like wrappers accept unsized arguments (`Box<str>`), which the
// macro's implicit `Sized` bound would reject.
macro_rules! impl_unsized_wrapper {
    ($($name:ident),+) => {
        $(
            impl<T: TypeName + ?Sized> TypeName for $name<T> {
                const SHAPE: &'static Shape = &Shape::Template {
                    signature: crate::raw_signature!("struct ", stringify!($name), "<T>"),
                    args: &[T::SHAPE],
                };
            }
        )+
    };
}

impl_unsized_wrapper!(Box, Rc, Arc, PhantomData);

impl<T: TypeName + ?Sized> TypeName for *const T {
    const SHAPE: &'static Shape = &Shape::Pointer {
        pointee: &Shape::Const { inner: T::SHAPE },
    };
}

impl<T: TypeName + ?Sized> TypeName for *mut T {
    const SHAPE: &'static Shape = &Shape::Pointer { pointee: T::SHAPE };
}

impl<T: TypeName + ?Sized> TypeName for &T {
    const SHAPE: &'static Shape = &Shape::Reference {
        referent: &Shape::Const { inner: T::SHAPE },
    };
}

impl<T: TypeName + ?Sized> TypeName for &mut T {
    const SHAPE: &'static Shape = &Shape::Reference { referent: T::SHAPE };
}
