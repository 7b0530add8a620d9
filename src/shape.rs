//! Type shapes — the immutable structural description behind every name.
//!
//! A [`Shape`] is what a [`TypeName`](crate::TypeName) impl hands to the
//! pipeline. Composite types nest shapes instead of text, so modifiers and
//! generic arguments are recovered exactly rather than reparsed:
//!
//! ```text
//! *const Vec<i32>
//!   Pointer { pointee:
//!     Const { inner:
//!       Template { signature: "struct Vec<T>", args: [
//!         Plain { signature: "i32" } ] } } }
//! ```

use crate::specifier::stripped_signature;

/// Structural description of a type.
///
/// `signature` fields hold raw signatures (see [`crate::signature`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A type with no modifier and no generic arguments.
    Plain { signature: &'static str },
    /// Const-qualified inner type, rendered `const T`.
    Const { inner: &'static Shape },
    /// Pointer to the pointee, rendered `T*`.
    Pointer { pointee: &'static Shape },
    /// Reference to the referent, rendered `T&`.
    Reference { referent: &'static Shape },
    /// Generic type applied to an ordered list of type arguments.
    Template {
        signature: &'static str,
        args: &'static [&'static Shape],
    },
}

/// Decoration wrapped around an inner name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    Const,
    Pointer,
    Reference,
}

impl Modifier {
    /// Text attached to the inner name.
    pub const fn decoration(self) -> &'static str {
        match self {
            Modifier::Const => "const ",
            Modifier::Pointer => "*",
            Modifier::Reference => "&",
        }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.decoration().len()
    }

    /// Whether the decoration goes before the inner name (only `const `).
    #[inline]
    pub const fn is_prefix(self) -> bool {
        matches!(self, Modifier::Const)
    }
}

impl Shape {
    /// Peel the outermost modifier.
    ///
    /// Checked in the order const, pointer, reference. Returns `None` for
    /// plain and template shapes, which end the recursion.
    pub const fn modifier(&self) -> Option<(Modifier, &'static Shape)> {
        match *self {
            Shape::Const { inner } => Some((Modifier::Const, inner)),
            Shape::Pointer { pointee } => Some((Modifier::Pointer, pointee)),
            Shape::Reference { referent } => Some((Modifier::Reference, referent)),
            Shape::Plain { .. } | Shape::Template { .. } => None,
        }
    }

    /// Ordered generic arguments; empty for anything that is not a template.
    pub const fn template_args(&self) -> &'static [&'static Shape] {
        match *self {
            Shape::Template { args, .. } => args,
            _ => &[],
        }
    }

    /// Number of generic arguments.
    #[inline]
    pub const fn arity(&self) -> usize {
        self.template_args().len()
    }

    /// Whether the shape renders through the template path.
    ///
    /// A template with no arguments renders as a plain type.
    #[inline]
    pub const fn is_template(&self) -> bool {
        self.arity() > 0
    }

    /// Raw signature of a plain or template shape.
    pub const fn signature(&self) -> Option<&'static str> {
        match *self {
            Shape::Plain { signature } | Shape::Template { signature, .. } => Some(signature),
            _ => None,
        }
    }

    /// Signature text after trimming and tag stripping.
    ///
    /// Empty for modifier shapes.
    pub const fn stripped(&self) -> &'static [u8] {
        match self.signature() {
            Some(raw) => stripped_signature(raw),
            None => &[],
        }
    }

    /// Template name without its argument list: the stripped signature up to
    /// the first `<`.
    pub const fn base_name(&self) -> &'static [u8] {
        let stripped = self.stripped();
        stripped
            .split_at(crate::signature::find_byte(stripped, b'<'))
            .0
    }
}
