//! Name rendering — the second pass.
//!
//! [`render`] fills a [`FixedName<N>`] whose capacity must equal
//! [`name_size(shape, true)`](crate::measure::name_size). The recursion mirrors
//! the measuring pass exactly; both asserts below turn any drift into a
//! compile-time error when rendering happens in a constant.

use core::fmt;

use crate::measure::name_size;
use crate::name::FixedName;
use crate::shape::Shape;

/// Render `shape` into an exactly sized, NUL-terminated buffer.
///
/// Usually reached through [`type_name!`](crate::type_name), which computes
/// `N` for you.
///
/// # Panics
///
/// Panics if `N` differs from `name_size(shape, true)`.
pub const fn render<const N: usize>(shape: &Shape) -> FixedName<N> {
    let measured = name_size(shape, true);
    assert!(N == measured, "name buffer capacity must equal the measured name size");
    let mut buf = [0u8; N];
    let end = write_shape(shape, &mut buf, 0);
    assert!(end + 1 == N, "renderer and size calculator disagree");
    FixedName::from_array(buf)
}

const fn write_shape(shape: &Shape, buf: &mut [u8], at: usize) -> usize {
    if let Some((modifier, inner)) = shape.modifier() {
        if modifier.is_prefix() {
            let at = write_bytes(buf, at, modifier.decoration().as_bytes());
            return write_shape(inner, buf, at);
        }
        let at = write_shape(inner, buf, at);
        return write_bytes(buf, at, modifier.decoration().as_bytes());
    }

    if shape.is_template() {
        let args = shape.template_args();
        let mut at = write_bytes(buf, at, shape.base_name());
        at = write_bytes(buf, at, b"<");
        let mut i = 0;
        while i < args.len() {
            if i > 0 {
                at = write_bytes(buf, at, b", ");
            }
            at = write_shape(args[i], buf, at);
            i += 1;
        }
        return write_bytes(buf, at, b">");
    }

    write_bytes(buf, at, shape.stripped())
}

const fn write_bytes(buf: &mut [u8], at: usize, bytes: &[u8]) -> usize {
    let mut i = 0;
    while i < bytes.len() {
        buf[at + i] = bytes[i];
        i += 1;
    }
    at + bytes.len()
}

/// Render a type's name into a constant [`FixedName`].
///
/// Both passes run in constant evaluation; the result is an ordinary
/// constant embedded in the binary.
///
/// ```
/// use type_label::type_name;
///
/// const NAME: type_label::FixedName<11> = type_name!(*const i32);
/// assert_eq!(NAME, "const i32*");
/// assert_eq!(type_name!(Option<Vec<u8>>), "Option<Vec<u8>>");
/// ```
///
/// `T` must be a concrete type. Inside generic code, where the buffer size
/// cannot be named, use [`TypeName::display`](crate::TypeName::display).
#[macro_export]
macro_rules! type_name {
    ($ty:ty) => {{
        const SHAPE: &'static $crate::Shape = <$ty as $crate::TypeName>::SHAPE;
        const NAME: $crate::FixedName<{ $crate::name_size(SHAPE, true) }> = $crate::render(SHAPE);
        NAME
    }};
}

/// Allocation-free [`Display`](fmt::Display) of a shape's rendered name.
///
/// Writes the same bytes as [`render`], for contexts where the buffer size
/// cannot be a constant (generic functions, logging).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameDisplay {
    shape: &'static Shape,
}

impl NameDisplay {
    #[inline]
    pub const fn new(shape: &'static Shape) -> Self {
        Self { shape }
    }

    #[inline]
    pub const fn shape(&self) -> &'static Shape {
        self.shape
    }
}

fn fmt_shape(shape: &Shape, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some((modifier, inner)) = shape.modifier() {
        if modifier.is_prefix() {
            f.write_str(modifier.decoration())?;
            return fmt_shape(inner, f);
        }
        fmt_shape(inner, f)?;
        return f.write_str(modifier.decoration());
    }

    if shape.is_template() {
        fmt_bytes(shape.base_name(), f)?;
        f.write_str("<")?;
        for (i, arg) in shape.template_args().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt_shape(arg, f)?;
        }
        return f.write_str(">");
    }

    fmt_bytes(shape.stripped(), f)
}

fn fmt_bytes(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // Signatures are `&str` and we only ever cut them at ASCII bytes.
    match core::str::from_utf8(bytes) {
        Ok(text) => f.write_str(text),
        Err(_) => Err(fmt::Error),
    }
}

impl fmt::Display for NameDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_shape(self.shape, f)
    }
}
