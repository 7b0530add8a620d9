//! `FixedName` — the exact-fit, NUL-terminated name buffer.

use core::ffi::CStr;
use core::fmt;
use core::ops::Deref;

use serde::{Serialize, Serializer};
use zerocopy::{Immutable, IntoBytes, KnownLayout};

/// A rendered type name stored inline as `N` bytes: the name followed by a
/// single NUL.
///
/// Only [`render`](crate::render::render) creates these, so the bytes before
/// the terminator are always the UTF-8 text of a name and `N >= 1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, IntoBytes, Immutable, KnownLayout)]
#[repr(transparent)]
pub struct FixedName<const N: usize>([u8; N]);

impl<const N: usize> FixedName<N> {
    #[inline]
    pub(crate) const fn from_array(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Buffer size in bytes, terminator included.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Name length in bytes, terminator excluded.
    #[inline]
    pub const fn len(&self) -> usize {
        N - 1
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 1
    }

    /// The full buffer, terminator included.
    #[inline]
    pub const fn as_bytes_with_nul(&self) -> &[u8; N] {
        &self.0
    }

    /// The name text.
    pub const fn as_str(&self) -> &str {
        match core::str::from_utf8(self.0.split_at(N - 1).0) {
            Ok(text) => text,
            Err(_) => panic!("rendered names are assembled from UTF-8 signature text"),
        }
    }

    /// The name as a C string, or `None` if a signature contained a NUL.
    pub fn as_c_str(&self) -> Option<&CStr> {
        CStr::from_bytes_with_nul(&self.0).ok()
    }

    /// Sum of all byte values, terminator included.
    ///
    /// Equals [`checksum`](crate::hash::checksum) of the shape it was
    /// rendered from.
    pub const fn checksum(&self) -> usize {
        let mut sum: usize = 0;
        let mut i = 0;
        while i < N {
            sum = sum.wrapping_add(self.0[i] as usize);
            i += 1;
        }
        sum
    }
}

impl<const N: usize> Deref for FixedName<N> {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> AsRef<str> for FixedName<N> {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> PartialEq<str> for FixedName<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for FixedName<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> fmt::Display for FixedName<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for FixedName<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> Serialize for FixedName<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
