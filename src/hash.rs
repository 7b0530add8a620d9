//! Identifier synthesis — numeric ids folded from rendered names.
//!
//! Two identifiers are derived from the bytes a shape renders to:
//!
//! - [`checksum`]: the additive sum of the byte values. This is the `id`
//!   contract. Equal names give equal ids, but any two names with the same
//!   byte sum collide, such as the anagrams `"ab"` and `"ba"`.
//! - [`fingerprint`]: FNV-1a over the same bytes. Order sensitive and far less
//!   collision prone; use it where the additive id is too weak.
//!
//! Neither needs a buffer: [`digest`] walks the shape in render order.

use crate::shape::Shape;

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// FNV-1a 64-bit hash — simple, fast, const-compatible.
pub const fn fnv1a_64(bytes: &[u8]) -> u64 {
    Digest::new().absorb(bytes).fnv
}

/// Running state of both identifiers over a byte stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digest {
    /// Additive checksum.
    pub sum: usize,
    /// FNV-1a state.
    pub fnv: u64,
    /// Bytes absorbed so far.
    pub len: usize,
}

impl Default for Digest {
    fn default() -> Self {
        Self::new()
    }
}

impl Digest {
    pub const fn new() -> Self {
        Self {
            sum: 0,
            fnv: FNV_OFFSET,
            len: 0,
        }
    }

    pub const fn absorb(mut self, bytes: &[u8]) -> Self {
        let mut i = 0;
        while i < bytes.len() {
            self.sum = self.sum.wrapping_add(bytes[i] as usize);
            self.fnv ^= bytes[i] as u64;
            self.fnv = self.fnv.wrapping_mul(FNV_PRIME);
            i += 1;
        }
        self.len += bytes.len();
        self
    }
}

/// Fold the rendered bytes of `shape` (terminator excluded) into `state`.
pub const fn digest(shape: &Shape, state: Digest) -> Digest {
    if let Some((modifier, inner)) = shape.modifier() {
        if modifier.is_prefix() {
            return digest(inner, state.absorb(modifier.decoration().as_bytes()));
        }
        return digest(inner, state).absorb(modifier.decoration().as_bytes());
    }

    if shape.is_template() {
        let args = shape.template_args();
        let mut state = state.absorb(shape.base_name()).absorb(b"<");
        let mut i = 0;
        while i < args.len() {
            if i > 0 {
                state = state.absorb(b", ");
            }
            state = digest(args[i], state);
            i += 1;
        }
        return state.absorb(b">");
    }

    state.absorb(shape.stripped())
}

/// Additive id: sum of the rendered name's byte values.
///
/// The terminator is part of the summed buffer but contributes zero.
#[inline]
pub const fn checksum(shape: &Shape) -> usize {
    digest(shape, Digest::new()).sum
}

/// FNV-1a 64 of the rendered name.
#[inline]
pub const fn fingerprint(shape: &Shape) -> u64 {
    digest(shape, Digest::new()).fnv
}
