//! Signature extraction — raw signatures and envelope trimming.
//!
//! Every type name starts life as a *raw signature*: the descriptive text of
//! the type wrapped in a fixed envelope.
//!
//! ```text
//! signature_of::<struct Pair<A, B>>()
//! └─ prefix ───┘└─ meaningful ───┘└┘ suffix
//! ```
//!
//! Raw signatures are produced by exactly two sources: `#[derive(TypeName)]`
//! and [`impl_type_name!`](crate::impl_type_name). Both go through
//! [`raw_signature!`](crate::raw_signature), so the envelope is spelled once.
//! [`trim`] strips it with fixed offsets; the self-check at the bottom of
//! this module fails the build if those offsets drift from the macro.

/// Envelope text preceding the meaningful part of a raw signature.
pub const SIGNATURE_PREFIX: &str = "signature_of::<";

/// Envelope text following the meaningful part of a raw signature.
pub const SIGNATURE_SUFFIX: &str = ">()";

/// Wrap literal parts in the raw signature envelope.
///
/// Parts are forwarded to `concat!`, so they must be literals or macros
/// expanding to literals (`stringify!`).
///
/// ```
/// const RAW: &str = type_label::raw_signature!("struct ", stringify!(Pair), "<A, B>");
/// assert_eq!(RAW, "signature_of::<struct Pair<A, B>>()");
/// ```
#[macro_export]
macro_rules! raw_signature {
    ($($part:tt)+) => {
        concat!("signature_of::<", $($part)+, ">()")
    };
}

/// Strip the envelope from a raw signature.
///
/// # Panics
///
/// Panics (at compile time, when used in a constant) if `raw` is not
/// wrapped in the envelope.
pub const fn trim(raw: &str) -> &[u8] {
    let bytes = raw.as_bytes();
    assert!(
        starts_with(bytes, SIGNATURE_PREFIX.as_bytes())
            && ends_with(bytes, SIGNATURE_SUFFIX.as_bytes())
            && bytes.len() >= SIGNATURE_PREFIX.len() + SIGNATURE_SUFFIX.len(),
        "raw signature is missing the signature_of::<...>() envelope"
    );
    let (_, rest) = bytes.split_at(SIGNATURE_PREFIX.len());
    let (meaningful, _) = rest.split_at(rest.len() - SIGNATURE_SUFFIX.len());
    meaningful
}

#[inline]
pub(crate) const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[inline]
pub(crate) const fn starts_with(haystack: &[u8], prefix: &[u8]) -> bool {
    if haystack.len() < prefix.len() {
        return false;
    }
    bytes_eq(haystack.split_at(prefix.len()).0, prefix)
}

#[inline]
pub(crate) const fn ends_with(haystack: &[u8], suffix: &[u8]) -> bool {
    if haystack.len() < suffix.len() {
        return false;
    }
    bytes_eq(haystack.split_at(haystack.len() - suffix.len()).1, suffix)
}

/// Position of the first `needle`, or `haystack.len()` if absent.
#[inline]
pub(crate) const fn find_byte(haystack: &[u8], needle: u8) -> usize {
    let mut i = 0;
    while i < haystack.len() {
        if haystack[i] == needle {
            return i;
        }
        i += 1;
    }
    haystack.len()
}

// Self-check: the trimming offsets must agree with `raw_signature!`.
const _: () = {
    let trimmed = trim(raw_signature!("struct Probe<T>"));
    assert!(
        bytes_eq(trimmed, b"struct Probe<T>"),
        "SIGNATURE_PREFIX/SIGNATURE_SUFFIX are out of sync with raw_signature!"
    );
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_removes_envelope() {
        assert_eq!(trim(raw_signature!("i32")), b"i32");
        assert_eq!(
            trim(raw_signature!("enum ", stringify!(Color))),
            b"enum Color"
        );
        assert_eq!(trim(raw_signature!("")), b"");
    }

    #[test]
    fn trim_keeps_inner_angle_brackets() {
        // The suffix starts with '>' too; only the envelope's own copy goes.
        assert_eq!(
            trim(raw_signature!("struct Vec<T>")),
            b"struct Vec<T>"
        );
    }

    #[test]
    #[should_panic(expected = "envelope")]
    fn trim_rejects_bare_text() {
        trim("struct Foo");
    }

    #[test]
    #[should_panic(expected = "envelope")]
    fn trim_rejects_missing_suffix() {
        trim("signature_of::<struct Foo");
    }

    #[test]
    fn byte_helpers() {
        assert!(starts_with(b"struct Foo", b"struct "));
        assert!(!starts_with(b"str", b"struct "));
        assert!(ends_with(b"Foo>()", b">()"));
        assert_eq!(find_byte(b"Vec<T>", b'<'), 3);
        assert_eq!(find_byte(b"i32", b'<'), 3);
    }
}
