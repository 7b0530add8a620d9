//! Specifier classification — leading `class `/`struct `/`enum ` tags.

use crate::signature::{bytes_eq, starts_with, trim};

/// Keyword tag a signature may carry in front of the type name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Specifier {
    #[default]
    None,
    Class,
    Struct,
    Enum,
}

impl Specifier {
    /// Candidates in classification order. The keywords are disjoint, so the
    /// order never decides between two matches.
    pub const CANDIDATES: [Specifier; 3] = [Specifier::Class, Specifier::Struct, Specifier::Enum];

    /// Keyword text including its trailing space (`""` for [`Specifier::None`]).
    pub const fn keyword(self) -> &'static str {
        match self {
            Specifier::None => "",
            Specifier::Class => "class ",
            Specifier::Struct => "struct ",
            Specifier::Enum => "enum ",
        }
    }

    /// Number of bytes to skip past the tag.
    #[inline]
    pub const fn len(self) -> usize {
        self.keyword().len()
    }

}

/// Classify a trimmed signature by exact prefix match.
///
/// A signature only matches a tag when it is strictly longer than the tag,
/// so a bare `"enum "` carries no type name and stays unclassified.
pub const fn classify(trimmed: &[u8]) -> Specifier {
    let mut i = 0;
    while i < Specifier::CANDIDATES.len() {
        let candidate = Specifier::CANDIDATES[i];
        let keyword = candidate.keyword().as_bytes();
        if trimmed.len() > keyword.len() && bytes_eq(trimmed.split_at(keyword.len()).0, keyword) {
            return candidate;
        }
        i += 1;
    }
    Specifier::None
}

/// Prefix `stringify!` keeps on raw identifiers (`r#match`).
const RAW_IDENT_PREFIX: &[u8] = b"r#";

/// Trimmed signature with its specifier tag and any raw-identifier prefix
/// removed.
pub const fn strip(trimmed: &[u8]) -> &[u8] {
    let name = trimmed.split_at(classify(trimmed).len()).1;
    if name.len() > RAW_IDENT_PREFIX.len() && starts_with(name, RAW_IDENT_PREFIX) {
        return name.split_at(RAW_IDENT_PREFIX.len()).1;
    }
    name
}

/// Trim the envelope of a raw signature and strip its specifier tag.
#[inline]
pub const fn stripped_signature(raw: &str) -> &[u8] {
    strip(trim(raw))
}
