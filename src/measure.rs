//! Size calculation — the first of the two passes.
//!
//! [`name_size`] computes the exact byte length of a rendered name before any
//! buffer exists. [`render`](crate::render::render) walks shapes in the same
//! order and asserts it lands on the measured length.

use crate::shape::Shape;

/// `", "` between template arguments.
pub const SEPARATOR_LEN: usize = 2;

/// Exact length of the rendered name, plus one when `terminator` is set.
///
/// - modifier: inner length + decoration length
/// - template: base + `<` + Σ args + separators + `>`
/// - plain: stripped signature length
pub const fn name_size(shape: &Shape, terminator: bool) -> usize {
    let nul = if terminator { 1 } else { 0 };

    if let Some((modifier, inner)) = shape.modifier() {
        return name_size(inner, false) + modifier.len() + nul;
    }

    if shape.is_template() {
        let args = shape.template_args();
        let mut len = shape.base_name().len() + 1;
        let mut i = 0;
        while i < args.len() {
            if i > 0 {
                len += SEPARATOR_LEN;
            }
            len += name_size(args[i], false);
            i += 1;
        }
        return len + 1 + nul;
    }

    shape.stripped().len() + nul
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::fixtures::*;

    #[test]
    fn plain_length_excludes_tag() {
        assert_eq!(name_size(&INT, false), 3);
        assert_eq!(name_size(&INT, true), 4);
        assert_eq!(name_size(&WIDGET, false), "Widget".len());
    }

    #[test]
    fn modifiers_add_decoration() {
        assert_eq!(name_size(&CONST_INT, false), "const int".len());
        assert_eq!(name_size(&CONST_INT_PTR, false), "const int*".len());
        assert_eq!(name_size(&CONST_INT_PTR, true), "const int*".len() + 1);
        assert_eq!(name_size(&INT_REF, false), "int&".len());
    }

    #[test]
    fn templates_count_brackets_and_separators() {
        assert_eq!(name_size(&BOX_INT, false), "Box<int>".len());
        assert_eq!(name_size(&PAIR_INT_FLOAT, false), "Pair<int, float>".len());
        assert_eq!(name_size(&VEC_VEC_INT, true), "vector<vector<int>>".len() + 1);
        assert_eq!(
            name_size(&MIXED, false),
            "Pair<const int*, vector<vector<int>>>".len()
        );
    }

    #[test]
    fn argumentless_template_measures_as_plain() {
        assert_eq!(name_size(&EMPTY_TEMPLATE, false), "Unit".len());
    }

    #[test]
    fn terminator_is_added_once() {
        for shape in [&INT, &CONST_INT_PTR, &PAIR_INT_FLOAT, &MIXED] {
            assert_eq!(name_size(shape, true), name_size(shape, false) + 1);
        }
    }
}
