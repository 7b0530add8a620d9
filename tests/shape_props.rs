//! Property tests: the measuring pass, the renderers and the digest must
//! agree on arbitrary shape trees.

use proptest::prelude::*;
use type_label::*;

fn leak_str(text: String) -> &'static str {
    Box::leak(text.into_boxed_str())
}

fn leak(shape: Shape) -> &'static Shape {
    Box::leak(Box::new(shape))
}

fn enveloped(text: &str) -> &'static str {
    leak_str(format!("{SIGNATURE_PREFIX}{text}{SIGNATURE_SUFFIX}"))
}

fn arb_leaf() -> impl Strategy<Value = &'static Shape> {
    prop::sample::select(vec![
        "int",
        "float",
        "u8",
        "struct Widget",
        "enum Color",
        "class Node",
        "structure",
    ])
    .prop_map(|text| {
        leak(Shape::Plain {
            signature: enveloped(text),
        })
    })
}

fn arb_shape() -> impl Strategy<Value = &'static Shape> {
    arb_leaf().prop_recursive(5, 48, 3, |inner| {
        prop_oneof![
            inner
                .clone()
                .prop_map(|s| leak(Shape::Const { inner: s })),
            inner
                .clone()
                .prop_map(|s| leak(Shape::Pointer { pointee: s })),
            inner
                .clone()
                .prop_map(|s| leak(Shape::Reference { referent: s })),
            (
                prop::sample::select(vec![
                    "struct Pair<A, B>",
                    "class vector<T>",
                    "enum Either<L, R>",
                    "Tuple<T>",
                ]),
                prop::collection::vec(inner, 1..4),
            )
                .prop_map(|(text, args)| {
                    leak(Shape::Template {
                        signature: enveloped(text),
                        args: Box::leak(args.into_boxed_slice()),
                    })
                }),
        ]
    })
}

fn rendered(shape: &'static Shape) -> String {
    NameDisplay::new(shape).to_string()
}

proptest! {
    /// The measured size is the length of what gets written.
    #[test]
    fn prop_measure_matches_render(shape in arb_shape()) {
        let text = rendered(shape);
        prop_assert_eq!(text.len(), name_size(shape, false));
        prop_assert_eq!(text.len() + 1, name_size(shape, true));
    }

    /// Ids are folds over exactly the rendered bytes.
    #[test]
    fn prop_digest_matches_render(shape in arb_shape()) {
        let text = rendered(shape);
        let sum: usize = text.bytes().map(usize::from).sum();
        prop_assert_eq!(checksum(shape), sum);
        prop_assert_eq!(fingerprint(shape), fnv1a_64(text.as_bytes()));
        prop_assert_eq!(digest(shape, Digest::new()).len, text.len());
    }

    /// Modifiers decorate the inner name and nothing else.
    #[test]
    fn prop_modifiers_decorate_inner(shape in arb_shape()) {
        if let Some((modifier, inner)) = shape.modifier() {
            let expected = if modifier.is_prefix() {
                format!("{}{}", modifier.decoration(), rendered(inner))
            } else {
                format!("{}{}", rendered(inner), modifier.decoration())
            };
            prop_assert_eq!(rendered(shape), expected);
        }
    }

    /// Templates join their rendered arguments with ", " inside brackets.
    #[test]
    fn prop_templates_join_arguments(shape in arb_shape()) {
        if shape.is_template() {
            let args: Vec<String> = shape.template_args().iter().map(|&a| rendered(a)).collect();
            let base = String::from_utf8(shape.base_name().to_vec()).unwrap();
            prop_assert_eq!(rendered(shape), format!("{}<{}>", base, args.join(", ")));
            prop_assert!(!rendered(shape).contains("<, "));
        }
    }

    /// Rendering is deterministic.
    #[test]
    fn prop_render_is_idempotent(shape in arb_shape()) {
        prop_assert_eq!(rendered(shape), rendered(shape));
        prop_assert_eq!(checksum(shape), checksum(shape));
    }
}
