use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_quote, Data, DeriveInput, GenericParam, Ident, LitStr, Result};

use proc_macro_crate::{crate_name, FoundCrate};

/// Parsed `#[type_name(...)]` attributes.
#[derive(Default)]
struct TypeNameAttrs {
    /// `#[type_name(rename = "Name")]`: label to use instead of the ident
    rename: Option<LitStr>,
}

fn parse_attrs(input: &DeriveInput) -> Result<TypeNameAttrs> {
    let mut result = TypeNameAttrs::default();

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("type_name")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                let text = value.value();
                if text.is_empty() || text.contains(['<', '>', ',']) {
                    return Err(syn::Error::new(
                        value.span(),
                        "renamed type name must be non-empty and contain no `<`, `>` or `,`",
                    ));
                }
                result.rename = Some(value);
                Ok(())
            } else {
                Err(meta.error("unsupported type_name attribute, expected `rename = \"...\"`"))
            }
        })?;
    }

    Ok(result)
}

// =============================================================================
// Crate path resolution
// =============================================================================

fn type_label_crate_path() -> TokenStream2 {
    match crate_name("type-label") {
        Ok(FoundCrate::Itself) => {
            quote!(::type_label)
        }
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Err(_) => quote!(::type_label),
    }
}

// =============================================================================
// Code generation
// =============================================================================

/// Specifier keyword the raw signature starts with.
fn specifier_keyword(input: &DeriveInput) -> Result<&'static str> {
    match &input.data {
        Data::Struct(_) => Ok("struct "),
        Data::Enum(_) => Ok("enum "),
        Data::Union(u) => Err(syn::Error::new_spanned(
            u.union_token,
            "TypeName cannot be derived for unions",
        )),
    }
}

/// Type parameters in declaration order. Lifetimes are erased from names;
/// const parameters have no name shape and are rejected.
fn type_params(input: &DeriveInput) -> Result<Vec<Ident>> {
    let mut params = Vec::new();
    for param in &input.generics.params {
        match param {
            GenericParam::Type(ty) => params.push(ty.ident.clone()),
            GenericParam::Lifetime(_) => {}
            GenericParam::Const(c) => {
                return Err(syn::Error::new_spanned(
                    c,
                    "TypeName does not support const generic parameters",
                ));
            }
        }
    }
    Ok(params)
}

/// Raw signature text (without envelope): `struct Pair<A, B>`.
fn signature_text(keyword: &str, name: &str, params: &[Ident]) -> String {
    if params.is_empty() {
        return format!("{}{}", keyword, name);
    }
    let args: Vec<String> = params.iter().map(|p| p.unraw().to_string()).collect();
    format!("{}{}<{}>", keyword, name, args.join(", "))
}

/// Generate the `TypeName` impl.
///
/// Example:
/// ```ignore
/// #[derive(TypeName)]
/// struct Pair<A, B>(A, B);
///
/// // Generates:
/// impl<A, B> ::type_label::TypeName for Pair<A, B>
/// where
///     A: ::type_label::TypeName,
///     B: ::type_label::TypeName,
/// {
///     const SHAPE: &'static ::type_label::Shape = &::type_label::Shape::Template {
///         signature: ::type_label::raw_signature!("struct Pair<A, B>"),
///         args: &[
///             <A as ::type_label::TypeName>::SHAPE,
///             <B as ::type_label::TypeName>::SHAPE,
///         ],
///     };
/// }
/// ```
fn expand(input: &DeriveInput, krate: &TokenStream2) -> Result<TokenStream2> {
    let attrs = parse_attrs(input)?;
    let keyword = specifier_keyword(input)?;
    let params = type_params(input)?;

    let name = match &attrs.rename {
        Some(lit) => lit.value(),
        None => input.ident.unraw().to_string(),
    };
    let signature = LitStr::new(&signature_text(keyword, &name, &params), Span::call_site());

    let shape = if params.is_empty() {
        quote! {
            #krate::Shape::Plain {
                signature: #krate::raw_signature!(#signature),
            }
        }
    } else {
        quote! {
            #krate::Shape::Template {
                signature: #krate::raw_signature!(#signature),
                args: &[#(<#params as #krate::TypeName>::SHAPE),*],
            }
        }
    };

    let mut generics = input.generics.clone();
    {
        let where_clause = generics.make_where_clause();
        for param in &params {
            where_clause
                .predicates
                .push(parse_quote!(#param: #krate::TypeName));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let ident = &input.ident;

    Ok(quote! {
        impl #impl_generics #krate::TypeName for #ident #ty_generics #where_clause {
            const SHAPE: &'static #krate::Shape = &#shape;
        }
    })
}

// =============================================================================
// Entry point
// =============================================================================

/// Derive a compile-time name for a struct or enum.
///
/// Type parameters must implement `TypeName` themselves; they become the
/// ordered argument list of the name (`Pair<i32, f32>`). Lifetimes are
/// ignored. Unions and const generic parameters are rejected.
///
/// `#[type_name(rename = "Label")]` pins the label independently of the
/// Rust identifier.
#[proc_macro_derive(TypeName, attributes(type_name))]
pub fn derive_type_name(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let krate = type_label_crate_path();

    expand(&input, &krate)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
