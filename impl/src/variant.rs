use proc_macro2::{Span, TokenStream, TokenTree};
use quote::{quote, ToTokens};
use syn::{Data, DeriveInput, Error, Fields, Generics, Ident, Type};

use crate::args::Args;

pub fn expand(input: &DeriveInput) -> Result<TokenStream, Error> {
    let data = match &input.data {
        Data::Enum(data) => data,
        Data::Struct(data) => {
            return Err(Error::new(
                data.struct_token.span,
                "`Variant` can only be derived for enums",
            ))
        }
        Data::Union(data) => {
            return Err(Error::new(
                data.union_token.span,
                "`Variant` can only be derived for enums",
            ))
        }
    };

    if data.variants.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "a variant needs at least one alternative",
        ));
    }

    let krate = Args::from_attrs(&input.attrs)?.krate();
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut seen: Vec<(String, &Type)> = Vec::with_capacity(data.variants.len());
    let mut impls = TokenStream::new();

    for variant in &data.variants {
        let field = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0],
            _ => {
                return Err(Error::new_spanned(
                    variant,
                    "each alternative must be a tuple variant holding exactly one value",
                ))
            }
        };

        let ty = &field.ty;
        let key = ty.to_token_stream().to_string();
        if seen.iter().any(|(seen_key, _)| *seen_key == key) {
            return Err(Error::new_spanned(
                ty,
                "this type is already held by another alternative",
            ));
        }

        // `impl SwitchCast<P>` overlaps with the impl for any payload that doesn't mention `P`.
        for (_, other) in &seen {
            let overlaps = match (
                bare_param(ty, &input.generics),
                bare_param(other, &input.generics),
            ) {
                (Some(param), _) => !mentions(other, param),
                (None, Some(param)) => !mentions(ty, param),
                (None, None) => false,
            };
            if overlaps {
                return Err(Error::new_spanned(
                    ty,
                    format!(
                        "this alternative may hold the same type as `{}` once generic \
                         parameters are substituted",
                        other.to_token_stream(),
                    ),
                ));
            }
        }
        seen.push((key, ty));

        let variant_ident = &variant.ident;
        impls.extend(quote! {
            impl #impl_generics #krate::SwitchCast<#ty> for #ident #ty_generics #where_clause {
                #[inline]
                fn switch_cast(&self) -> ::std::option::Option<&#ty> {
                    #[allow(unreachable_patterns)]
                    match self {
                        Self::#variant_ident(__value) => ::std::option::Option::Some(__value),
                        _ => ::std::option::Option::None,
                    }
                }
            }
        });
    }

    Ok(impls)
}

/// The type parameter of `generics` that `ty` is, if it is one on its own.
fn bare_param<'a>(ty: &Type, generics: &'a Generics) -> Option<&'a Ident> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let ident = path.path.get_ident()?;
    generics
        .type_params()
        .map(|param| &param.ident)
        .find(|param| *param == ident)
}

fn mentions(ty: &Type, param: &Ident) -> bool {
    fn walk(tokens: TokenStream, param: &Ident) -> bool {
        tokens.into_iter().any(|token| match token {
            TokenTree::Ident(ident) => ident == *param,
            TokenTree::Group(group) => walk(group.stream(), param),
            _ => false,
        })
    }
    walk(ty.to_token_stream(), param)
}
