use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, spanned::Spanned, Error, ItemImpl, ItemTrait, TraitItem, WherePredicate};

use crate::{args::Args, linker, parse::Item};

/// Hidden trait method every registered impl points its linker entry at.
const DESCRIPTOR_FN: &str = "__typeswitch_descriptor";

pub fn expand_trait(item: &mut ItemTrait, args: &Args) -> Result<TokenStream, Error> {
    if let Some(first_const_param) = item.generics.const_params().next() {
        return Err(Error::new(
            first_const_param.span(),
            "const generics aren't allowed for dyncastable traits",
        ));
    }

    if let Some(first_lifetime_param) = item.generics.lifetimes().next() {
        return Err(Error::new(
            first_lifetime_param.span(),
            "lifetime generics aren't allowed for dyncastable traits",
        ));
    }

    let krate = args.krate();

    let predicates = item
        .generics
        .type_params()
        .map(|type_param| {
            let ty = &type_param.ident;
            let predicate: WherePredicate = parse_quote! {
                #ty: 'static
            };
            predicate
        })
        .collect::<Vec<_>>();
    item.generics
        .make_where_clause()
        .predicates
        .extend(predicates);

    let trait_ident = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let dyn_trait = quote!(dyn #trait_ident #ty_generics);

    let descriptor_fn = syn::Ident::new(DESCRIPTOR_FN, trait_ident.span());
    let descriptor_item: TraitItem = parse_quote! {
        #[doc(hidden)]
        #[allow(dead_code)]
        fn #descriptor_fn() -> #krate::private::Descriptor
        where
            Self: 'static + ::std::marker::Sized,
        {
            #krate::private::Descriptor::new::<#dyn_trait>(
                ::std::any::TypeId::of::<Self>(),
                ::std::any::TypeId::of::<#dyn_trait>(),
                |__ptr: *const ()| __ptr as *const Self as *const #dyn_trait,
            )
        }
    };

    let expanded = quote! {
        impl #impl_generics #krate::private::Dyncast for #dyn_trait #where_clause {
            fn dyncast_from(
                __source: &dyn ::std::any::Any,
            ) -> ::std::option::Option<&Self> {
                let __descriptor = #krate::private::Global::singleton().lookup(
                    ::std::any::TypeId::of::<Self>(),
                    ::std::any::Any::type_id(__source),
                )?;

                // SAFETY: The descriptor was registered for `Self` and the concrete type of
                // `__source`, so the attached vtable matches the data pointer.
                ::std::option::Option::Some(unsafe {
                    &*(__descriptor.attach_vtable_fn::<Self>())(
                        __source as *const dyn ::std::any::Any as *const (),
                    )
                })
            }
        }
    };

    item.items.push(descriptor_item);

    Ok(expanded)
}

pub fn expand_impl(item: &ItemImpl, args: &Args) -> Result<TokenStream, Error> {
    if let Some(span) = item
        .generics
        .const_params()
        .next()
        .map(|first_const_param| first_const_param.span())
        .or_else(|| {
            item.generics
                .type_params()
                .next()
                .map(|first_type_param| first_type_param.span())
        })
        .or_else(|| {
            item.generics
                .lifetimes()
                .next()
                .map(|first_lifetime_param| first_lifetime_param.span())
        })
    {
        return Err(Error::new(
            span,
            "generics aren't allowed for dyncastable trait impls",
        ));
    }

    let trait_path = match &item.trait_ {
        Some((None, path, _)) => path,
        _ => {
            return Err(Error::new(
                item.impl_token.span,
                "inherent impls are invalid here",
            ))
        }
    };
    let self_ty = &*item.self_ty;
    let krate = args.krate();
    let descriptor_fn = syn::Ident::new(DESCRIPTOR_FN, trait_path.span());

    let elf_section = linker::elf::SECTION;
    let macho_section = linker::macho::SECTION;
    let windows_section = linker::windows::SECTION;

    Ok(quote! {
        const _: () = {
            #[cfg_attr(
                any(target_os = "macos", target_os = "ios", target_os = "tvos"),
                link_section = #macho_section
            )]
            #[cfg_attr(
                any(
                    target_os = "none",
                    target_os = "linux",
                    target_os = "android",
                    target_os = "freebsd"
                ),
                link_section = #elf_section
            )]
            #[cfg_attr(
                target_os = "windows",
                link_section = #windows_section
            )]
            #[used]
            static TYPESWITCH_ENTRY: #krate::private::Entry = #krate::private::Entry::new(
                <#self_ty as #trait_path>::#descriptor_fn
            );
        };
    })
}

pub fn expand(item: &mut Item, args: &Args) -> Result<TokenStream, Error> {
    match item {
        Item::Trait(item) => expand_trait(item, args),
        Item::Impl(item) => expand_impl(item, args),
    }
}
