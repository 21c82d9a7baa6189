use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

mod args;
mod dyncast;
mod linker;
mod parse;
mod variant;

#[proc_macro_attribute]
pub fn dyncast(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as args::Args);
    let mut item = parse_macro_input!(input as parse::Item);
    let expanded = match dyncast::expand(&mut item, &args) {
        Ok(expanded) => expanded,
        Err(err) => err.to_compile_error(),
    };
    TokenStream::from(quote! {
        #item
        #expanded
    })
}

#[proc_macro_derive(Variant, attributes(typeswitch))]
pub fn derive_variant(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let expanded = match variant::expand(&input) {
        Ok(expanded) => expanded,
        Err(err) => err.to_compile_error(),
    };
    TokenStream::from(expanded)
}
