use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{
    parse::{Error, Parse, ParseStream},
    Attribute, Path, Token,
};

#[derive(Clone, Default)]
pub struct Args {
    pub krate: Option<Path>,
}

impl Args {
    fn try_parse(input: ParseStream) -> Result<Self, Error> {
        let mut krate = None;

        if input.peek(Token![crate]) {
            input.parse::<Token![crate]>()?;
            input.parse::<Token![=]>()?;
            krate = Some(input.call(Path::parse_mod_style)?);
        }

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }

        Ok(Self { krate })
    }

    /// Collects the `#[typeswitch(..)]` helper attributes of a derive input.
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut args = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("typeswitch")) {
            let parsed = attr.parse_args::<Self>()?;
            if parsed.krate.is_some() {
                args.krate = parsed.krate;
            }
        }
        Ok(args)
    }

    /// Path of the runtime crate, `::typeswitch` unless overridden with `crate = ..`.
    pub fn krate(&self) -> TokenStream {
        match &self.krate {
            Some(path) => path.to_token_stream(),
            None => quote!(::typeswitch),
        }
    }
}

impl Parse for Args {
    fn parse(input: ParseStream) -> Result<Self, Error> {
        match Self::try_parse(input) {
            Ok(args) if input.is_empty() => Ok(args),
            Ok(_) => Err(Error::new(input.span(), "unexpected arguments")),
            Err(err) => Err(err),
        }
    }
}
