use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::parse::{Error, Parse, ParseStream};
use syn::{Attribute, ItemImpl, ItemTrait, Token};

/// The two kinds of items `#[dyncast]` accepts.
pub enum Item {
    Trait(ItemTrait),
    Impl(ItemImpl),
}

impl Parse for Item {
    fn parse(input: ParseStream) -> Result<Self, Error> {
        let attrs = Attribute::parse_outer(input)?;

        let ahead = input.fork();
        ahead.parse::<syn::Visibility>()?;
        if ahead.peek(Token![unsafe]) {
            ahead.parse::<Token![unsafe]>()?;
        }
        if ahead.peek(Token![auto]) {
            return Err(ahead.error("auto traits can't be dyncast targets"));
        }

        let lookahead = ahead.lookahead1();
        if lookahead.peek(Token![trait]) {
            let mut item: ItemTrait = input.parse()?;
            item.attrs = attrs;
            Ok(Item::Trait(item))
        } else if lookahead.peek(Token![impl]) {
            let mut item: ItemImpl = input.parse()?;
            match &item.trait_ {
                Some((None, _, _)) => {}
                Some((Some(bang), _, _)) => {
                    return Err(Error::new_spanned(bang, "negative impls can't be registered"))
                }
                None => {
                    return Err(Error::new(
                        item.impl_token.span,
                        "inherent impls are invalid here, expected a trait impl",
                    ))
                }
            }
            item.attrs = attrs;
            Ok(Item::Impl(item))
        } else {
            Err(lookahead.error())
        }
    }
}

impl ToTokens for Item {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Item::Trait(item) => item.to_tokens(tokens),
            Item::Impl(item) => item.to_tokens(tokens),
        }
    }
}
