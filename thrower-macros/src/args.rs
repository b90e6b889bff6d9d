//! Attribute arguments for `#[recover_error(...)]`.

use syn::parse::{Parse, ParseStream};
use syn::{Error, Ident, Path, Result, Token};

/// Parsed `#[recover_error(...)]` options.
pub struct Args {
    /// `discard`: drop the thrown error and return `Default::default()`.
    pub discard: bool,
    /// `crate = path`: where `recover` and `recover_or_default` live.
    pub krate: Path,
}

impl Parse for Args {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut discard: Option<Ident> = None;
        let mut krate: Option<Path> = None;

        while !input.is_empty() {
            if input.peek(Token![crate]) {
                let kw: Token![crate] = input.parse()?;
                if krate.is_some() {
                    return Err(Error::new(kw.span, "duplicate `crate` option"));
                }
                input.parse::<Token![=]>()?;
                krate = Some(input.call(Path::parse_mod_style)?);
            } else {
                let ident: Ident = input.parse()?;
                if ident != "discard" {
                    return Err(Error::new(
                        ident.span(),
                        format!("unknown option `{}`, expected `discard` or `crate = path`", ident),
                    ));
                }
                if discard.is_some() {
                    return Err(Error::new(ident.span(), "duplicate `discard` option"));
                }
                discard = Some(ident);
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(Args {
            discard: discard.is_some(),
            krate: krate.unwrap_or_else(|| syn::parse_quote!(::thrower)),
        })
    }
}
