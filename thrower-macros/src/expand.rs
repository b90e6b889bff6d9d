//! Code generation for `#[recover_error]`.
//!
//! The function body is moved, unchanged, into a closure with the function's
//! own return type, and that closure runs inside a recovery scope:
//!
//! ```ignore
//! fn load(raw: &str) -> Result<u16, AppError> {
//!     match ::thrower::recover(|| -> Result<u16, AppError> { /* body */ }) {
//!         Ok(ret) => ret,
//!         Err(err) => Err(From::from(err)),
//!     }
//! }
//! ```
//!
//! `return` and `?` in the body keep their meaning because the closure has the
//! same return type as the function.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Block, Error, ItemFn, Result, ReturnType, Signature, Type};

use crate::args::Args;

/// Expand `#[recover_error(attr)] item`.
pub fn recover_error(attr: TokenStream, item: TokenStream) -> Result<TokenStream> {
    let args: Args = syn::parse2(attr)?;
    let mut func: ItemFn = syn::parse2(item)?;
    check_signature(&func.sig, args.discard)?;

    let krate = &args.krate;
    let ret = match &func.sig.output {
        ReturnType::Default => quote! { () },
        ReturnType::Type(_, ty) => quote! { #ty },
    };
    let body = &func.block;

    let wrapped = if args.discard {
        quote! {{
            #krate::recover_or_default(|| -> #ret #body)
        }}
    } else {
        quote! {{
            match #krate::recover(|| -> #ret #body) {
                ::core::result::Result::Ok(__thrower_ret) => __thrower_ret,
                ::core::result::Result::Err(__thrower_err) => {
                    ::core::result::Result::Err(::core::convert::From::from(__thrower_err))
                }
            }
        }}
    };

    let block: Block = syn::parse2(wrapped)?;
    func.block = Box::new(block);
    Ok(quote! { #func })
}

/// Reject signatures the closure rewrite cannot express.
fn check_signature(sig: &Signature, discard: bool) -> Result<()> {
    if let Some(asyncness) = &sig.asyncness {
        return Err(Error::new(
            asyncness.span,
            "`#[recover_error]` does not support `async fn`: a throw cannot be recovered across an await point",
        ));
    }
    if let Some(constness) = &sig.constness {
        return Err(Error::new(constness.span, "`#[recover_error]` cannot be used on a `const fn`"));
    }
    match &sig.output {
        ReturnType::Default if !discard => Err(Error::new_spanned(
            &sig.ident,
            "`#[recover_error]` needs a function returning `Result<T, E>`; \
             use `#[recover_error(discard)]` to silence throws instead",
        )),
        ReturnType::Type(_, ty) if matches!(**ty, Type::ImplTrait(_)) => Err(Error::new_spanned(
            ty,
            "`#[recover_error]` cannot wrap a function returning `impl Trait`",
        )),
        ReturnType::Type(_, ty) if !discard && !is_result_path(ty) => Err(Error::new_spanned(
            ty,
            "`#[recover_error]` needs a function returning `Result<T, E>`; \
             use `#[recover_error(discard)]` to silence throws instead",
        )),
        _ => Ok(()),
    }
}

/// `Result<..>`, `io::Result<..>`, `thrower::Result<..>` and the like. Other
/// aliases cannot be seen through from here.
fn is_result_path(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .map_or(false, |segment| segment.ident == "Result"),
        Type::Paren(inner) => is_result_path(&inner.elem),
        Type::Group(inner) => is_result_path(&inner.elem),
        _ => false,
    }
}
