//! Proc macros for the thrower crate.
//!
//! Provides the `#[recover_error]` attribute, which turns a whole function
//! body into a recovery scope.

use proc_macro::TokenStream;

mod args;
mod expand;

/// Make a function a recovery scope for thrown errors.
///
/// Options (comma separated):
/// - `discard` - silence a throw and return `Default::default()`
/// - `crate = path` - path to the `thrower` crate (default `::thrower`)
#[proc_macro_attribute]
pub fn recover_error(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand::recover_error(attr.into(), item.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
