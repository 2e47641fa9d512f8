//! Procedural macro backing the `url-literal` crate.
//!
//! This crate provides one macro:
//! - `url!` - Validate a URL string literal at compile time and expand to an
//!   infallible `Url` construction
//!
//! The expansion pipeline is strictly linear: literal extraction → URL
//! grammar validation → rewrite. The first fault aborts expansion with a
//! single error anchored at the offending node; a rewrite is only emitted
//! once validation has fully succeeded.

use proc_macro::TokenStream;

mod diagnostic;
mod expand;
mod extract;
mod validate;

/// Validate a URL string literal at compile time and construct a `Url`.
///
/// The argument must be a static string literal (no `{...}` interpolation
/// placeholders) containing a well-formed URL with an explicit scheme.
/// Because validation happens at compile time, the expanded construction
/// cannot fail at runtime.
///
/// # Example
///
/// ```ignore
/// let url = url_literal::url!("https://www.apple.com");
/// assert_eq!(url.scheme(), "https");
/// ```
///
/// Invalid input is a compile error, never a runtime check:
///
/// ```ignore
/// let bad = url_literal::url!("example.com");  // error: url! requires a valid URL literal
/// ```
#[proc_macro]
pub fn url(input: TokenStream) -> TokenStream {
    match expand::expand(input.into()) {
        Ok(expansion) => expansion.into(),
        Err(fault) => fault.into_error().to_compile_error().into(),
    }
}
