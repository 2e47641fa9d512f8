//! Expansion driver.
//!
//! Walks the first macro argument, drives extraction and validation in
//! order, and returns either the rewritten expression or exactly one fault.
//! The sequence is strictly linear with no retries: any fault short-circuits.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Expr, Token};

use crate::diagnostic::Fault;
use crate::extract::{extract, ExtractedLiteral};
use crate::validate::{validate, Validation};

/// Expand `url!(...)` into `::url_literal::Url::parse(<literal>).unwrap()`.
///
/// Only the first argument is inspected. The literal token is re-emitted
/// unmodified inside the expansion, so source quoting is preserved and the
/// runtime parse sees exactly the text that was validated.
pub fn expand(input: TokenStream) -> Result<TokenStream, Fault> {
    let args = Punctuated::<Expr, Token![,]>::parse_terminated
        .parse2(input)
        .map_err(|_| Fault::NotAStringLiteral {
            call: Span::call_site(),
        })?;

    let Some(argument) = args.first() else {
        return Err(Fault::NotAStringLiteral {
            call: Span::call_site(),
        });
    };

    let (value, lit) = match extract(argument) {
        ExtractedLiteral::Text { value, lit } => (value, lit),
        ExtractedLiteral::NotAStringLiteral => {
            return Err(Fault::NotAStringLiteral {
                call: Span::call_site(),
            });
        }
        ExtractedLiteral::ContainsInterpolation { span, .. } => {
            return Err(Fault::ContainsInterpolation { literal: span });
        }
    };

    if let Validation::Invalid(reason) = validate(&value) {
        return Err(Fault::InvalidUrlLiteral {
            literal: lit.span(),
            reason,
        });
    }

    // Validation proved the parse cannot fail; the unwrap is the force
    // success marker.
    Ok(quote! { ::url_literal::Url::parse(#lit).unwrap() })
}
