//! Diagnostic construction for failed expansions.
//!
//! Pure mapping from fault category to a fixed message and an anchor span.
//! Severity is always an error: a rejected literal must never degrade to a
//! runtime check.

use proc_macro2::Span;
use thiserror::Error;

use crate::validate::InvalidReason;

/// A fault detected during expansion, carrying the span its diagnostic
/// anchors to. Exactly one is produced per failed expansion.
#[derive(Debug, Error)]
pub enum Fault {
    /// The argument is missing or is not a string literal. Anchored at the
    /// whole macro invocation.
    #[error("url! requires a string literal")]
    NotAStringLiteral { call: Span },

    /// The literal contains a `{...}` placeholder. Anchored at the literal
    /// argument.
    #[error("url! does not support string interpolation")]
    ContainsInterpolation { literal: Span },

    /// The literal text is not a URL with an explicit scheme. Anchored at
    /// the literal argument. Both [`InvalidReason`] variants share this
    /// message.
    #[error("url! requires a valid URL literal")]
    InvalidUrlLiteral {
        literal: Span,
        reason: InvalidReason,
    },
}

impl Fault {
    /// The span the diagnostic anchors to.
    pub fn span(&self) -> Span {
        match self {
            Fault::NotAStringLiteral { call } => *call,
            Fault::ContainsInterpolation { literal } => *literal,
            Fault::InvalidUrlLiteral { literal, .. } => *literal,
        }
    }

    /// Convert into a `syn::Error` ready to become a `compile_error!`
    /// invocation at the anchor span.
    pub fn into_error(self) -> syn::Error {
        let message = self.to_string();
        syn::Error::new(self.span(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed_per_fault() {
        let call = Span::call_site();
        assert_eq!(
            Fault::NotAStringLiteral { call }.to_string(),
            "url! requires a string literal"
        );
        assert_eq!(
            Fault::ContainsInterpolation { literal: call }.to_string(),
            "url! does not support string interpolation"
        );
        assert_eq!(
            Fault::InvalidUrlLiteral {
                literal: call,
                reason: InvalidReason::Unparsable,
            }
            .to_string(),
            "url! requires a valid URL literal"
        );
        // Missing scheme surfaces identically to unparsable text.
        assert_eq!(
            Fault::InvalidUrlLiteral {
                literal: call,
                reason: InvalidReason::MissingScheme,
            }
            .to_string(),
            "url! requires a valid URL literal"
        );
    }

    #[test]
    fn test_into_error_becomes_compile_error() {
        let fault = Fault::NotAStringLiteral {
            call: Span::call_site(),
        };
        let tokens = fault.into_error().to_compile_error().to_string();
        assert!(tokens.contains("compile_error"));
        assert!(tokens.contains("url! requires a string literal"));
    }
}
