//! URL grammar validation.
//!
//! Thin wrapper over a URL parse capability plus the explicit-scheme check.
//! The parse function is injected so the classification logic can be tested
//! with a fake; production wiring uses the `url` crate.

use url::Url;

/// Outcome of validating extracted literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(InvalidReason),
}

/// Why a literal failed validation.
///
/// Both reasons surface the same user-facing message; they stay separate so
/// tests can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The text does not parse as a URL at all.
    Unparsable,
    /// The text has no explicit scheme, e.g. `"example.com"` or the empty
    /// string.
    MissingScheme,
}

/// Minimal view of a parsed URL: only what the validator inspects.
#[derive(Debug, Clone)]
pub struct ParsedUrl {
    pub scheme: String,
}

/// Validate `text` using the `url` crate as the parse capability.
pub fn validate(text: &str) -> Validation {
    validate_with(text, |s| {
        Url::parse(s).ok().map(|u| ParsedUrl {
            scheme: u.scheme().to_owned(),
        })
    })
}

/// Validate `text` against an injected parse capability.
pub fn validate_with<F>(text: &str, parse: F) -> Validation
where
    F: Fn(&str) -> Option<ParsedUrl>,
{
    match parse(text) {
        Some(url) if !url.scheme.is_empty() => Validation::Valid,
        // The url crate cannot produce an Ok result with an empty scheme;
        // the guard pins the contract for any substitute capability.
        Some(_) => Validation::Invalid(InvalidReason::MissingScheme),
        None if has_scheme_prefix(text) => Validation::Invalid(InvalidReason::Unparsable),
        None => Validation::Invalid(InvalidReason::MissingScheme),
    }
}

/// RFC 3986 scheme grammar: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
/// terminated by `:`.
fn has_scheme_prefix(text: &str) -> bool {
    let Some((scheme, _)) = text.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
