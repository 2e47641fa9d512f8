//! Literal extraction from the macro argument.
//!
//! Classifies the argument expression and splits the literal's cooked text
//! into ordered segments, rejecting `format!`-style `{...}` placeholders.
//! Pure functions of the syntax node; extraction never mutates the input.

use syn::{Expr, Lit, LitStr};

/// One piece of a string literal's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Verbatim literal text. The escape pairs `{{` and `}}` stay verbatim,
    /// so concatenating text segments reproduces the runtime string exactly.
    Text(&'a str),
    /// A `{...}` placeholder; `offset` is the byte position of the opening
    /// brace. An unterminated `{` also lands here.
    Interpolation { offset: usize },
}

/// Result of extracting the first macro argument.
#[derive(Debug)]
pub enum ExtractedLiteral<'a> {
    /// A static string literal; `value` is the concatenated segment text and
    /// `lit` the original token, kept for the rewrite.
    Text { value: String, lit: &'a LitStr },
    /// The argument is not a string literal of any kind.
    NotAStringLiteral,
    /// The literal embeds at least one placeholder; `offset` is the byte
    /// position of the leftmost one.
    ContainsInterpolation {
        span: proc_macro2::Span,
        offset: usize,
    },
}

/// Extract the literal content of `expr`.
pub fn extract(expr: &Expr) -> ExtractedLiteral<'_> {
    let lit_str = match expr {
        Expr::Lit(expr_lit) => match &expr_lit.lit {
            Lit::Str(s) => s,
            _ => return ExtractedLiteral::NotAStringLiteral,
        },
        _ => return ExtractedLiteral::NotAStringLiteral,
    };

    let value = lit_str.value();
    let mut text = String::with_capacity(value.len());
    for segment in segments(&value) {
        match segment {
            Segment::Text(s) => text.push_str(s),
            Segment::Interpolation { offset } => {
                return ExtractedLiteral::ContainsInterpolation {
                    span: lit_str.span(),
                    offset,
                };
            }
        }
    }

    ExtractedLiteral::Text {
        value: text,
        lit: lit_str,
    }
}

/// Split `value` into ordered text and interpolation segments.
///
/// Braces are ASCII, so byte-index slicing always lands on char boundaries.
/// A lone unescaped `}` is plain text; the scanner is total and only
/// classifies, it never errors on brace shape.
fn segments(value: &str) -> Vec<Segment<'_>> {
    let bytes = value.as_bytes();
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => i += 2,
            b'}' if bytes.get(i + 1) == Some(&b'}') => i += 2,
            b'{' => {
                if start < i {
                    out.push(Segment::Text(&value[start..i]));
                }
                out.push(Segment::Interpolation { offset: i });
                // Skip the embedded expression up to and including its
                // closing brace; an unterminated one consumes the rest.
                i = match value[i..].find('}') {
                    Some(j) => i + j + 1,
                    None => bytes.len(),
                };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        out.push(Segment::Text(&value[start..]));
    }
    out
}


#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn brace_free_text_is_a_single_segment(s in "[^{}]*") {
            let segs = segments(&s);
            if s.is_empty() {
                prop_assert!(segs.is_empty());
            } else {
                prop_assert_eq!(segs, vec![Segment::Text(s.as_str())]);
            }
        }

        #[test]
        fn segmentation_is_pure(s in ".*") {
            prop_assert_eq!(segments(&s), segments(&s));
        }
    }
}
