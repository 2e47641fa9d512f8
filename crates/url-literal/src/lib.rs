//! Compile-time validated URL literals.
//!
//! Use [`url!`] to create [`Url`] values that are guaranteed to be valid at
//! compile time, eliminating runtime `Result` handling or `unwrap()` at call
//! sites.
//!
//! ```
//! use url_literal::url;
//!
//! let home = url!("https://www.apple.com");
//! assert_eq!(home.scheme(), "https");
//! ```
//!
//! The macro validates that:
//! - the argument is a static string literal (no `{...}` interpolation),
//! - the text is a well-formed URL,
//! - the URL contains a scheme (e.g. `https`, `ftp`).
//!
//! If any validation fails, a compile-time error is produced:
//!
//! ```compile_fail
//! use url_literal::url;
//!
//! let bad = url!("not a url");  // error: url! requires a valid URL literal
//! ```

pub use url::Url;
pub use url_literal_macros::url;
