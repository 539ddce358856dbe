#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the geofeed crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! geofeed-derive = { path = "../infra/derive" }
//! thiserror = "2"
//! ```
//!
//! The generated code refers to `::thiserror`, so consumers must depend on it too.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&str>` and `From<String>` if an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants wrapping external errors must also include a
///    `context: Option<Cow<'static, str>>` field.
/// 3. Unit variants are accepted for payload-free kinds. Tuple variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use geofeed_derive::geofeed_error;
/// use std::borrow::Cow;
///
/// #[geofeed_error]
/// #[derive(Clone, PartialEq)]
/// pub enum InputError {
///     #[error("Input is empty")]
///     Empty,
///
///     #[error("Too many fields: {count}")]
///     TooMany { count: usize },
/// }
///
/// #[geofeed_error]
/// pub enum LoadError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read() -> Result<String, LoadError> {
///     std::fs::read_to_string("geofeed.toml").context("Reading configuration")
/// }
/// ```
#[proc_macro_attribute]
pub fn geofeed_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand_derive(input).into()
}
