#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the kennel crates.
//!
//! Consumers must also depend on `thiserror`, since the generated code derives
//! `::thiserror::Error`.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>`
///   and for `Result<T, Source>` of every variant carrying a source.
/// * `From<Source>` for every variant with a `source` field (or a field marked
///   `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, .. }`
///   variant exists.
/// * A private `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A variant with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[kennel_derive::kennel_error]
/// pub enum TrainingError {
///     #[error("There is no dog with number {handle}{}", format_context(.context))]
///     NotFound { handle: i64, context: Option<Cow<'static, str>> },
///
///     #[error("Internal training error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn kennel_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
