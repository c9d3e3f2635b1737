use std::borrow::Cow;

/// A specialized [`TrainingError`] enum of this crate.
#[kennel_derive::kennel_error]
pub enum TrainingError {
    /// No dog is enrolled under the requested handle.
    #[error("There is no dog with number {handle}{}", format_context(.context))]
    NotFound { handle: i64, context: Option<Cow<'static, str>> },

    /// A curriculum named a trick that is not in the built-in catalog.
    #[error("Unknown trick '{name}'{}", format_context(.context))]
    UnknownTrick { name: String, context: Option<Cow<'static, str>> },

    /// A trick argument was not written as `key=value`.
    #[error("Invalid trick argument '{raw}'{}: expected key=value", format_context(.context))]
    InvalidArgument { raw: String, context: Option<Cow<'static, str>> },

    /// Every handle after the largest one in use is taken.
    #[error("No handle left after number {last}{}", format_context(.context))]
    HandlesExhausted { last: i64, context: Option<Cow<'static, str>> },
}
