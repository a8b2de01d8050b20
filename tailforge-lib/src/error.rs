use thiserror::Error;

/// Failures the pipeline entry point can surface to a caller.
///
/// Everything below this level is tolerated silently: unbalanced trailing
/// fragments are dropped by the block splitter and unrecognized declarations
/// simply contribute no utility classes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// The input text was empty or whitespace-only.
    #[error("stylesheet text is empty")]
    EmptyInput,

    /// The input never closed a brace-balanced rule block, so there is
    /// nothing to extract declarations from.
    #[error("no valid CSS declaration block found")]
    NoDeclarationBlock,
}
