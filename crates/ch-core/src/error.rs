/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors produced when parsing core values from user input.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The language code is neither `en` nor `zh`.
    #[error("unknown language: \"{0}\" (expected en or zh)")]
    UnknownLanguage(String),

    /// No card in the catalog matches the given name.
    #[error("card not found: \"{0}\"")]
    CardNotFound(String),
}
