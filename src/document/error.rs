use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned when decoding a stored cache document.
pub enum DecodeError {
    /// The payload is not well-formed JSON matching the document schema.
    #[error("malformed cache document: {reason}")]
    Malformed {
        /// Parser error message.
        reason: String,
    },

    /// A required field is absent.
    #[error("cache document missing required field '{field}'")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
}
