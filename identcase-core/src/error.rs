use thiserror::Error;

/// Errors returned when an input cannot be treated as an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("Identifier must start with a letter: `{input}`")]
    InvalidLeadingCharacter { input: String },

    #[error("Invalid identifier character {ch:?} at byte {position}: `{input}`")]
    InvalidIdentifierCharacter {
        input: String,
        ch: char,
        position: usize,
    },
}

impl CaseError {
    /// The identifier that was rejected.
    pub fn input(&self) -> &str {
        match self {
            CaseError::InvalidLeadingCharacter { input }
            | CaseError::InvalidIdentifierCharacter { input, .. } => input,
        }
    }
}
