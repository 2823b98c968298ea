use crate::case::{norm_title_case, to_camel_case, to_snake_case, to_title_case};
use crate::error::CaseError;
use crate::normalizer::normalize;

/// A string-to-string operation, for callers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Title,
    Camel,
    NormTitle,
    Snake,
    Normalize,
}

impl Conversion {
    pub const ALL: [Conversion; 5] = [
        Conversion::Title,
        Conversion::Camel,
        Conversion::NormTitle,
        Conversion::Snake,
        Conversion::Normalize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Conversion::Title => "TitleCase",
            Conversion::Camel => "camelCase",
            Conversion::NormTitle => "normalized TitleCase",
            Conversion::Snake => "snake_case",
            Conversion::Normalize => "normalized text",
        }
    }

    /// Whether this conversion can reject its input.
    pub fn is_fallible(&self) -> bool {
        matches!(self, Conversion::NormTitle | Conversion::Snake)
    }

    pub fn apply(&self, input: &str) -> Result<String, CaseError> {
        match self {
            Conversion::Title => Ok(to_title_case(input)),
            Conversion::Camel => Ok(to_camel_case(input)),
            Conversion::NormTitle => norm_title_case(input),
            Conversion::Snake => to_snake_case(input),
            Conversion::Normalize => Ok(normalize(input)),
        }
    }
}
