pub mod case;
pub mod constants;
pub mod conversion;
pub mod error;
pub mod hasher;
pub mod normalizer;

pub use case::{norm_title_case, to_camel_case, to_snake_case, to_title_case};
pub use conversion::Conversion;
pub use error::CaseError;
pub use hasher::hash;
pub use normalizer::normalize;
