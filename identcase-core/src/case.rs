use crate::error::CaseError;
use log::{debug, trace};

/// Convert snake_case to TitleCase.
///
/// Empty segments (leading, trailing or repeated `_`) are skipped. Only an ASCII
/// first letter is uppercased; any other leading code point is kept as is.
///
/// ```
/// assert_eq!(identcase_core::to_title_case("to_title_case"), "ToTitleCase");
/// ```
pub fn to_title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for segment in input.split('_').filter(|s| !s.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }

    trace!("to_title_case: {:?} -> {:?}", input, out);
    out
}

/// Convert TitleCase to camelCase by lowercasing the first code point.
///
/// ```
/// assert_eq!(identcase_core::to_camel_case("ToCamelCase"), "toCamelCase");
/// ```
pub fn to_camel_case(input: &str) -> String {
    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(input.len());
    out.extend(first.to_lowercase());
    out.push_str(chars.as_str());
    out
}

/// Collapse acronym runs in a TitleCase identifier.
///
/// Only the first letter of each word keeps its capital. Characters other than
/// ASCII letters and digits are dropped.
///
/// ```
/// assert_eq!(identcase_core::norm_title_case("GRPCError").unwrap(), "GrpcError");
/// ```
pub fn norm_title_case(input: &str) -> Result<String, CaseError> {
    let mut out = String::with_capacity(input.len());
    let mut upper_count = 0usize;

    for (i, c) in input.char_indices() {
        match c {
            'A'..='Z' => {
                if upper_count == 0 || next_is_lower(input, i) {
                    out.push(c);
                } else {
                    out.push(c.to_ascii_lowercase());
                }
                upper_count += 1;
            }
            'a'..='z' => {
                out.push(c);
                upper_count = 0;
            }
            '0'..='9' => {
                if i == 0 {
                    return Err(leading_digit(input));
                }
                out.push(c);
                upper_count = 0;
            }
            _ => {}
        }
    }

    trace!("norm_title_case: {:?} -> {:?}", input, out);
    Ok(out)
}

/// Convert TitleCase (or camelCase) to snake_case.
///
/// An acronym run stays one word; `_` goes in front of the letter that starts
/// the next word.
///
/// ```
/// assert_eq!(identcase_core::to_snake_case("HTMLFile").unwrap(), "html_file");
/// ```
pub fn to_snake_case(input: &str) -> Result<String, CaseError> {
    let mut out = String::with_capacity(input.len() + input.len() / 2);
    let mut upper_count = 0usize;

    for (i, c) in input.char_indices() {
        match c {
            'A'..='Z' => {
                if i > 0 && (upper_count == 0 || next_is_lower(input, i)) {
                    out.push('_');
                }
                out.push(c.to_ascii_lowercase());
                upper_count += 1;
            }
            'a'..='z' => {
                out.push(c);
                upper_count = 0;
            }
            // Digits extend an acronym run rather than ending it.
            '0'..='9' => {
                if i == 0 {
                    return Err(leading_digit(input));
                }
                out.push(c);
            }
            _ => {
                debug!("Rejected identifier {:?}: {:?} at byte {}", input, c, i);
                return Err(CaseError::InvalidIdentifierCharacter {
                    input: input.to_string(),
                    ch: c,
                    position: i,
                });
            }
        }
    }

    trace!("to_snake_case: {:?} -> {:?}", input, out);
    Ok(out)
}

/// Whether the character after byte `i` is a lowercase ASCII letter, unless it
/// is a plural `s` closing the string (`URLs`).
///
/// `i` must point at an ASCII character.
fn next_is_lower(input: &str, i: usize) -> bool {
    let bytes = input.as_bytes();
    let next = i + 1;
    match bytes.get(next) {
        None => false,
        Some(b's') if next == bytes.len() - 1 => false,
        Some(b) => b.is_ascii_lowercase(),
    }
}

fn leading_digit(input: &str) -> CaseError {
    debug!("Rejected identifier {:?}: leading digit", input);
    CaseError::InvalidLeadingCharacter {
        input: input.to_string(),
    }
}
