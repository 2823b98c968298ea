use crate::constants::SPECIAL_LETTERS;
use log::trace;
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Strip diacritics from display text such as a person's name.
///
/// Surrounding whitespace is trimmed, the text is decomposed (NFD), non-spacing
/// marks are removed and the rest is recomposed (NFC). Letters that do not
/// decompose, like `Đ`, are then replaced through [`SPECIAL_LETTERS`].
///
/// ```
/// assert_eq!(identcase_core::normalize("  Đăng  "), "Dang");
/// ```
pub fn normalize(input: &str) -> String {
    let stripped: String = input
        .trim()
        .nfd()
        .filter(|&c| !is_nonspacing_mark(c))
        .nfc()
        .map(replace_special_letter)
        .collect();

    trace!("normalize: {:?} -> {:?}", input, stripped);
    stripped
}

fn is_nonspacing_mark(c: char) -> bool {
    get_general_category(c) == GeneralCategory::NonspacingMark
}

fn replace_special_letter(c: char) -> char {
    match SPECIAL_LETTERS.binary_search_by_key(&c, |&(from, _)| from) {
        Ok(pos) => SPECIAL_LETTERS[pos].1,
        Err(_) => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_vietnamese_name() {
        assert_eq!(normalize("  Đăng  "), "Dang");
        assert_eq!(normalize("Nguyễn Thị Đoan Trang"), "Nguyen Thi Doan Trang");
        assert_eq!(normalize("đường"), "duong");
    }

    #[test]
    fn test_normalize_latin_diacritics() {
        assert_eq!(normalize("Crème Brûlée"), "Creme Brulee");
        assert_eq!(normalize("Łukasz Żółć"), "Lukasz Zołc");
        assert_eq!(normalize("Ångström"), "Angstrom");
    }

    #[test]
    fn test_normalize_decomposed_input() {
        let nfd: String = "José".nfd().collect();
        assert_eq!(normalize(&nfd), "Jose");
    }

    #[test]
    fn test_normalize_keeps_plain_text() {
        assert_eq!(normalize("plain ascii"), "plain ascii");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
        assert_eq!(normalize("  inner  spaces  "), "inner  spaces");
    }

    #[test]
    fn test_normalize_keeps_spacing_marks_and_other_scripts() {
        // Hangul syllables recompose to the same syllables.
        assert_eq!(normalize("한국어"), "한국어");
        assert_eq!(normalize("Straße"), "Straße");
    }

    #[test]
    fn test_replace_special_letter() {
        assert_eq!(replace_special_letter('Đ'), 'D');
        assert_eq!(replace_special_letter('đ'), 'd');
        assert_eq!(replace_special_letter('Ł'), 'L');
        assert_eq!(replace_special_letter('ł'), 'ł');
        assert_eq!(replace_special_letter('a'), 'a');
    }
}
