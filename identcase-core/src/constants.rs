/// Letters that canonical decomposition cannot reduce to a plain base letter,
/// paired with their replacement.
///
/// Must stay sorted by the first element; `normalize` binary-searches it.
pub const SPECIAL_LETTERS: &[(char, char)] = &[
    ('\u{0110}', 'D'), // Đ
    ('\u{0111}', 'd'), // đ
    ('\u{0141}', 'L'), // Ł
];
