//! Greek script utilities

/// Greek and Coptic block
const GREEK_BLOCK: std::ops::RangeInclusive<u32> = 0x0370..=0x03FF;
/// Greek Extended block (polytonic letters)
const GREEK_EXTENDED_BLOCK: std::ops::RangeInclusive<u32> = 0x1F00..=0x1FFF;

/// Whether `c` lies in one of the Greek blocks
pub fn is_greek_char(c: char) -> bool {
    let cp = c as u32;
    GREEK_BLOCK.contains(&cp) || GREEK_EXTENDED_BLOCK.contains(&cp)
}

/// True when the text contains at least one Greek code point
pub fn is_greek_script(text: &str) -> bool {
    text.chars().any(is_greek_char)
}

/// Upper-case the first character, leave the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replace σ with ς wherever it closes a word
pub fn fold_final_sigma(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        let at_word_end = chars.get(i + 1).map_or(true, |next| !next.is_alphabetic());
        let has_letter_before = i > 0 && chars[i - 1].is_alphabetic();
        if c == 'σ' && at_word_end && has_letter_before {
            result.push('ς');
        } else {
            result.push(c);
        }
    }

    result
}
