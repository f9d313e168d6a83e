//! Property-path segment to editor label conversion.
//!
//! `auto_translate_mode` becomes `Auto Translate Mode`. Digits are split from
//! surrounding words, except that a digit directly followed by a single letter
//! and a word boundary stays attached (`2d_size` becomes `2D Size`).

use super::remap::RemapTable;

/// Convert one path segment into a capitalized label and apply `remaps`.
pub fn normalize_label(segment: &str, remaps: &RemapTable) -> String {
    let separated = split_word_boundaries(segment).replace('_', " ");
    let capitalized = separated
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");
    remaps.apply(&capitalized)
}

/// Insert `_` between a non-digit and a digit, and between a digit and a
/// non-digit that is itself followed by a lowercase ASCII letter or a digit.
fn split_word_boundaries(segment: &str) -> String {
    let chars: Vec<char> = segment.chars().collect();
    let mut result = String::with_capacity(segment.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 {
            let prev = chars[i - 1];
            let into_digit = !prev.is_ascii_digit() && c.is_ascii_digit();
            let out_of_digit = prev.is_ascii_digit()
                && !c.is_ascii_digit()
                && chars
                    .get(i + 1)
                    .is_some_and(|next| next.is_ascii_lowercase() || next.is_ascii_digit());
            if into_digit || out_of_digit {
                result.push('_');
            }
        }
        result.push(c);
    }

    result
}

/// Uppercase each letter that starts a run of cased letters and lowercase the
/// rest of the run.
fn title_case(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut in_cased_run = false;

    for c in word.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased && in_cased_run {
            result.extend(c.to_lowercase());
        } else if cased {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        in_cased_run = cased;
    }

    result
}
