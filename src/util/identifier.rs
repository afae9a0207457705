//! Identifier normalization for generated constants.
//!
//! Display names on Discord are free text: accents, emoji, punctuation and
//! separators are all common. `normalize_identifier` reduces a name to the letters
//! that can follow a constant prefix such as `Role` or `GuildChannel`, title-casing
//! each whitespace-separated word on the way.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalizes a display name into an identifier fragment.
///
/// 1. Canonically decomposes the name and drops combining marks (diacritics)
/// 2. Recomposes the remaining characters
/// 3. Upper-cases the first letter of every whitespace-separated word
/// 4. Removes every character that is not a letter
///
/// The result contains letters only and may be empty when the name has none
/// (e.g. `"42!!!"`). Normalizing a result again returns it unchanged.
///
/// # Arguments
/// - `name` - Display name of a role or channel
///
/// # Returns
/// - `String` - Letters-only identifier fragment, possibly empty
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(normalize_identifier("Modérateurs du serveur"), "ModerateursDuServeur");
/// assert_eq!(normalize_identifier("📢・annonces"), "Annonces");
/// assert_eq!(normalize_identifier("42!!!"), "");
/// ```
pub fn normalize_identifier(name: &str) -> String {
    let without_marks: String = name
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect();

    title_case_words(&without_marks)
        .chars()
        .filter(|c| is_identifier_letter(*c))
        .collect()
}

/// Renders a value as a Rust string literal, escaping quotes, backslashes and
/// non-printable characters.
pub fn rust_string_literal(value: &str) -> String {
    format!("{:?}", value)
}

/// Upper-cases the first letter of each whitespace-separated word.
///
/// Leading non-letters do not consume the word start, so `"42abc"` becomes
/// `"42Abc"`. The rest of each word is left as is.
fn title_case_words(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;

    for c in value.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start && is_identifier_letter(c) {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// A letter that may appear after the first character of a Rust identifier.
fn is_identifier_letter(c: char) -> bool {
    c.is_alphabetic()
        && !c.is_numeric()
        && !is_combining_mark(c)
        && unicode_ident::is_xid_continue(c)
}
