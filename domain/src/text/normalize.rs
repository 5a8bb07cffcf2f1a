//! Case and diacritic folding.
//!
//! Visitors type Turkish with and without its special letters
//! ("eğitim" vs "egitim"), so both the query and every knowledge-base
//! trigger are folded into the same ASCII-comparable form before comparing.

/// Letters folded to a plain ASCII lowercase letter.
///
/// Both cases are listed explicitly: `İ` must not go through
/// `char::to_lowercase`, which yields `i` followed by U+0307.
const FOLD_TABLE: &[(char, char)] = &[
    ('ı', 'i'),
    ('İ', 'i'),
    ('ğ', 'g'),
    ('Ğ', 'g'),
    ('ü', 'u'),
    ('Ü', 'u'),
    ('ş', 's'),
    ('Ş', 's'),
    ('ö', 'o'),
    ('Ö', 'o'),
    ('ç', 'c'),
    ('Ç', 'c'),
    ('â', 'a'),
    ('Â', 'a'),
    ('î', 'i'),
    ('Î', 'i'),
    ('û', 'u'),
    ('Û', 'u'),
];

fn fold(c: char) -> Option<char> {
    FOLD_TABLE
        .iter()
        .find_map(|&(from, to)| (from == c).then_some(to))
}

/// Lowercase `text` and fold locale-specific letters to ASCII.
///
/// No other transformation is applied: punctuation and whitespace are kept
/// as they are. The function is total and idempotent.
///
/// ```
/// use folio_domain::text::normalize::normalize;
///
/// assert_eq!(normalize("Eğitim Bilgin Nedir?"), "egitim bilgin nedir?");
/// assert_eq!(normalize("İŞ DENEYİMİ"), "is deneyimi");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match fold(c) {
            Some(folded) => out.push(folded),
            None => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Split normalized text into whitespace-delimited tokens, skipping empties.
pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}
