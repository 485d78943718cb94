//! Best-effort guess of a teacher's university email address.
//!
//! Addresses follow the `<first initial>.<last name>@<domain>` convention.
//! Nothing here is checked against a real directory so the result may
//! well be wrong for double-barrelled names or homonyms.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::event::Organizer;

/// A capitalized word followed by another capitalized word. Titles such
/// as `dr inż.` in front of the name are skipped over.
static PERSON_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{Lu})\p{L}*\s+(\p{Lu}\p{L}*)").unwrap());

pub fn guess_organizer(teacher_name: &str, email_domain: &str) -> Option<Organizer> {
    // Single tokens are abbreviations or titles, not names
    if teacher_name.split_whitespace().count() < 2 {
        return None;
    }

    let caps = PERSON_NAME.captures(teacher_name)?;
    let initial = strip_diacritics(&caps[1].to_lowercase());
    let last_name = strip_diacritics(&caps[2].to_lowercase());

    Some(Organizer {
        name: teacher_name.to_string(),
        email: format!("{}.{}@{}", initial, last_name, email_domain),
    })
}

/// Removes accents so the result is usable in an email address.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            // The stroke is part of the letter and doesn't decompose
            'ł' => 'l',
            'Ł' => 'L',
            c => c,
        })
        .collect()
}

const fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}
