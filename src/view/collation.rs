//! Vietnamese name collation and search folding.
//!
//! Input is decomposed (NFD) first, so precomposed and decomposed spellings of
//! the same name compare equal. Collation is at base strength: case and tone
//! marks (huyền, sắc, hỏi, ngã, nặng) are ignored, while `ă â đ ê ô ơ ư` stay
//! distinct letters ordered right after their base letter. Any other accent
//! (`ç`, `ü`, `ñ`) is dropped and the letter sorts as its base. Whitespace and
//! punctuation are ignored. Digits sort before letters; letters with no Latin
//! base sort after `z` by code point.
//!
//! Search folding is coarser: every diacritic is stripped, so `"an"` finds
//! both `"An"` and `"Ân"`.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Primary alphabet order.
const ALPHABET: [char; 29] = [
    'a', 'ă', 'â', 'b', 'c', 'd', 'đ', 'e', 'ê', 'g', 'h', 'i', 'k', 'l', 'm', 'n', 'o', 'ô',
    'ơ', 'p', 'q', 'r', 's', 't', 'u', 'ư', 'v', 'x', 'y',
];

const COMBINING_BREVE: char = '\u{0306}';
const COMBINING_CIRCUMFLEX: char = '\u{0302}';
const COMBINING_HORN: char = '\u{031B}';

const DIGIT_BASE: u32 = 1;
const LETTER_BASE: u32 = 100;
const FOREIGN_BASE: u32 = 1_000;

/// Sort key for a name; equal keys mean base-equal names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey(Vec<u32>);

impl CollationKey {
    pub fn new(name: &str) -> Self {
        let mut weights: Vec<u32> = Vec::with_capacity(name.len());
        // Base letter the following combining marks attach to.
        let mut last_letter: Option<char> = None;

        for c in name.nfd().flat_map(char::to_lowercase) {
            if let Some(modified) = apply_combining(last_letter, c) {
                if let Some(last) = weights.last_mut() {
                    *last = letter_weight(modified);
                }
                last_letter = Some(modified);
                continue;
            }
            if is_combining_mark(c) {
                continue;
            }
            if let Some(d) = c.to_digit(10) {
                weights.push(DIGIT_BASE + d);
                last_letter = None;
            } else if c.is_alphabetic() {
                weights.push(letter_weight(c));
                last_letter = Some(c);
            } else {
                last_letter = None;
            }
        }
        Self(weights)
    }
}

/// Compare two names with Vietnamese base-strength collation.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// Lowercase `text` and strip every diacritic, for substring search.
pub fn fold_for_search(text: &str) -> String {
    text.nfd()
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c == 'đ' { 'd' } else { c })
        .collect()
}

fn letter_weight(c: char) -> u32 {
    if let Some(i) = ALPHABET.iter().position(|l| *l == c) {
        return LETTER_BASE + 10 * i as u32;
    }
    // f, j, w, z only appear in loanwords; each goes right after its Latin neighbour.
    let neighbour = match c {
        'f' => 'ê',
        'j' => 'i',
        'w' => 'v',
        'z' => 'y',
        _ => return FOREIGN_BASE + c as u32,
    };
    letter_weight(neighbour) + 5
}

/// Letter produced by a vowel modifier attaching to `last`, if any.
///
/// NFD puts the dot below (class 220) ahead of the circumflex (class 230), so
/// `last` survives any tone marks in between.
fn apply_combining(last: Option<char>, c: char) -> Option<char> {
    match (last?, c) {
        ('a', COMBINING_BREVE) => Some('ă'),
        ('a', COMBINING_CIRCUMFLEX) => Some('â'),
        ('e', COMBINING_CIRCUMFLEX) => Some('ê'),
        ('o', COMBINING_CIRCUMFLEX) => Some('ô'),
        ('o', COMBINING_HORN) => Some('ơ'),
        ('u', COMBINING_HORN) => Some('ư'),
        _ => None,
    }
}
