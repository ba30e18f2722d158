//! Locale-style string ordering.
//!
//! Approximates the default collation used by locale-aware string comparison:
//! letters compare case- and accent-insensitively first, then accents break
//! ties, then case (lowercase first), and finally raw code points so the order
//! is total.

use core::cmp::Ordering;

/// Character class at the primary level: punctuation and symbols sort before
/// digits, digits before letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Other,
    Digit,
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Primary {
    class: Class,
    base: char,
}

/// Collation weights for a single character.
#[derive(Debug, Clone, Copy)]
struct Weights {
    primary: Primary,
    /// 0 for unaccented, otherwise the accented code point.
    secondary: u32,
    /// 0 for lowercase or caseless, 1 for uppercase.
    tertiary: u8,
}

fn weights(c: char) -> Weights {
    let lower = c.to_lowercase().next().unwrap_or(c);
    let tertiary = u8::from(lower != c);
    let base = fold_accent(lower);
    let secondary = if base == lower { 0 } else { u32::from(lower) };

    let class = if base.is_alphabetic() {
        Class::Letter
    } else if base.is_numeric() {
        Class::Digit
    } else {
        Class::Other
    };

    Weights {
        primary: Primary { class, base },
        secondary,
        tertiary,
    }
}

/// Strip diacritics from common Latin letters (input is already lowercase).
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' => 'i',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

fn compare_level<K: Ord>(a: &[Weights], b: &[Weights], key: impl Fn(&Weights) -> K) -> Ordering {
    a.iter().map(&key).cmp(b.iter().map(&key))
}

/// Compare two strings in locale order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let wa: Vec<Weights> = a.chars().map(weights).collect();
    let wb: Vec<Weights> = b.chars().map(weights).collect();

    compare_level(&wa, &wb, |w| w.primary)
        .then_with(|| compare_level(&wa, &wb, |w| w.secondary))
        .then_with(|| compare_level(&wa, &wb, |w| w.tertiary))
        .then_with(|| a.cmp(b))
}
