// Devanagari character classification
//
// Every predicate here works on a single `char` of NFC-normalized text.
// Precomposed nukta consonants (U+0958..U+095F) are composition exclusions,
// so after NFC they always appear as base consonant + U+093C.

// ---------------------------------------------------------------------------
// Combining marks
// ---------------------------------------------------------------------------

/// DEVANAGARI SIGN VIRAMA (halanta).
pub const VIRAMA: char = '\u{094D}';

/// DEVANAGARI SIGN NUKTA.
pub const NUKTA: char = '\u{093C}';

/// DEVANAGARI SIGN CANDRABINDU.
pub const CHANDRABINDU: char = '\u{0901}';

/// DEVANAGARI SIGN ANUSVARA.
pub const ANUSVARA: char = '\u{0902}';

/// DEVANAGARI SIGN VISARGA.
pub const VISARGA: char = '\u{0903}';

/// DEVANAGARI DANDA.
pub const DANDA: char = '\u{0964}';

/// DEVANAGARI DOUBLE DANDA.
pub const DOUBLE_DANDA: char = '\u{0965}';

/// ZERO WIDTH NON-JOINER, used after a virama to force a visible halanta.
pub const ZWNJ: char = '\u{200C}';

/// ZERO WIDTH JOINER, used after a virama to request a half form.
pub const ZWJ: char = '\u{200D}';

/// Independent vowels that are metrically long: आ ई ऊ ए ऐ ओ औ ॠ ॡ and the
/// candra/extended long letters.
const LONG_INDEPENDENT_VOWELS: &[char] = &[
    '\u{0906}', // आ
    '\u{0908}', // ई
    '\u{090A}', // ऊ
    '\u{090F}', // ए
    '\u{0910}', // ऐ
    '\u{0911}', // ऑ
    '\u{0913}', // ओ
    '\u{0914}', // औ
    '\u{0960}', // ॠ
    '\u{0961}', // ॡ
    '\u{0974}', // ॴ
    '\u{0975}', // ॵ
    '\u{0977}', // ॷ
    '\u{0950}', // ॐ
];

/// Dependent vowel signs (matras) that carry a long vowel.
const LONG_VOWEL_SIGNS: &[char] = &[
    '\u{093B}', // ऻ
    '\u{093E}', // ा
    '\u{0940}', // ी
    '\u{0942}', // ू
    '\u{0944}', // ॄ
    '\u{0947}', // े
    '\u{0948}', // ै
    '\u{0949}', // ॉ
    '\u{094B}', // ो
    '\u{094C}', // ौ
    '\u{094E}', // ॎ
    '\u{094F}', // ॏ
    '\u{0955}', // ॕ
    '\u{0963}', // ॣ
];

// ---------------------------------------------------------------------------
// Character classes
// ---------------------------------------------------------------------------

/// Coarse class of a character as seen by the akshara segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DevanagariClass {
    /// Independent vowel letter (अ, आ, इ, ...).
    IndependentVowel,
    /// Consonant letter (क .. ह, plus the extended consonants).
    Consonant,
    /// Nukta diacritic.
    Nukta,
    /// Virama (halanta).
    Virama,
    /// Dependent vowel sign.
    VowelSign,
    /// Anusvara, chandrabindu, visarga or a Vedic accent mark.
    Modifier,
    /// Danda or double danda.
    Danda,
    /// Devanagari digit.
    Digit,
    /// Anything else: whitespace, Latin text, other punctuation.
    Other,
}

/// Return the Devanagari class of a character.
pub fn devanagari_class(c: char) -> DevanagariClass {
    match c {
        NUKTA => DevanagariClass::Nukta,
        VIRAMA => DevanagariClass::Virama,
        DANDA | DOUBLE_DANDA => DevanagariClass::Danda,
        '\u{0900}'..='\u{0903}' | '\u{0951}'..='\u{0954}' => DevanagariClass::Modifier,
        '\u{0904}'..='\u{0914}'
        | '\u{0950}'
        | '\u{0960}'..='\u{0961}'
        | '\u{0972}'..='\u{0977}' => {
            DevanagariClass::IndependentVowel
        }
        '\u{0915}'..='\u{0939}' | '\u{0958}'..='\u{095F}' | '\u{0978}'..='\u{097F}' => {
            DevanagariClass::Consonant
        }
        '\u{093A}'..='\u{093B}'
        | '\u{093E}'..='\u{094C}'
        | '\u{094E}'..='\u{094F}'
        | '\u{0955}'..='\u{0957}'
        | '\u{0962}'..='\u{0963}' => DevanagariClass::VowelSign,
        '\u{0966}'..='\u{096F}' => DevanagariClass::Digit,
        _ => DevanagariClass::Other,
    }
}

/// Check whether a character is a Devanagari consonant letter.
pub fn is_consonant(c: char) -> bool {
    devanagari_class(c) == DevanagariClass::Consonant
}

/// Check whether a character is an independent vowel letter.
pub fn is_independent_vowel(c: char) -> bool {
    devanagari_class(c) == DevanagariClass::IndependentVowel
}

/// Check whether an independent vowel letter is metrically long.
pub fn is_long_independent_vowel(c: char) -> bool {
    LONG_INDEPENDENT_VOWELS.contains(&c)
}

/// Check whether a character is a dependent vowel sign.
pub fn is_vowel_sign(c: char) -> bool {
    devanagari_class(c) == DevanagariClass::VowelSign
}

/// Check whether a dependent vowel sign carries a long vowel.
pub fn is_long_vowel_sign(c: char) -> bool {
    LONG_VOWEL_SIGNS.contains(&c)
}

/// Check whether a character is a trailing modifier (anusvara,
/// chandrabindu, visarga, or an accent mark).
pub fn is_modifier(c: char) -> bool {
    devanagari_class(c) == DevanagariClass::Modifier
}

/// Check whether a character nasalizes or aspirates the syllable it ends,
/// making it heavy. Accent marks do not count.
pub fn is_weight_modifier(c: char) -> bool {
    matches!(c, '\u{0900}' | CHANDRABINDU | ANUSVARA | VISARGA)
}

/// Check whether a character is a zero-width joiner or non-joiner.
pub fn is_joiner(c: char) -> bool {
    c == ZWJ || c == ZWNJ
}

/// Check whether a character is a danda or double danda.
pub fn is_danda(c: char) -> bool {
    c == DANDA || c == DOUBLE_DANDA
}

/// Check whether a character belongs to any syllable-bearing Devanagari
/// class (letters and the marks that attach to them).
pub fn is_syllabic(c: char) -> bool {
    !matches!(
        devanagari_class(c),
        DevanagariClass::Danda | DevanagariClass::Digit | DevanagariClass::Other
    )
}

/// Check whether a character is removed by line cleaning: dandas, digits
/// (ASCII and Devanagari), the abbreviation sign, and punctuation.
pub fn is_strippable(c: char) -> bool {
    match devanagari_class(c) {
        DevanagariClass::Danda | DevanagariClass::Digit => true,
        DevanagariClass::Other => {
            c == '\u{0970}' // DEVANAGARI ABBREVIATION SIGN
                || c.is_ascii_digit()
                || c.is_ascii_punctuation()
                || matches!(
                    c,
                    '\u{2010}'..='\u{2027}' | '\u{00AB}' | '\u{00BB}' | '\u{00A1}' | '\u{00BF}'
                )
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_of_basic_letters() {
        assert_eq!(devanagari_class('अ'), DevanagariClass::IndependentVowel);
        assert_eq!(devanagari_class('क'), DevanagariClass::Consonant);
        assert_eq!(devanagari_class('ह'), DevanagariClass::Consonant);
        assert_eq!(devanagari_class('ा'), DevanagariClass::VowelSign);
        assert_eq!(devanagari_class('ि'), DevanagariClass::VowelSign);
        assert_eq!(devanagari_class('्'), DevanagariClass::Virama);
        assert_eq!(devanagari_class('़'), DevanagariClass::Nukta);
    }

    #[test]
    fn classes_of_marks_and_punctuation() {
        assert_eq!(devanagari_class('ं'), DevanagariClass::Modifier);
        assert_eq!(devanagari_class('ँ'), DevanagariClass::Modifier);
        assert_eq!(devanagari_class('ः'), DevanagariClass::Modifier);
        assert_eq!(devanagari_class('।'), DevanagariClass::Danda);
        assert_eq!(devanagari_class('॥'), DevanagariClass::Danda);
        assert_eq!(devanagari_class('५'), DevanagariClass::Digit);
        assert_eq!(devanagari_class(' '), DevanagariClass::Other);
        assert_eq!(devanagari_class('a'), DevanagariClass::Other);
    }

    #[test]
    fn long_and_short_independent_vowels() {
        for c in ['आ', 'ई', 'ऊ', 'ए', 'ऐ', 'ओ', 'औ', 'ॐ'] {
            assert!(is_long_independent_vowel(c), "{c} should be long");
        }
        for c in ['अ', 'इ', 'उ', 'ऋ'] {
            assert!(is_independent_vowel(c));
            assert!(!is_long_independent_vowel(c), "{c} should be short");
        }
    }

    #[test]
    fn long_and_short_vowel_signs() {
        for c in ['ा', 'ी', 'ू', 'े', 'ै', 'ो', 'ौ'] {
            assert!(is_long_vowel_sign(c), "{c} should be long");
        }
        for c in ['ि', 'ु', 'ृ'] {
            assert!(is_vowel_sign(c));
            assert!(!is_long_vowel_sign(c), "{c} should be short");
        }
    }

    #[test]
    fn weight_modifiers_exclude_accents() {
        assert!(is_weight_modifier('ं'));
        assert!(is_weight_modifier('ँ'));
        assert!(is_weight_modifier('ः'));
        assert!(is_modifier('\u{0951}'));
        assert!(!is_weight_modifier('\u{0951}'));
    }

    #[test]
    fn strippable_characters() {
        assert!(is_strippable('।'));
        assert!(is_strippable('॥'));
        assert!(is_strippable('१'));
        assert!(is_strippable('7'));
        assert!(is_strippable(','));
        assert!(is_strippable('\u{2014}'));
        assert!(!is_strippable(' '));
        assert!(!is_strippable('क'));
        assert!(!is_strippable('ं'));
    }

    #[test]
    fn syllabic_characters() {
        assert!(is_syllabic('क'));
        assert!(is_syllabic('्'));
        assert!(is_syllabic('ं'));
        assert!(!is_syllabic(' '));
        assert!(!is_syllabic('।'));
        assert!(!is_syllabic('x'));
    }
}
