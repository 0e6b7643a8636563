//! Character classes and their fixed alphabets.

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Lower + Upper, the pool for the fixed letter slot.
pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Classify a character, or `None` if it belongs to no alphabet.
    pub fn of(c: char) -> Option<CharacterClass> {
        match c {
            'a'..='z' => Some(CharacterClass::Lower),
            'A'..='Z' => Some(CharacterClass::Upper),
            '0'..='9' => Some(CharacterClass::Digit),
            c if c.is_ascii_punctuation() => Some(CharacterClass::Symbol),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_have_expected_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 32);
        assert_eq!(LETTERS.len(), 52);
    }

    #[test]
    fn every_alphabet_char_classifies_back_to_its_class() {
        for class in CharacterClass::ALL {
            for &b in class.alphabet() {
                assert_eq!(CharacterClass::of(b as char), Some(class), "char {:?}", b as char);
            }
        }
    }

    #[test]
    fn symbols_match_ascii_punctuation() {
        let expected: Vec<u8> = (0u8..128).filter(|b| b.is_ascii_punctuation()).collect();
        assert_eq!(SYMBOLS, expected.as_slice());
    }

    #[test]
    fn non_ascii_and_whitespace_are_unclassified() {
        assert_eq!(CharacterClass::of(' '), None);
        assert_eq!(CharacterClass::of('é'), None);
        assert_eq!(CharacterClass::of('\n'), None);
    }
}
