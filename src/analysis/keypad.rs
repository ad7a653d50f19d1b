//! Phone keypad classification.
//!
//! Every letter lives on exactly one key of the standard nine-key layout:
//!
//! ```text
//!   1        2 abc    3 def
//!   4 ghi    5 jkl    6 mno
//!   7 pqrs   8 tuv    9 wxyz
//!            0 +
//! ```
//!
//! Classification is ASCII only. Anything outside `a-z`, `A-Z` and `+` is
//! not reachable from any key.

/// Inclusive range of characters printed on each key, indexed by digit.
/// Key `1` carries no letters.
const KEY_RANGES: [Option<(u8, u8)>; 10] = [
    Some((b'+', b'+')),
    None,
    Some((b'a', b'c')),
    Some((b'd', b'f')),
    Some((b'g', b'i')),
    Some((b'j', b'l')),
    Some((b'm', b'o')),
    Some((b'p', b's')),
    Some((b't', b'v')),
    Some((b'w', b'z')),
];

#[inline]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn to_lower(c: u8) -> u8 {
    c.to_ascii_lowercase()
}

/// Whether pressing `digit` can produce `letter` (case-insensitive)
#[inline]
pub fn keypad_contains(letter: u8, digit: u8) -> bool {
    if !is_digit(digit) {
        return false;
    }
    match KEY_RANGES[(digit - b'0') as usize] {
        Some((lo, hi)) => (lo..=hi).contains(&to_lower(letter)),
        None => false,
    }
}

/// Key that produces `letter`, if any
pub fn keypad_digit(letter: u8) -> Option<u8> {
    (b'0'..=b'9').find(|&digit| keypad_contains(letter, digit))
}

/// Render text as the digits typed to produce it. Characters no key
/// produces are shown as `_`.
pub fn to_keypad_digits(text: &str) -> String {
    text.bytes()
        .map(|c| keypad_digit(c).map_or('_', char::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_digit() {
        assert!(b"0123456789".iter().all(|&c| is_digit(c)));
        assert!(!is_digit(b'a'));
        assert!(!is_digit(b'+'));
        assert!(!is_digit(b'/'));
        assert!(!is_digit(b':'));
    }

    #[test]
    fn test_to_lower() {
        assert_eq!(to_lower(b'A'), b'a');
        assert_eq!(to_lower(b'z'), b'z');
        assert_eq!(to_lower(b'7'), b'7');
        assert_eq!(to_lower(b'+'), b'+');
    }

    #[test]
    fn test_keypad_ranges() {
        assert!(keypad_contains(b'b', b'2'));
        assert!(!keypad_contains(b'b', b'3'));
        assert!(keypad_contains(b'+', b'0'));
        assert!(!keypad_contains(b'a', b'0'));
        assert!(keypad_contains(b'z', b'9'));
        assert!(!keypad_contains(b'p', b'9'));
    }

    #[test]
    fn test_key_one_has_no_letters() {
        for letter in (b'a'..=b'z').chain(b'A'..=b'Z') {
            assert!(!keypad_contains(letter, b'1'));
        }
        assert!(!keypad_contains(b'+', b'1'));
        assert!(!keypad_contains(b'1', b'1'));
    }

    #[test]
    fn test_four_letter_keys() {
        for letter in *b"pqrs" {
            assert!(keypad_contains(letter, b'7'));
        }
        for letter in *b"wxyz" {
            assert!(keypad_contains(letter, b'9'));
        }
        assert!(!keypad_contains(b's', b'8'));
        assert!(keypad_contains(b't', b'8'));
        assert!(keypad_contains(b'v', b'8'));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(keypad_contains(b'C', b'2'));
        assert!(keypad_contains(b'W', b'9'));
        assert!(!keypad_contains(b'D', b'2'));
    }

    #[test]
    fn test_every_letter_on_exactly_one_key() {
        for letter in b'a'..=b'z' {
            let keys = (b'0'..=b'9').filter(|&d| keypad_contains(letter, d)).count();
            assert_eq!(keys, 1, "letter {}", letter as char);
        }
    }

    #[test]
    fn test_non_letters_and_non_digit_keys() {
        assert!(!keypad_contains(b' ', b'2'));
        assert!(!keypad_contains(b'2', b'2'));
        assert!(!keypad_contains(b'a', b'a'));
        assert!(!keypad_contains(b'a', b'*'));
        assert_eq!(keypad_digit(b'.'), None);
    }

    #[test]
    fn test_keypad_digits_rendering() {
        assert_eq!(to_keypad_digits("Cab"), "222");
        assert_eq!(to_keypad_digits("Petr Dvorak"), "7387_386725");
        assert_eq!(to_keypad_digits("+x"), "09");
    }
}
