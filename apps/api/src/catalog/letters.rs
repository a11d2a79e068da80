#![allow(dead_code)]

//! Per-letter trait table. Weights follow the Pythagorean numerology cycle
//! (A=1 … I=9, J=1 … R=9, S=1 … Z=8); elements rotate Fire → Water → Earth
//! → Air down the alphabet.

use serde::Serialize;

use crate::catalog::signs::Element;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LetterTrait {
    pub letter: char,
    pub weight: u32,
    pub element: Element,
    pub trait_text: &'static str,
    pub symbol: &'static str,
}

/// Narrative fallback for a leading character outside A–Z. Its weight never
/// enters any sum; non-letters are skipped during aggregation.
pub const UNKNOWN_TRAIT: LetterTrait = LetterTrait {
    letter: '*',
    weight: 5,
    element: Element::Air,
    trait_text: "unique and mysterious, hard to read at first glance",
    symbol: "🌀",
};

/// Looks up the trait entry for an ASCII letter, case-insensitive.
/// Returns `None` for anything outside A–Z.
pub fn for_char(c: char) -> Option<&'static LetterTrait> {
    if c.is_ascii_alphabetic() {
        Some(&LETTERS[(c.to_ascii_uppercase() as u8 - b'A') as usize])
    } else {
        None
    }
}

const fn entry(
    letter: char,
    weight: u32,
    element: Element,
    trait_text: &'static str,
    symbol: &'static str,
) -> LetterTrait {
    LetterTrait {
        letter,
        weight,
        element,
        trait_text,
        symbol,
    }
}

use Element::{Air, Earth, Fire, Water};

static LETTERS: [LetterTrait; 26] = [
    entry('A', 1, Fire, "a natural-born leader who acts first", "⚡"),
    entry('B', 2, Water, "calm, patient, and quietly nurturing", "🌱"),
    entry('C', 3, Earth, "creative and quick to put ideas into words", "🎨"),
    entry('D', 4, Air, "disciplined and dependable under pressure", "🛡️"),
    entry('E', 5, Fire, "free-spirited and endlessly adaptable", "🦋"),
    entry('F', 6, Water, "warm-hearted and protective of loved ones", "🏡"),
    entry('G', 7, Earth, "thoughtful, observant, and a little private", "🔍"),
    entry('H', 8, Air, "ambitious with a mind for building things", "🏗️"),
    entry('I', 9, Fire, "idealistic and moved by compassion", "🌅"),
    entry('J', 1, Water, "honest, driven, and self-starting", "🧭"),
    entry('K', 2, Earth, "intuitive with strong quiet convictions", "🗝️"),
    entry('L', 3, Air, "expressive, sociable, and optimistic", "🎈"),
    entry('M', 4, Fire, "hard-working with deep reserves of energy", "⛰️"),
    entry('N', 5, Water, "curious, original, and a touch rebellious", "🌊"),
    entry('O', 6, Earth, "steady, responsible, and loyal to the end", "🪵"),
    entry('P', 7, Air, "perceptive with a philosophical streak", "📜"),
    entry('Q', 8, Fire, "magnetic, unconventional, and determined", "🔮"),
    entry('R', 9, Water, "deeply feeling with a strong sense of purpose", "🌹"),
    entry('S', 1, Earth, "charismatic and drawn to new beginnings", "🌟"),
    entry('T', 2, Air, "diplomatic, considerate, and a good listener", "🕊️"),
    entry('U', 3, Fire, "lucky, lively, and quick to bounce back", "🍀"),
    entry('V', 4, Water, "efficient, focused, and quietly intense", "🏹"),
    entry('W', 5, Earth, "versatile with a taste for adventure", "🗺️"),
    entry('X', 6, Air, "passionate, artistic, and magnetic", "🎭"),
    entry('Y', 7, Fire, "independent with a searching mind", "🕯️"),
    entry('Z', 8, Water, "driven, realistic, and quietly powerful", "⚓"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_26_letters() {
        for (i, lt) in LETTERS.iter().enumerate() {
            assert_eq!(lt.letter, (b'A' + i as u8) as char);
        }
    }

    #[test]
    fn test_weights_follow_pythagorean_cycle() {
        for (i, lt) in LETTERS.iter().enumerate() {
            assert_eq!(lt.weight, (i as u32 % 9) + 1, "letter {}", lt.letter);
            assert!((1..=9).contains(&lt.weight));
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(for_char('r').unwrap().weight, 9);
        assert_eq!(for_char('R').unwrap().weight, 9);
    }

    #[test]
    fn test_non_letters_have_no_entry() {
        assert!(for_char('7').is_none());
        assert!(for_char(' ').is_none());
        assert!(for_char('é').is_none());
    }

    #[test]
    fn test_spot_check_boundary_weights() {
        assert_eq!(for_char('A').unwrap().weight, 1);
        assert_eq!(for_char('I').unwrap().weight, 9);
        assert_eq!(for_char('J').unwrap().weight, 1);
        assert_eq!(for_char('Z').unwrap().weight, 8);
    }
}
