//! Aggregates letter traits across a name: the weight sum feeds numerology,
//! the first letter's entry leads the narrative.

use crate::catalog::letters::{self, LetterTrait, UNKNOWN_TRAIT};

#[derive(Debug, Clone, Copy)]
pub struct NameReading {
    /// Sum of Pythagorean weights over every A–Z character, case-insensitive.
    /// Non-letters contribute nothing.
    pub raw_weight_sum: u32,
    /// Trait entry for the first character, or the generic fallback when the
    /// name leads with something outside A–Z.
    pub lead: LetterTrait,
}

pub fn analyze_name(name: &str) -> NameReading {
    let raw_weight_sum = name
        .chars()
        .filter_map(letters::for_char)
        .map(|lt| lt.weight)
        .sum();

    let lead = name
        .chars()
        .next()
        .and_then(letters::for_char)
        .copied()
        .unwrap_or(UNKNOWN_TRAIT);

    NameReading {
        raw_weight_sum,
        lead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::signs::Element;

    #[test]
    fn test_rina_weight_sum() {
        // R=9, I=9, N=5, A=1
        assert_eq!(analyze_name("Rina").raw_weight_sum, 24);
    }

    #[test]
    fn test_case_and_punctuation_ignored_in_sum() {
        assert_eq!(
            analyze_name("RINA").raw_weight_sum,
            analyze_name("r-i n.a").raw_weight_sum
        );
    }

    #[test]
    fn test_lead_letter_reported() {
        let reading = analyze_name("Rina");
        assert_eq!(reading.lead.letter, 'R');
        assert_eq!(reading.lead.element, Element::Water);
    }

    #[test]
    fn test_non_letter_lead_falls_back_to_generic_trait() {
        let reading = analyze_name("17/05/2001");
        assert_eq!(reading.lead.letter, UNKNOWN_TRAIT.letter);
        assert!(reading.lead.trait_text.contains("mysterious"));
        assert_eq!(reading.raw_weight_sum, 0);
    }

    #[test]
    fn test_empty_name_is_neutral() {
        let reading = analyze_name("");
        assert_eq!(reading.raw_weight_sum, 0);
        assert_eq!(reading.lead.letter, UNKNOWN_TRAIT.letter);
    }
}
