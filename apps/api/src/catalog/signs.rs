#![allow(dead_code)]

//! The zodiac sign catalog: 12 fixed civil-calendar date ranges with curated
//! attributes. Ranges are month/day pairs (not day-of-year) so leap years
//! need no special handling, and together they partition the full calendar —
//! Capricorn carries the Dec 22 → Jan 19 year wrap.
//!
//! Best/medium match sets are curated independently per sign, so pairwise
//! compatibility is intentionally directional: B appearing in A's best
//! matches does not imply the reverse.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignId {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl SignId {
    pub const ALL: [SignId; 12] = [
        SignId::Aries,
        SignId::Taurus,
        SignId::Gemini,
        SignId::Cancer,
        SignId::Leo,
        SignId::Virgo,
        SignId::Libra,
        SignId::Scorpio,
        SignId::Sagittarius,
        SignId::Capricorn,
        SignId::Aquarius,
        SignId::Pisces,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
}

impl Element {
    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Earth => "Earth",
            Element::Air => "Air",
        }
    }

    /// Directional element compatibility (A's element asking about B's).
    /// The table is NOT symmetric: Earth accepts Fire but Fire does not
    /// accept Earth.
    pub fn accepts(self, other: Element) -> bool {
        let set: &[Element] = match self {
            Element::Fire => &[Element::Fire, Element::Air],
            Element::Water => &[Element::Water, Element::Earth],
            Element::Earth => &[Element::Earth, Element::Water, Element::Fire],
            Element::Air => &[Element::Air, Element::Fire, Element::Water],
        };
        set.contains(&other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LunarPhase {
    NewMoon,
    Waxing,
    Half,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Inclusive month/day range. `start` may sort after `end` (year wrap).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DateRange {
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl DateRange {
    pub fn contains(&self, month: u32, day: u32) -> bool {
        let p = (month, day);
        let start = (self.start_month, self.start_day);
        let end = (self.end_month, self.end_day);
        if start <= end {
            p >= start && p <= end
        } else {
            // Year wrap: Dec 22 – Jan 19
            p >= start || p <= end
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ZodiacSign {
    pub id: SignId,
    pub name: &'static str,
    pub range: DateRange,
    pub element: Element,
    pub quality: Quality,
    pub ruling_planets: &'static [&'static str],
    pub lucky_colors: &'static [&'static str],
    pub lucky_stones: &'static [&'static str],
    pub lucky_numbers: &'static [u32],
    /// English weekday name, matched as a case-insensitive substring of
    /// chrono's `%A` output by the cosmic score engine.
    pub lucky_day: &'static str,
    pub lunar_phase: LunarPhase,
    pub season: Season,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub best_matches: &'static [SignId],
    pub medium_matches: &'static [SignId],
    pub careers: &'static [&'static str],
}

pub fn get(id: SignId) -> &'static ZodiacSign {
    &SIGNS[id.index()]
}

pub fn all() -> &'static [ZodiacSign; 12] {
    &SIGNS
}

const fn range(start_month: u32, start_day: u32, end_month: u32, end_day: u32) -> DateRange {
    DateRange {
        start_month,
        start_day,
        end_month,
        end_day,
    }
}

static SIGNS: [ZodiacSign; 12] = [
    ZodiacSign {
        id: SignId::Aries,
        name: "Aries",
        range: range(3, 21, 4, 19),
        element: Element::Fire,
        quality: Quality::Cardinal,
        ruling_planets: &["Mars"],
        lucky_colors: &["red", "scarlet"],
        lucky_stones: &["diamond", "bloodstone"],
        lucky_numbers: &[1, 9],
        lucky_day: "Tuesday",
        lunar_phase: LunarPhase::Waxing,
        season: Season::Spring,
        strengths: &["courageous", "energetic", "direct", "pioneering"],
        weaknesses: &["impatient", "impulsive", "short-tempered"],
        best_matches: &[SignId::Leo, SignId::Sagittarius, SignId::Gemini],
        medium_matches: &[SignId::Aquarius, SignId::Libra, SignId::Scorpio],
        careers: &["entrepreneur", "athlete", "firefighter", "sales lead"],
    },
    ZodiacSign {
        id: SignId::Taurus,
        name: "Taurus",
        range: range(4, 20, 5, 20),
        element: Element::Earth,
        quality: Quality::Fixed,
        ruling_planets: &["Venus"],
        lucky_colors: &["green", "pink"],
        lucky_stones: &["emerald", "rose quartz"],
        lucky_numbers: &[2, 6],
        lucky_day: "Friday",
        lunar_phase: LunarPhase::NewMoon,
        season: Season::Spring,
        strengths: &["reliable", "patient", "devoted", "practical"],
        weaknesses: &["stubborn", "possessive", "resistant to change"],
        best_matches: &[SignId::Virgo, SignId::Capricorn, SignId::Cancer],
        medium_matches: &[SignId::Pisces, SignId::Scorpio, SignId::Libra],
        careers: &["chef", "banker", "architect", "horticulturist"],
    },
    ZodiacSign {
        id: SignId::Gemini,
        name: "Gemini",
        range: range(5, 21, 6, 20),
        element: Element::Air,
        quality: Quality::Mutable,
        ruling_planets: &["Mercury"],
        lucky_colors: &["yellow", "light blue"],
        lucky_stones: &["agate", "citrine"],
        lucky_numbers: &[3, 5],
        lucky_day: "Wednesday",
        lunar_phase: LunarPhase::Waxing,
        season: Season::Spring,
        strengths: &["adaptable", "curious", "witty", "communicative"],
        weaknesses: &["inconsistent", "restless", "indecisive"],
        best_matches: &[SignId::Libra, SignId::Aquarius, SignId::Aries],
        medium_matches: &[SignId::Leo, SignId::Sagittarius, SignId::Virgo],
        careers: &["journalist", "translator", "teacher", "marketer"],
    },
    ZodiacSign {
        id: SignId::Cancer,
        name: "Cancer",
        range: range(6, 21, 7, 22),
        element: Element::Water,
        quality: Quality::Cardinal,
        ruling_planets: &["Moon"],
        lucky_colors: &["white", "silver"],
        lucky_stones: &["pearl", "moonstone"],
        lucky_numbers: &[2, 7],
        lucky_day: "Monday",
        lunar_phase: LunarPhase::Full,
        season: Season::Summer,
        strengths: &["loyal", "empathetic", "intuitive", "protective"],
        weaknesses: &["moody", "clingy", "overly cautious"],
        best_matches: &[SignId::Scorpio, SignId::Pisces, SignId::Taurus],
        medium_matches: &[SignId::Virgo, SignId::Capricorn, SignId::Gemini],
        careers: &["nurse", "psychologist", "historian", "interior designer"],
    },
    ZodiacSign {
        id: SignId::Leo,
        name: "Leo",
        range: range(7, 23, 8, 22),
        element: Element::Fire,
        quality: Quality::Fixed,
        ruling_planets: &["Sun"],
        lucky_colors: &["gold", "orange"],
        lucky_stones: &["ruby", "amber"],
        lucky_numbers: &[1, 4],
        lucky_day: "Sunday",
        lunar_phase: LunarPhase::Full,
        season: Season::Summer,
        strengths: &["confident", "generous", "charismatic", "creative"],
        weaknesses: &["arrogant", "attention-seeking", "inflexible"],
        best_matches: &[SignId::Sagittarius, SignId::Libra, SignId::Gemini],
        medium_matches: &[SignId::Aries, SignId::Aquarius, SignId::Cancer],
        careers: &["actor", "executive", "event producer", "designer"],
    },
    ZodiacSign {
        id: SignId::Virgo,
        name: "Virgo",
        range: range(8, 23, 9, 22),
        element: Element::Earth,
        quality: Quality::Mutable,
        ruling_planets: &["Mercury"],
        lucky_colors: &["navy", "grey"],
        lucky_stones: &["sapphire", "jade"],
        lucky_numbers: &[5, 14],
        lucky_day: "Wednesday",
        lunar_phase: LunarPhase::Half,
        season: Season::Summer,
        strengths: &["analytical", "meticulous", "helpful", "modest"],
        weaknesses: &["overcritical", "worrying", "perfectionist"],
        best_matches: &[SignId::Taurus, SignId::Capricorn, SignId::Cancer],
        medium_matches: &[SignId::Scorpio, SignId::Pisces, SignId::Leo],
        careers: &["doctor", "editor", "analyst", "pharmacist"],
    },
    ZodiacSign {
        id: SignId::Libra,
        name: "Libra",
        range: range(9, 23, 10, 22),
        element: Element::Air,
        quality: Quality::Cardinal,
        ruling_planets: &["Venus"],
        lucky_colors: &["blue", "pastel green"],
        lucky_stones: &["opal", "lapis lazuli"],
        lucky_numbers: &[6, 15],
        lucky_day: "Friday",
        lunar_phase: LunarPhase::Waxing,
        season: Season::Autumn,
        strengths: &["diplomatic", "fair-minded", "sociable", "gracious"],
        weaknesses: &["indecisive", "conflict-avoidant", "self-pitying"],
        best_matches: &[SignId::Gemini, SignId::Aquarius, SignId::Leo],
        medium_matches: &[SignId::Sagittarius, SignId::Aries, SignId::Virgo],
        careers: &["lawyer", "diplomat", "curator", "stylist"],
    },
    ZodiacSign {
        id: SignId::Scorpio,
        name: "Scorpio",
        range: range(10, 23, 11, 21),
        element: Element::Water,
        quality: Quality::Fixed,
        ruling_planets: &["Pluto", "Mars"],
        lucky_colors: &["maroon", "black"],
        lucky_stones: &["topaz", "obsidian"],
        lucky_numbers: &[8, 11],
        lucky_day: "Tuesday",
        lunar_phase: LunarPhase::NewMoon,
        season: Season::Autumn,
        strengths: &["resourceful", "passionate", "determined", "perceptive"],
        weaknesses: &["jealous", "secretive", "unforgiving"],
        best_matches: &[SignId::Cancer, SignId::Pisces, SignId::Capricorn],
        medium_matches: &[SignId::Virgo, SignId::Taurus, SignId::Leo],
        careers: &["detective", "surgeon", "researcher", "strategist"],
    },
    ZodiacSign {
        id: SignId::Sagittarius,
        name: "Sagittarius",
        range: range(11, 22, 12, 21),
        element: Element::Fire,
        quality: Quality::Mutable,
        ruling_planets: &["Jupiter"],
        lucky_colors: &["purple", "turquoise"],
        lucky_stones: &["turquoise", "amethyst"],
        lucky_numbers: &[3, 9],
        lucky_day: "Thursday",
        lunar_phase: LunarPhase::Full,
        season: Season::Autumn,
        strengths: &["optimistic", "honest", "adventurous", "philosophical"],
        weaknesses: &["tactless", "restless", "overpromising"],
        best_matches: &[SignId::Aries, SignId::Leo, SignId::Aquarius],
        medium_matches: &[SignId::Libra, SignId::Gemini, SignId::Pisces],
        careers: &["travel writer", "professor", "pilot", "tour guide"],
    },
    ZodiacSign {
        id: SignId::Capricorn,
        name: "Capricorn",
        range: range(12, 22, 1, 19),
        element: Element::Earth,
        quality: Quality::Cardinal,
        ruling_planets: &["Saturn"],
        lucky_colors: &["brown", "dark green"],
        lucky_stones: &["garnet", "onyx"],
        lucky_numbers: &[4, 8],
        lucky_day: "Saturday",
        lunar_phase: LunarPhase::Half,
        season: Season::Winter,
        strengths: &["disciplined", "responsible", "ambitious", "persistent"],
        weaknesses: &["pessimistic", "unforgiving", "workaholic"],
        best_matches: &[SignId::Taurus, SignId::Virgo, SignId::Pisces],
        medium_matches: &[SignId::Scorpio, SignId::Cancer, SignId::Aquarius],
        careers: &["engineer", "accountant", "project manager", "judge"],
    },
    ZodiacSign {
        id: SignId::Aquarius,
        name: "Aquarius",
        range: range(1, 20, 2, 18),
        element: Element::Air,
        quality: Quality::Fixed,
        ruling_planets: &["Uranus", "Saturn"],
        lucky_colors: &["electric blue", "silver"],
        lucky_stones: &["amethyst", "aquamarine"],
        lucky_numbers: &[4, 7],
        lucky_day: "Saturday",
        lunar_phase: LunarPhase::Waxing,
        season: Season::Winter,
        strengths: &["original", "independent", "humanitarian", "inventive"],
        weaknesses: &["aloof", "contrarian", "emotionally detached"],
        best_matches: &[SignId::Gemini, SignId::Libra, SignId::Sagittarius],
        medium_matches: &[SignId::Aries, SignId::Leo, SignId::Capricorn],
        careers: &["scientist", "inventor", "social worker", "programmer"],
    },
    ZodiacSign {
        id: SignId::Pisces,
        name: "Pisces",
        range: range(2, 19, 3, 20),
        element: Element::Water,
        quality: Quality::Mutable,
        ruling_planets: &["Neptune", "Jupiter"],
        lucky_colors: &["sea green", "lavender"],
        lucky_stones: &["aquamarine", "jade"],
        lucky_numbers: &[3, 7],
        lucky_day: "Thursday",
        lunar_phase: LunarPhase::NewMoon,
        season: Season::Winter,
        strengths: &["compassionate", "artistic", "intuitive", "gentle"],
        weaknesses: &["escapist", "overly trusting", "easily discouraged"],
        best_matches: &[SignId::Cancer, SignId::Scorpio, SignId::Capricorn],
        medium_matches: &[SignId::Taurus, SignId::Virgo, SignId::Sagittarius],
        careers: &["musician", "photographer", "therapist", "marine biologist"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_twelve_signs_in_id_order() {
        assert_eq!(SIGNS.len(), 12);
        for (i, sign) in SIGNS.iter().enumerate() {
            assert_eq!(sign.id.index(), i, "{} out of place", sign.name);
        }
    }

    #[test]
    fn test_match_sets_never_include_self() {
        for sign in all() {
            assert!(!sign.best_matches.contains(&sign.id), "{}", sign.name);
            assert!(!sign.medium_matches.contains(&sign.id), "{}", sign.name);
        }
    }

    #[test]
    fn test_best_and_medium_sets_are_disjoint() {
        for sign in all() {
            for id in sign.best_matches {
                assert!(
                    !sign.medium_matches.contains(id),
                    "{} lists {:?} as both best and medium",
                    sign.name,
                    id
                );
            }
        }
    }

    #[test]
    fn test_curated_asymmetry_exists() {
        // Capricorn sits in Scorpio's best matches but Scorpio only makes
        // Capricorn's medium list. The compatibility engine relies on this.
        let scorpio = get(SignId::Scorpio);
        let capricorn = get(SignId::Capricorn);
        assert!(scorpio.best_matches.contains(&SignId::Capricorn));
        assert!(!capricorn.best_matches.contains(&SignId::Scorpio));
        assert!(capricorn.medium_matches.contains(&SignId::Scorpio));
    }

    #[test]
    fn test_element_table_is_directional() {
        assert!(Element::Earth.accepts(Element::Fire));
        assert!(!Element::Fire.accepts(Element::Earth));
        assert!(Element::Air.accepts(Element::Water));
        assert!(!Element::Water.accepts(Element::Air));
    }

    #[test]
    fn test_every_element_accepts_itself() {
        for e in [Element::Fire, Element::Water, Element::Earth, Element::Air] {
            assert!(e.accepts(e));
        }
    }

    #[test]
    fn test_capricorn_range_wraps_the_year() {
        let r = get(SignId::Capricorn).range;
        assert!(r.contains(12, 22));
        assert!(r.contains(12, 31));
        assert!(r.contains(1, 1));
        assert!(r.contains(1, 19));
        assert!(!r.contains(1, 20));
        assert!(!r.contains(12, 21));
    }

    #[test]
    fn test_sign_id_round_trips_through_serde() {
        let json = serde_json::to_string(&SignId::Sagittarius).unwrap();
        assert_eq!(json, r#""sagittarius""#);
        let back: SignId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SignId::Sagittarius);
    }
}
