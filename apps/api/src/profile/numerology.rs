//! Single-digit numerology reductions.
//!
//! NOTE on naming: here the life-path number derives from the NAME and the
//! destiny number from the BIRTH DATE — the reverse of the common
//! numerology convention. The mapping is load-bearing for stored profiles
//! and pinned by a test below; do not swap it to "correct" the terminology.

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy)]
pub struct NumberMeaning {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

/// Reduces to a single digit in [1,9]: `n mod 9` with 0 mapped to 9.
pub fn reduce_mod9(n: u32) -> u8 {
    let r = (n % 9) as u8;
    if r == 0 {
        9
    } else {
        r
    }
}

/// Name-derived number from the letter-weight sum.
pub fn life_path_number(raw_weight_sum: u32) -> u8 {
    reduce_mod9(raw_weight_sum)
}

/// Date-derived number: digit sums of day, month, and full year are added
/// separately before the final reduction.
pub fn destiny_number(date: NaiveDate) -> u8 {
    let partial = digit_sum(date.day()) + digit_sum(date.month()) + digit_sum(date.year() as u32);
    reduce_mod9(partial)
}

/// Bounded display transform of the raw weight sum. Reported alongside the
/// reduced numbers, never folded into them.
pub fn name_energy(raw_weight_sum: u32) -> u32 {
    (raw_weight_sum * 2).min(100)
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

const MEANINGS: [NumberMeaning; 9] = [
    NumberMeaning {
        number: 1,
        title: "The Pioneer",
        description: "Independent and original; you open paths others follow.",
    },
    NumberMeaning {
        number: 2,
        title: "The Diplomat",
        description: "Cooperative and tactful; you hold people together.",
    },
    NumberMeaning {
        number: 3,
        title: "The Communicator",
        description: "Expressive and playful; words and ideas come easily.",
    },
    NumberMeaning {
        number: 4,
        title: "The Builder",
        description: "Methodical and steady; you turn plans into foundations.",
    },
    NumberMeaning {
        number: 5,
        title: "The Explorer",
        description: "Restless and versatile; change is where you thrive.",
    },
    NumberMeaning {
        number: 6,
        title: "The Guardian",
        description: "Caring and responsible; others lean on you by instinct.",
    },
    NumberMeaning {
        number: 7,
        title: "The Seeker",
        description: "Reflective and analytical; you look beneath the surface.",
    },
    NumberMeaning {
        number: 8,
        title: "The Achiever",
        description: "Ambitious and pragmatic; you are built for the long game.",
    },
    NumberMeaning {
        number: 9,
        title: "The Humanitarian",
        description: "Generous and idealistic; your circle is wider than most.",
    },
];

/// Narrative entry for a reduced number. Out-of-range input is clamped into
/// [1,9] so a bad upstream value can never panic the lookup.
pub fn meaning(number: u8) -> NumberMeaning {
    MEANINGS[(number.clamp(1, 9) - 1) as usize]
}
