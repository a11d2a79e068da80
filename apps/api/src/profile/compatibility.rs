//! Pairwise sign compatibility: curated match sets plus the directional
//! element table, folded into a bounded additive score with tiered output.
//!
//! `score_pair(a, b)` reads A's curated sets and A's element row, so it is
//! deliberately NOT symmetric with `score_pair(b, a)`. That asymmetry comes
//! from the curated data and is covered by tests — do not "fix" it.

use serde::{Deserialize, Serialize};

use crate::catalog::signs::{self, SignId};

const BASE_SCORE: i32 = 50;
const BEST_MATCH_BONUS: i32 = 30;
const MEDIUM_MATCH_BONUS: i32 = 15;
const ELEMENT_AFFINITY_BONUS: i32 = 20;
const SAME_ELEMENT_BONUS: i32 = 15;
const SAME_QUALITY_BONUS: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityTier {
    VeryCompatible,
    FairlyCompatible,
    Neutral,
    NeedsAdjustment,
}

pub fn tier_for(score: u32) -> CompatibilityTier {
    if score >= 80 {
        CompatibilityTier::VeryCompatible
    } else if score >= 60 {
        CompatibilityTier::FairlyCompatible
    } else if score >= 40 {
        CompatibilityTier::Neutral
    } else {
        CompatibilityTier::NeedsAdjustment
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub sign_a: SignId,
    pub sign_b: SignId,
    pub score: u32,
    pub tier: CompatibilityTier,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub tips: Vec<String>,
}

/// Scores sign A asking about sign B.
pub fn score_pair(a: SignId, b: SignId) -> CompatibilityResult {
    let sa = signs::get(a);
    let sb = signs::get(b);

    let mut score = BASE_SCORE;
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut tips = Vec::new();

    let curated_best = sa.best_matches.contains(&b);
    let curated_medium = !curated_best && sa.medium_matches.contains(&b);

    if curated_best {
        score += BEST_MATCH_BONUS;
        strengths.push(format!(
            "{} and {} are a naturally harmonious pairing",
            sa.name, sb.name
        ));
        tips.push("Keep communication open; this bond deepens quickly with honesty.".to_string());
    } else if curated_medium {
        score += MEDIUM_MATCH_BONUS;
        strengths.push("Solid common ground to build on".to_string());
    } else {
        weaknesses.push("Few natural anchors; affinity here is built, not given".to_string());
        tips.push("Invest in shared routines before expecting easy rapport.".to_string());
    }

    let element_affinity = sa.element.accepts(sb.element);
    if element_affinity {
        score += ELEMENT_AFFINITY_BONUS;
        strengths.push(format!(
            "{} energy is fed by {}",
            sa.element.name(),
            sb.element.name()
        ));
    } else {
        weaknesses.push(format!(
            "{} and {} instincts pull in different directions",
            sa.element.name(),
            sb.element.name()
        ));
        tips.push("Respect each other's first reactions even when they differ.".to_string());
    }

    if sa.element == sb.element {
        score += SAME_ELEMENT_BONUS;
        strengths.push("Shared element: you read each other without trying".to_string());
        weaknesses.push("Same-element pairs can amplify each other's excesses".to_string());
    }

    if sa.quality == sb.quality {
        score += SAME_QUALITY_BONUS;
        strengths.push("Matched pace: you approach change the same way".to_string());
    }

    let score = score.clamp(0, 100) as u32;

    CompatibilityResult {
        sign_a: a,
        sign_b: b,
        score,
        tier: tier_for(score),
        strengths,
        weaknesses,
        tips,
    }
}
