//! Five-axis personality distribution: fixed element and quality delta
//! tables applied to a 50 baseline, then numerology adjustments, then a
//! [1,100] clamp per axis.

use serde::Serialize;

use crate::catalog::signs::{Element, Quality};

/// Axis order everywhere in this module:
/// intellectual, emotional, social, spiritual, physical.
/// The order doubles as the tie-break priority for the dominant axis.
const AXIS_NAMES: [&str; 5] = ["intellectual", "emotional", "social", "spiritual", "physical"];

const DOMINANT_THRESHOLD: u32 = 70;

#[derive(Debug, Clone, Serialize)]
pub struct PersonalityScores {
    pub intellectual: u32,
    pub emotional: u32,
    pub social: u32,
    pub spiritual: u32,
    pub physical: u32,
    pub summary: String,
}

fn element_deltas(element: Element) -> [i32; 5] {
    match element {
        Element::Fire => [5, -5, 10, 0, 15],
        Element::Water => [0, 15, -5, 10, -5],
        Element::Earth => [10, 0, -5, 5, 10],
        Element::Air => [15, -5, 15, 0, -5],
    }
}

fn quality_deltas(quality: Quality) -> [i32; 5] {
    match quality {
        Quality::Cardinal => [5, 0, 10, 0, 5],
        Quality::Fixed => [5, 5, -5, 5, 5],
        Quality::Mutable => [10, 5, 5, 10, -5],
    }
}

pub fn profile_personality(
    element: Element,
    quality: Quality,
    life_path: u8,
    destiny: u8,
    name_energy: u32,
) -> PersonalityScores {
    let mut axes = [50i32; 5];
    let e = element_deltas(element);
    let q = quality_deltas(quality);
    for i in 0..5 {
        axes[i] += e[i] + q[i];
    }
    axes[0] += i32::from(life_path);
    axes[3] += i32::from(destiny);
    axes[1] += (name_energy / 10) as i32;

    let clamped: [u32; 5] = axes.map(|v| v.clamp(1, 100) as u32);
    let summary = summarize(clamped);

    PersonalityScores {
        intellectual: clamped[0],
        emotional: clamped[1],
        social: clamped[2],
        spiritual: clamped[3],
        physical: clamped[4],
        summary,
    }
}

/// Highest axis in priority order; first occurrence wins ties.
fn dominant_axis(axes: [u32; 5]) -> (&'static str, u32) {
    let mut best = 0;
    for i in 1..5 {
        if axes[i] > axes[best] {
            best = i;
        }
    }
    (AXIS_NAMES[best], axes[best])
}

fn summarize(axes: [u32; 5]) -> String {
    let (name, value) = dominant_axis(axes);
    if value > DOMINANT_THRESHOLD {
        format!("Your {name} side leads the way ({value}/100).")
    } else {
        "Your energies are balanced across dimensions.".to_string()
    }
}
