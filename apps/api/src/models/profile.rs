#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::signs::{Element, Quality, SignId};
use crate::profile::compatibility::CompatibilityResult;
use crate::profile::cosmic::CosmicReading;
use crate::profile::personality::PersonalityScores;

/// One reduced numerology number plus its narrative entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberReading {
    pub number: u8,
    pub title: String,
    pub description: String,
}

/// The two reductions are distinct by design: life path from the name,
/// destiny from the birth date (see `profile::numerology`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Numerology {
    pub life_path: NumberReading,
    pub destiny: NumberReading,
}

/// First-letter narrative lead from the letter trait table.
#[derive(Debug, Clone, Serialize)]
pub struct LeadTrait {
    pub letter: char,
    pub trait_text: String,
    pub symbol: String,
    pub element: Element,
}

/// Denormalized sign attributes kept with the stored record so a later
/// catalog edit cannot silently reinterpret an old session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignSnapshot {
    pub name: String,
    pub element: Element,
    pub quality: Quality,
}

/// The record persisted per session. Overwritten on each new analysis;
/// deleted on explicit clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedProfile {
    pub name: String,
    pub birth_date: NaiveDate,
    pub sign_id: SignId,
    pub sign_snapshot: SignSnapshot,
    pub numerology: Numerology,
    pub last_updated: DateTime<Utc>,
}

/// The full assembled profile returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub birth_date: NaiveDate,
    pub sign_id: SignId,
    pub sign_name: String,
    pub element: Element,
    pub quality: Quality,
    pub lead_trait: LeadTrait,
    pub numerology: Numerology,
    /// Bounded display value in [0,100]; distinct from the reduced numbers.
    pub name_energy: u32,
    pub cosmic: CosmicReading,
    pub personality: PersonalityScores,
    /// Scores against the sign's three curated best matches.
    pub compatibility: Vec<CompatibilityResult>,
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
}
