//! Profile assembly and the engine entry points.
//!
//! All scoring is synchronous and pure given its inputs plus the injected
//! `DailyRng`; only persistence awaits. Latest-request-wins is the caller's
//! contract — `created_at` on each profile gives callers the ordering handle
//! for discarding stale responses.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::catalog::signs::{self, SignId};
use crate::errors::AppError;
use crate::models::profile::{
    LeadTrait, NumberReading, Numerology, PersistedProfile, SignSnapshot, UserProfile,
};
use crate::profile::cosmic::DailyRng;
use crate::profile::{classifier, compatibility, cosmic, date_parser, name, numerology, personality};
use crate::storage::ProfileSessionStore;

/// Full pipeline from raw text: date parse → name extraction →
/// classification → scoring → persist.
pub async fn analyze_from_text(
    store: &ProfileSessionStore,
    rng: &dyn DailyRng,
    raw_text: &str,
    session_id: Uuid,
) -> Result<UserProfile, AppError> {
    let birth_date = date_parser::extract_birth_date(raw_text)
        .ok_or_else(|| AppError::DateNotFound(raw_text.chars().take(80).collect()))?;
    let display_name = date_parser::extract_name(raw_text)
        .ok_or_else(|| AppError::Validation("Input text is empty".to_string()))?;

    let sign_id = classifier::sign_for_date(birth_date);
    debug!("classified {birth_date} as {sign_id:?} for session {session_id}");

    let profile = assemble(display_name, birth_date, sign_id, session_id, Utc::now(), rng);
    store.save(session_id, &persisted_from(&profile)).await?;
    Ok(profile)
}

/// Re-analysis for an explicitly chosen sign. Requires a prior text-derived
/// identity in the session store; refuses to fabricate one.
pub async fn analyze_from_sign(
    store: &ProfileSessionStore,
    rng: &dyn DailyRng,
    sign_id: SignId,
    session_id: Uuid,
) -> Result<UserProfile, AppError> {
    let record = store
        .load(session_id)
        .await?
        .ok_or(AppError::MissingIdentity)?;

    let profile = assemble(
        record.name,
        record.birth_date,
        sign_id,
        session_id,
        Utc::now(),
        rng,
    );
    store.save(session_id, &persisted_from(&profile)).await?;
    Ok(profile)
}

pub async fn clear_profile(
    store: &ProfileSessionStore,
    session_id: Uuid,
) -> Result<(), AppError> {
    store.clear(session_id).await
}

/// Pure assembly of the profile. `now` is passed in so tests can pin the
/// cosmic-score day.
pub fn assemble(
    name: String,
    birth_date: NaiveDate,
    sign_id: SignId,
    session_id: Uuid,
    now: DateTime<Utc>,
    rng: &dyn DailyRng,
) -> UserProfile {
    let sign = signs::get(sign_id);
    let reading = name::analyze_name(&name);

    let life_path = numerology::life_path_number(reading.raw_weight_sum);
    let destiny = numerology::destiny_number(birth_date);
    let name_energy = numerology::name_energy(reading.raw_weight_sum);

    let compatibility = sign
        .best_matches
        .iter()
        .map(|&other| compatibility::score_pair(sign_id, other))
        .collect();

    let cosmic = cosmic::compute_cosmic_score(sign, life_path, now.date_naive(), rng);
    let personality =
        personality::profile_personality(sign.element, sign.quality, life_path, destiny, name_energy);

    UserProfile {
        name,
        birth_date,
        sign_id,
        sign_name: sign.name.to_string(),
        element: sign.element,
        quality: sign.quality,
        lead_trait: LeadTrait {
            letter: reading.lead.letter,
            trait_text: reading.lead.trait_text.to_string(),
            symbol: reading.lead.symbol.to_string(),
            element: reading.lead.element,
        },
        numerology: Numerology {
            life_path: number_reading(life_path),
            destiny: number_reading(destiny),
        },
        name_energy,
        cosmic,
        personality,
        compatibility,
        session_id,
        created_at: now,
    }
}

fn number_reading(n: u8) -> NumberReading {
    let m = numerology::meaning(n);
    NumberReading {
        number: m.number,
        title: m.title.to_string(),
        description: m.description.to_string(),
    }
}

fn persisted_from(profile: &UserProfile) -> PersistedProfile {
    PersistedProfile {
        name: profile.name.clone(),
        birth_date: profile.birth_date,
        sign_id: profile.sign_id,
        sign_snapshot: SignSnapshot {
            name: profile.sign_name.clone(),
            element: profile.element,
            quality: profile.quality,
        },
        numerology: profile.numerology.clone(),
        last_updated: profile.created_at,
    }
}
