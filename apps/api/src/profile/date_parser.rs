//! Date and name extraction from free-form Indonesian text.
//!
//! Two date shapes are recognized, tried in order:
//! (a) numeric `D/M/Y` or `D-M-Y`, always read day-first;
//! (b) `D <month name> [Y]` using the Indonesian month table, with the year
//!     defaulting to 2000 when omitted. The default is a fixed convention,
//!     never "the current year".

use chrono::NaiveDate;

const MONTHS: &[(&str, u32)] = &[
    ("januari", 1),
    ("februari", 2),
    ("maret", 3),
    ("april", 4),
    ("mei", 5),
    ("juni", 6),
    ("juli", 7),
    ("agustus", 8),
    ("september", 9),
    ("oktober", 10),
    ("november", 11),
    ("desember", 12),
];

/// Year used for `D <month>` inputs that carry no year.
const DEFAULT_YEAR: i32 = 2000;

/// Markers that introduce the speaker's name ("namaku Rina", "nama saya Rina").
const NAME_MARKERS: &[&str] = &["namaku", "nama", "saya", "aku"];

/// Scans the text for a calendar date. Returns `None` when nothing
/// recognizable is found; never panics on garbage input.
pub fn extract_birth_date(text: &str) -> Option<NaiveDate> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    // (a) numeric D/M/Y or D-M-Y
    for token in &tokens {
        if let Some(date) = parse_numeric(token) {
            return Some(date);
        }
    }

    // (b) D <month name> [Y]
    for (i, token) in tokens.iter().enumerate() {
        let day = match clean(token).parse::<u32>() {
            Ok(d) if (1..=31).contains(&d) => d,
            _ => continue,
        };
        let month = match tokens.get(i + 1).and_then(|t| month_number(t)) {
            Some(m) => m,
            None => continue,
        };
        let year = tokens
            .get(i + 2)
            .and_then(|t| clean(t).parse::<i32>().ok())
            .filter(|y| (1..=9999).contains(y))
            .unwrap_or(DEFAULT_YEAR);
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    None
}

/// Extracts the speaker's name: the token following an identity marker, or
/// the first whitespace-delimited token of the input when no marker is
/// present — even if that token is numeric. Returns `None` only for blank
/// input.
pub fn extract_name(text: &str) -> Option<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    for (i, token) in tokens.iter().enumerate() {
        if NAME_MARKERS.contains(&token.to_lowercase().as_str()) {
            // Skip chained markers: "nama saya Rina"
            for candidate in &tokens[i + 1..] {
                if !NAME_MARKERS.contains(&candidate.to_lowercase().as_str()) {
                    let cleaned = clean(candidate);
                    if !cleaned.is_empty() {
                        return Some(cleaned.to_string());
                    }
                }
            }
        }
    }

    Some(tokens[0].to_string())
}

fn parse_numeric(token: &str) -> Option<NaiveDate> {
    let sep = if token.contains('/') {
        '/'
    } else if token.contains('-') {
        '-'
    } else {
        return None;
    };
    let parts: Vec<&str> = clean(token).split(sep).collect();
    if parts.len() != 3 {
        return None;
    }
    // Day-first by convention; ambiguous inputs like 05/06 stay day-first.
    let day = parts[0].parse::<u32>().ok()?;
    let month = parts[1].parse::<u32>().ok()?;
    let year = parts[2].parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(token: &str) -> Option<u32> {
    let lower = clean(token).to_lowercase();
    MONTHS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, n)| *n)
}

fn clean(token: &str) -> &str {
    token.trim_matches(|c: char| c == ',' || c == '.' || c == '!' || c == '?')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_slash_numeric_date() {
        assert_eq!(extract_birth_date("17/05/2001"), Some(date(2001, 5, 17)));
    }

    #[test]
    fn test_dash_numeric_date() {
        assert_eq!(extract_birth_date("17-05-2001"), Some(date(2001, 5, 17)));
    }

    #[test]
    fn test_numeric_date_is_day_first() {
        assert_eq!(extract_birth_date("05/06/1999"), Some(date(1999, 6, 5)));
    }

    #[test]
    fn test_month_name_with_year() {
        assert_eq!(
            extract_birth_date("Namaku Rina lahir 17 Mei 2001"),
            Some(date(2001, 5, 17))
        );
    }

    #[test]
    fn test_month_name_without_year_defaults_to_2000() {
        assert_eq!(extract_birth_date("lahir 3 Desember"), Some(date(2000, 12, 3)));
    }

    #[test]
    fn test_month_name_is_case_insensitive() {
        assert_eq!(extract_birth_date("12 AGUSTUS 1995"), Some(date(1995, 8, 12)));
    }

    #[test]
    fn test_trailing_punctuation_tolerated() {
        assert_eq!(
            extract_birth_date("aku lahir 17 Mei 2001."),
            Some(date(2001, 5, 17))
        );
    }

    #[test]
    fn test_impossible_numeric_date_rejected() {
        assert_eq!(extract_birth_date("32/13/2001"), None);
        assert_eq!(extract_birth_date("29/02/2001"), None);
    }

    #[test]
    fn test_leap_day_accepted() {
        assert_eq!(extract_birth_date("29/02/2000"), Some(date(2000, 2, 29)));
    }

    #[test]
    fn test_no_date_returns_none() {
        assert_eq!(extract_birth_date("halo apa kabar"), None);
        assert_eq!(extract_birth_date(""), None);
    }

    #[test]
    fn test_name_after_marker() {
        assert_eq!(
            extract_name("Namaku Rina lahir 17 Mei 2001").as_deref(),
            Some("Rina")
        );
    }

    #[test]
    fn test_name_after_chained_markers() {
        assert_eq!(extract_name("nama saya Budi").as_deref(), Some("Budi"));
    }

    #[test]
    fn test_name_falls_back_to_first_token() {
        // Deliberate rule: no marker means the first token is the name,
        // even when it is the date itself.
        assert_eq!(extract_name("17/05/2001").as_deref(), Some("17/05/2001"));
    }

    #[test]
    fn test_blank_input_has_no_name() {
        assert_eq!(extract_name("   "), None);
    }
}
