//! Maps a calendar date onto exactly one catalog sign by month/day range
//! membership. Month/day pairs (not day-of-year) keep leap years out of the
//! arithmetic entirely.

use chrono::{Datelike, NaiveDate};

use crate::catalog::signs::{self, SignId};

pub fn sign_for_date(date: NaiveDate) -> SignId {
    let (month, day) = (date.month(), date.day());
    signs::all()
        .iter()
        .find(|s| s.range.contains(month, day))
        .map(|s| s.id)
        // Unreachable while the ranges partition the calendar; the engine
        // must never surface a lookup miss to callers.
        .unwrap_or(SignId::Capricorn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ranges_partition_every_day_of_year() {
        // 2000 is a leap year, so this walks all 366 (month, day) pairs.
        let days = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (m0, len) in days.iter().enumerate() {
            let month = m0 as u32 + 1;
            for day in 1..=*len {
                let hits = signs::all()
                    .iter()
                    .filter(|s| s.range.contains(month, day))
                    .count();
                assert_eq!(hits, 1, "{month:02}-{day:02} matched {hits} signs");
            }
        }
    }

    #[test]
    fn test_year_wrap_resolves_to_capricorn() {
        assert_eq!(sign_for_date(date(1999, 12, 31)), SignId::Capricorn);
        assert_eq!(sign_for_date(date(2000, 1, 1)), SignId::Capricorn);
        assert_eq!(sign_for_date(date(2000, 1, 19)), SignId::Capricorn);
    }

    #[test]
    fn test_boundaries_around_capricorn() {
        assert_eq!(sign_for_date(date(2000, 12, 21)), SignId::Sagittarius);
        assert_eq!(sign_for_date(date(2000, 12, 22)), SignId::Capricorn);
        assert_eq!(sign_for_date(date(2000, 1, 20)), SignId::Aquarius);
    }

    #[test]
    fn test_taurus_range() {
        assert_eq!(sign_for_date(date(2001, 5, 17)), SignId::Taurus);
        assert_eq!(sign_for_date(date(2001, 4, 20)), SignId::Taurus);
        assert_eq!(sign_for_date(date(2001, 5, 20)), SignId::Taurus);
        assert_eq!(sign_for_date(date(2001, 4, 19)), SignId::Aries);
        assert_eq!(sign_for_date(date(2001, 5, 21)), SignId::Gemini);
    }

    #[test]
    fn test_leap_day_is_pisces() {
        assert_eq!(sign_for_date(date(2000, 2, 29)), SignId::Pisces);
    }
}
