//! The Powerball draw calendar.
//!
//! Drawings have run on Wednesdays and Saturdays since 2015-10-07 (the
//! first draw under the 5/69 + 1/26 rules), with Monday drawings added on
//! 2021-08-23. These facts drive the missing-draw report.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// First draw date under the current rules (2015-10-07).
pub fn rules_era_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 10, 7).expect("valid calendar date")
}

/// Date Monday drawings were added to the schedule (2021-08-23).
pub fn monday_drawings_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 8, 23).expect("valid calendar date")
}

/// Returns `true` when a drawing is scheduled on the given date.
pub fn is_scheduled_draw(date: NaiveDate) -> bool {
    if date < rules_era_start() {
        return false;
    }
    match date.weekday() {
        Weekday::Wed | Weekday::Sat => true,
        Weekday::Mon => date >= monday_drawings_start(),
        _ => false,
    }
}

/// All scheduled draw dates in `[from, to]`, ascending.
pub fn scheduled_dates(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut day = from;
    while day <= to {
        if is_scheduled_draw(day) {
            dates.push(day);
        }
        day += Duration::days(1);
    }
    dates
}

/// Scheduled draw dates from the start of the rules era through `through`
/// that are absent from `have`, ascending.
pub fn missing_dates(have: &HashSet<NaiveDate>, through: NaiveDate) -> Vec<NaiveDate> {
    scheduled_dates(rules_era_start(), through)
        .into_iter()
        .filter(|d| !have.contains(d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_era_start_is_a_wednesday_drawing() {
        assert_eq!(rules_era_start().weekday(), Weekday::Wed);
        assert!(is_scheduled_draw(rules_era_start()));
    }

    #[test]
    fn test_no_drawings_before_era_start() {
        // A Wednesday, but before the current rules took effect.
        assert!(!is_scheduled_draw(date("2015-09-30")));
    }

    #[test]
    fn test_mondays_only_after_2021() {
        // Mondays were not drawing days in 2019.
        assert!(!is_scheduled_draw(date("2019-07-01")));
        // The first Monday drawing.
        assert!(is_scheduled_draw(date("2021-08-23")));
        assert!(is_scheduled_draw(date("2021-08-30")));
    }

    #[test]
    fn test_wed_sat_always_scheduled_in_era() {
        assert!(is_scheduled_draw(date("2016-01-02"))); // Saturday
        assert!(is_scheduled_draw(date("2016-01-06"))); // Wednesday
        assert!(!is_scheduled_draw(date("2016-01-05"))); // Tuesday
    }

    #[test]
    fn test_scheduled_dates_in_week() {
        // 2021-08-23 (Mon) through 2021-08-29 (Sun): Mon, Wed, Sat.
        let dates = scheduled_dates(date("2021-08-23"), date("2021-08-29"));
        assert_eq!(
            dates,
            vec![date("2021-08-23"), date("2021-08-25"), date("2021-08-28")]
        );
    }

    #[test]
    fn test_missing_dates_finds_gap() {
        let through = date("2015-10-17");
        // Era start through the 17th schedules: Oct 7, 10, 14, 17.
        let mut have: HashSet<NaiveDate> = scheduled_dates(rules_era_start(), through)
            .into_iter()
            .collect();
        have.remove(&date("2015-10-14"));

        assert_eq!(missing_dates(&have, through), vec![date("2015-10-14")]);
    }
}
