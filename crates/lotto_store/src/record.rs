//! The dated draw record and its CSV row format.
//!
//! One record is one row of the data file, in the column order the
//! original scraper established:
//! `date,w1,…,wN,powerball,power_play,source_url`.

use chrono::NaiveDate;
use lotto_core::types::{Draw, DrawError, Rules};
use serde::Serialize;

/// A historical draw with its date and optional annotations.
///
/// The whites are normalised to ascending order at construction, mirroring
/// the draw value type. Power-play and source-URL columns are free-form
/// annotations carried through unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DrawRecord {
    /// Drawing date.
    pub date: NaiveDate,
    /// White numbers, ascending.
    pub whites: Vec<u16>,
    /// Red (bonus) number.
    pub red: u16,
    /// Power-play multiplier as published, when present.
    pub power_play: Option<String>,
    /// Where the row was obtained from, when recorded.
    pub source_url: Option<String>,
}

impl DrawRecord {
    /// Validates the numbers against the rules and constructs the record.
    pub fn new(
        date: NaiveDate,
        whites: &[u16],
        red: u16,
        rules: &Rules,
    ) -> Result<Self, DrawError> {
        rules.validate(whites, red)?;
        let mut sorted = whites.to_vec();
        sorted.sort_unstable();
        Ok(Self {
            date,
            whites: sorted,
            red,
            power_play: None,
            source_url: None,
        })
    }

    /// Sets the power-play annotation.
    pub fn with_power_play(mut self, power_play: impl Into<String>) -> Self {
        self.power_play = Some(power_play.into());
        self
    }

    /// Sets the source-URL annotation.
    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = Some(source_url.into());
        self
    }

    /// Converts the record into the undated draw value the generator
    /// excludes against.
    pub fn to_draw(&self, rules: &Rules) -> Result<Draw, DrawError> {
        Draw::new(&self.whites, self.red, rules)
    }

    /// The CSV header for data files under the given rules:
    /// `date,w1,…,wN,powerball,power_play,source_url`.
    pub fn header(rules: &Rules) -> Vec<String> {
        let mut columns = Vec::with_capacity(rules.white_count() + 4);
        columns.push("date".to_string());
        for i in 1..=rules.white_count() {
            columns.push(format!("w{}", i));
        }
        columns.push("powerball".to_string());
        columns.push("power_play".to_string());
        columns.push("source_url".to_string());
        columns
    }

    /// The record as a CSV row in header order.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(self.whites.len() + 4);
        row.push(self.date.format("%Y-%m-%d").to_string());
        for w in &self.whites {
            row.push(w.to_string());
        }
        row.push(self.red.to_string());
        row.push(self.power_play.clone().unwrap_or_default());
        row.push(self.source_url.clone().unwrap_or_default());
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_new_sorts_and_validates() {
        let rules = Rules::powerball();
        let record = DrawRecord::new(date("2023-01-04"), &[23, 4, 16, 8, 15], 9, &rules).unwrap();
        assert_eq!(record.whites, vec![4, 8, 15, 16, 23]);

        assert!(DrawRecord::new(date("2023-01-04"), &[1, 1, 2, 3, 4], 9, &rules).is_err());
    }

    #[test]
    fn test_header_matches_scraper_format() {
        let header = DrawRecord::header(&Rules::powerball());
        assert_eq!(
            header,
            vec![
                "date",
                "w1",
                "w2",
                "w3",
                "w4",
                "w5",
                "powerball",
                "power_play",
                "source_url"
            ]
        );
    }

    #[test]
    fn test_to_row_round_trips_annotations() {
        let rules = Rules::powerball();
        let record = DrawRecord::new(date("2023-01-04"), &[4, 8, 15, 16, 23], 9, &rules)
            .unwrap()
            .with_power_play("2")
            .with_source_url("https://example.test/draw");
        let row = record.to_row();
        assert_eq!(row[0], "2023-01-04");
        assert_eq!(row[6], "9");
        assert_eq!(row[7], "2");
        assert_eq!(row[8], "https://example.test/draw");
    }

    #[test]
    fn test_to_draw_matches_numbers() {
        let rules = Rules::powerball();
        let record = DrawRecord::new(date("2023-01-04"), &[4, 8, 15, 16, 23], 9, &rules).unwrap();
        let draw = record.to_draw(&rules).unwrap();
        assert_eq!(draw.whites().numbers(), &[4, 8, 15, 16, 23]);
        assert_eq!(draw.red(), 9);
    }
}
