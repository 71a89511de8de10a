//! Festival calendar lookups
//!
//! Answers "what festivals fall on date D / in month M" against the loaded
//! festival dataset, and carries the fixed Tamil month label table plus the
//! keyword heuristic that maps a festival name to a deity category.

use crate::models::{DeityCategory, FestivalCalendar, FestivalEntry};
use chrono::{Datelike, Local, NaiveDate};

/// Category tag applied to entries from the major annual festival list
pub const MAJOR_CATEGORY: &str = "major";

/// A festival entry tagged with the category it came from
#[derive(Debug, Clone)]
pub struct FestivalOccurrence {
    pub category: String,
    pub entry: FestivalEntry,
}

impl FestivalOccurrence {
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.entry.date
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.entry.display_name()
    }
}

impl FestivalCalendar {
    /// Every festival (all ritual categories plus major annual) falling in
    /// the given month, sorted ascending by date. The sort is stable, so
    /// same-day entries keep category order with major entries last.
    #[must_use]
    pub fn festivals_for_month(&self, year: i32, month: u32) -> Vec<FestivalOccurrence> {
        let mut occurrences: Vec<FestivalOccurrence> = self
            .festivals
            .iter()
            .flat_map(|(category, entries)| {
                entries.iter().map(move |entry| FestivalOccurrence {
                    category: category.clone(),
                    entry: entry.clone(),
                })
            })
            .chain(
                self.major_annual_festivals
                    .iter()
                    .map(|entry| FestivalOccurrence {
                        category: MAJOR_CATEGORY.to_string(),
                        entry: entry.clone(),
                    }),
            )
            .filter(|occ| occ.date().year() == year && occ.date().month() == month)
            .collect();

        occurrences.sort_by_key(FestivalOccurrence::date);
        occurrences
    }

    /// Festivals falling on the exact day
    #[must_use]
    pub fn festivals_for_date(&self, date: NaiveDate) -> Vec<FestivalOccurrence> {
        self.festivals_for_month(date.year(), date.month())
            .into_iter()
            .filter(|occ| occ.date() == date)
            .collect()
    }

    /// Festivals falling on the current local date
    #[must_use]
    pub fn festivals_today(&self) -> Vec<FestivalOccurrence> {
        self.festivals_for_date(Local::now().date_naive())
    }
}

/// Banner text for a festival notification: display name plus the localized
/// Tamil month label when one is known
#[must_use]
pub fn banner_label(occurrence: &FestivalOccurrence) -> String {
    match occurrence.entry.tamil_month.as_deref() {
        Some(month) => format!("{} - {}", occurrence.display_name(), tamil_month_label(month)),
        None => occurrence.display_name().to_string(),
    }
}

/// Fixed lookup table from traditional Tamil solar month names to their Tamil
/// script labels. Unmapped names fall back to the raw value.
#[must_use]
pub fn tamil_month_label(month: &str) -> &str {
    const TAMIL_MONTHS: &[(&str, &str)] = &[
        ("Thai", "தை"),
        ("Masi", "மாசி"),
        ("Panguni", "பங்குனி"),
        ("Chithirai", "சித்திரை"),
        ("Vaikasi", "வைகாசி"),
        ("Aani", "ஆனி"),
        ("Aadi", "ஆடி"),
        ("Aavani", "ஆவணி"),
        ("Purattasi", "புரட்டாசி"),
        ("Aippasi", "ஐப்பசி"),
        ("Karthigai", "கார்த்திகை"),
        ("Margazhi", "மார்கழி"),
    ];
    TAMIL_MONTHS
        .iter()
        .find(|(name, _)| *name == month)
        .map_or(month, |(_, label)| label)
}

/// Infer the deity category a festival is associated with by substring match
/// against an ordered keyword list; the first matching rule wins.
///
/// This is a best-effort heuristic, not a classification guarantee. `None`
/// means the festival is celebrated across temples generally and callers
/// should fall back to an unfiltered view.
#[must_use]
pub fn infer_deity(festival_name: &str) -> Option<DeityCategory> {
    const DEITY_RULES: &[(DeityCategory, &[&str])] = &[
        (DeityCategory::Shiva, &["pradosham", "shiva"]),
        (DeityCategory::Vishnu, &["ekadashi", "vishnu", "vaikunta"]),
        (DeityCategory::Murugan, &["sashti", "murugan", "skanda"]),
        (DeityCategory::Devi, &["pournami", "amman", "devi"]),
    ];

    let name = festival_name.to_lowercase();
    DEITY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| name.contains(kw)))
        .map(|(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeMap;

    fn entry(date: &str, kind: &str, tamil_month: Option<&str>) -> FestivalEntry {
        FestivalEntry {
            date: date.parse().unwrap(),
            day: None,
            kind: Some(kind.to_string()),
            name: None,
            tamil_name: None,
            tamil_month: tamil_month.map(str::to_string),
            duration: None,
        }
    }

    fn sample_calendar() -> FestivalCalendar {
        let mut festivals = BTreeMap::new();
        festivals.insert(
            "pradosham".to_string(),
            vec![
                entry("2025-01-11", "Shani Pradosham", Some("Thai")),
                entry("2025-02-10", "Soma Pradosham", Some("Masi")),
            ],
        );
        festivals.insert(
            "ekadashi".to_string(),
            vec![entry("2025-01-24", "Shattila Ekadashi", Some("Thai"))],
        );
        FestivalCalendar {
            festivals,
            major_annual_festivals: vec![entry("2025-01-14", "Pongal", Some("Thai"))],
        }
    }

    #[test]
    fn test_month_lookup_unions_categories_and_major() {
        let cal = sample_calendar();
        let january = cal.festivals_for_month(2025, 1);
        assert_eq!(january.len(), 3);

        // sorted ascending by date
        for pair in january.windows(2) {
            assert!(pair[0].date() <= pair[1].date());
        }

        let categories: Vec<&str> = january.iter().map(|o| o.category.as_str()).collect();
        assert_eq!(categories, vec!["pradosham", "major", "ekadashi"]);
    }

    #[test]
    fn test_month_lookup_filters_year_and_month() {
        let cal = sample_calendar();
        assert_eq!(cal.festivals_for_month(2025, 2).len(), 1);
        assert!(cal.festivals_for_month(2024, 1).is_empty());
        assert!(cal.festivals_for_month(2025, 3).is_empty());
    }

    #[test]
    fn test_single_entry_scenario() {
        let mut festivals = BTreeMap::new();
        festivals.insert(
            "harvest".to_string(),
            vec![entry("2024-01-14", "Thai Pongal", Some("Thai"))],
        );
        let cal = FestivalCalendar {
            festivals,
            major_annual_festivals: vec![],
        };

        let january = cal.festivals_for_month(2024, 1);
        assert_eq!(january.len(), 1);
        assert_eq!(january[0].display_name(), "Thai Pongal");
        assert!(cal.festivals_for_month(2024, 2).is_empty());
    }

    #[test]
    fn test_date_lookup_is_exact_day() {
        let cal = sample_calendar();
        let date = "2025-01-14".parse().unwrap();
        let todays = cal.festivals_for_date(date);
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].display_name(), "Pongal");
        assert!(cal.festivals_for_date("2025-01-15".parse().unwrap()).is_empty());
    }

    #[test]
    fn test_banner_label_maps_tamil_month() {
        let occ = FestivalOccurrence {
            category: "pradosham".to_string(),
            entry: entry("2025-01-11", "Shani Pradosham", Some("Thai")),
        };
        assert_eq!(banner_label(&occ), "Shani Pradosham - தை");
    }

    #[test]
    fn test_banner_label_falls_back_to_raw_month() {
        let occ = FestivalOccurrence {
            category: "major".to_string(),
            entry: entry("2025-06-01", "Some Festival", Some("Unknown Month")),
        };
        assert_eq!(banner_label(&occ), "Some Festival - Unknown Month");
    }

    #[rstest]
    #[case("Soma Pradosham", Some(DeityCategory::Shiva))]
    #[case("Vaikunta Ekadashi", Some(DeityCategory::Vishnu))]
    #[case("Skanda Sashti", Some(DeityCategory::Murugan))]
    #[case("Thai Pournami", Some(DeityCategory::Devi))]
    #[case("Pongal", None)]
    fn test_deity_inference(#[case] name: &str, #[case] expected: Option<DeityCategory>) {
        assert_eq!(infer_deity(name), expected);
    }

    #[test]
    fn test_deity_inference_first_rule_wins() {
        // "pradosham" (Shiva) appears before the Devi keywords in rule order
        assert_eq!(
            infer_deity("Pournami Pradosham"),
            Some(DeityCategory::Shiva)
        );
    }
}
