use std::collections::BTreeMap;

use chrono::Datelike;

use crate::parser::{Assistant, AvailabilityStatus};

use super::types::AvailabilityWarning;

/// An assistant needs at least this many available days per ISO week to go
/// unflagged.
const MIN_AVAILABLE_DAYS_PER_WEEK: u32 = 3;

/// Flags every ISO week in which an assistant is available on fewer than
/// three days. Computed from the roster alone, independent of any schedule.
pub fn check_availability_warnings(assistants: &[Assistant]) -> Vec<AvailabilityWarning> {
    assistants.iter().flat_map(weekly_availability).collect()
}

fn weekly_availability(assistant: &Assistant) -> Vec<AvailabilityWarning> {
    let mut available_per_week: BTreeMap<u32, u32> = BTreeMap::new();

    for entry in &assistant.availability {
        if entry.status == AvailabilityStatus::Available {
            *available_per_week
                .entry(entry.date.iso_week().week())
                .or_insert(0) += 1;
        }
    }

    available_per_week
        .into_iter()
        .filter(|&(_, days)| days < MIN_AVAILABLE_DAYS_PER_WEEK)
        .map(|(week_number, available_days)| AvailabilityWarning {
            assistant: assistant.name.clone(),
            week_number,
            available_days,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Availability;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assistant(name: &str, entries: &[(NaiveDate, AvailabilityStatus)]) -> Assistant {
        Assistant {
            name: name.to_string(),
            availability: entries
                .iter()
                .map(|&(date, status)| Availability { date, status })
                .collect(),
        }
    }

    #[test]
    fn two_available_days_produce_one_warning() {
        // Monday and Tuesday of ISO week 5 of 2024
        let roster = vec![assistant(
            "Anna",
            &[
                (day(2024, 1, 29), AvailabilityStatus::Available),
                (day(2024, 1, 30), AvailabilityStatus::Available),
                (day(2024, 1, 31), AvailabilityStatus::Unavailable),
            ],
        )];

        let warnings = check_availability_warnings(&roster);
        assert_eq!(
            warnings,
            vec![AvailabilityWarning {
                assistant: "Anna".to_string(),
                week_number: 5,
                available_days: 2,
            }]
        );
    }

    #[test]
    fn three_available_days_produce_no_warning() {
        let roster = vec![assistant(
            "Anna",
            &[
                (day(2024, 1, 29), AvailabilityStatus::Available),
                (day(2024, 1, 30), AvailabilityStatus::Available),
                (day(2024, 1, 31), AvailabilityStatus::Available),
            ],
        )];

        assert!(check_availability_warnings(&roster).is_empty());
    }

    #[test]
    fn reserve_days_do_not_count_as_available() {
        let roster = vec![assistant(
            "Anna",
            &[
                (day(2024, 1, 29), AvailabilityStatus::Available),
                (day(2024, 1, 30), AvailabilityStatus::Reserve),
                (day(2024, 1, 31), AvailabilityStatus::Reserve),
            ],
        )];

        let warnings = check_availability_warnings(&roster);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].available_days, 1);
    }

    #[test]
    fn weeks_are_flagged_independently() {
        // One available day in ISO week 1, three in ISO week 2.
        let roster = vec![assistant(
            "Anna",
            &[
                (day(2024, 1, 3), AvailabilityStatus::Available),
                (day(2024, 1, 8), AvailabilityStatus::Available),
                (day(2024, 1, 9), AvailabilityStatus::Available),
                (day(2024, 1, 10), AvailabilityStatus::Available),
            ],
        )];

        let warnings = check_availability_warnings(&roster);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].week_number, 1);
        assert_eq!(warnings[0].available_days, 1);
    }

    #[test]
    fn every_assistant_is_checked() {
        let entries = [(day(2024, 1, 29), AvailabilityStatus::Available)];
        let roster = vec![assistant("Anna", &entries), assistant("Ben", &entries)];

        let warnings = check_availability_warnings(&roster);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].assistant, "Anna");
        assert_eq!(warnings[1].assistant, "Ben");
    }

    #[test]
    fn week_with_no_available_days_is_not_flagged() {
        // A week that never appears with an Available entry produces no
        // warning at all; the analyzer only sees weeks with at least one.
        let roster = vec![assistant(
            "Anna",
            &[(day(2024, 1, 29), AvailabilityStatus::Unavailable)],
        )];

        assert!(check_availability_warnings(&roster).is_empty());
    }
}
