use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::parser::{Assistant, AvailabilityStatus};

use super::types::{DaySchedule, Role};
use super::workload::{extract_desired_workload, WorkloadTracker};

/// The planning date axis, taken from the first roster row. All rows share
/// the same axis by construction of the roster CSV.
pub fn date_axis(assistants: &[Assistant]) -> Vec<NaiveDate> {
    assistants
        .first()
        .map(|a| a.availability.iter().map(|entry| entry.date).collect())
        .unwrap_or_default()
}

/// Generates the initial schedule suggestion: one primary and one backup
/// candidate per day, chosen greedily in a single pass.
///
/// Days are processed in the given (ascending) date order; within a day the
/// primary slot is filled before the backup slot, and the chosen primary is
/// excluded from the backup candidates so nobody holds both duties on the
/// same date. Candidates are ranked by how many assignments of that role
/// they already carry, so the running counts act as a round-robin. Ties go
/// to the lower declared minimum of desired shifts, but only when both
/// candidates declare one; otherwise roster order stands (the sort is
/// stable). There is no backtracking: a day with no available candidate is
/// simply left open.
pub fn generate_suggestions(assistants: &[Assistant], dates: &[NaiveDate]) -> Vec<DaySchedule> {
    let mut tracker = WorkloadTracker::new();
    let mut schedule = Vec::with_capacity(dates.len());

    for &date in dates {
        let mut day = DaySchedule::new(date);

        let primary = pick_candidate(assistants, date, Role::Primary, &tracker, None);
        if let Some(ref name) = primary {
            tracker.record(name, Role::Primary);
            day.primary.push(name.clone());
        }

        let backup = pick_candidate(assistants, date, Role::Backup, &tracker, primary.as_deref());
        if let Some(ref name) = backup {
            tracker.record(name, Role::Backup);
            day.backup.push(name.clone());
        }

        schedule.push(day);
    }

    schedule
}

/// Picks the best candidate for one role on one date, or None if nobody is
/// available.
fn pick_candidate(
    assistants: &[Assistant],
    date: NaiveDate,
    role: Role,
    tracker: &WorkloadTracker,
    exclude: Option<&str>,
) -> Option<String> {
    let mut candidates: Vec<&Assistant> = assistants
        .iter()
        .filter(|a| a.status_on(date) == AvailabilityStatus::Available)
        .filter(|a| exclude != Some(a.name.as_str()))
        .collect();

    candidates.sort_by(|a, b| {
        let by_load = tracker
            .count(&a.name, role)
            .cmp(&tracker.count(&b.name, role));
        if by_load != Ordering::Equal {
            return by_load;
        }
        // The declared minimum of desired shifts breaks ties, but only
        // between two assistants that both declare one.
        match (
            extract_desired_workload(&a.name),
            extract_desired_workload(&b.name),
        ) {
            (Some(a_desired), Some(b_desired)) => {
                a_desired.shifts.min.cmp(&b_desired.shifts.min)
            }
            _ => Ordering::Equal,
        }
    });

    candidates.first().map(|a| a.name.clone())
}
