use std::collections::HashMap;

use super::types::Role;

/// A desired assignment range, e.g. the "3-4" half of "(3-4/1-2)"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadRange {
    pub min: u32,
    pub max: u32,
}

/// Desired workload declared inside an assistant's display name:
/// "(shifts_min-shifts_max/backups_min-backups_max)"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesiredWorkload {
    pub shifts: WorkloadRange,
    pub backups: WorkloadRange,
}

/// Extracts the desired-workload fragment from a display name, e.g.
/// "Jane (3-4/1-2)" -> shifts 3-4, backups 1-2. Absent or malformed
/// fragments mean "no preference"; this never fails.
pub fn extract_desired_workload(name: &str) -> Option<DesiredWorkload> {
    for (open, _) in name.match_indices('(') {
        let rest = &name[open + 1..];
        let close = match rest.find(')') {
            Some(c) => c,
            None => break,
        };
        if let Some(workload) = parse_fragment(&rest[..close]) {
            return Some(workload);
        }
    }
    None
}

fn parse_fragment(fragment: &str) -> Option<DesiredWorkload> {
    let (shifts, backups) = fragment.split_once('/')?;
    Some(DesiredWorkload {
        shifts: parse_range(shifts)?,
        backups: parse_range(backups)?,
    })
}

fn parse_range(text: &str) -> Option<WorkloadRange> {
    let (min, max) = text.split_once('-')?;
    Some(WorkloadRange {
        min: min.parse().ok()?,
        max: max.parse().ok()?,
    })
}

/// Running per-assistant assignment counters for one scheduling pass.
/// Counters only ever go up; manual edits later operate on the schedule
/// itself and never touch these.
#[derive(Debug, Default)]
pub struct WorkloadTracker {
    shifts: HashMap<String, u32>,
    backups: HashMap<String, u32>,
}

impl WorkloadTracker {
    pub fn new() -> Self {
        WorkloadTracker::default()
    }

    pub fn count(&self, name: &str, role: Role) -> u32 {
        let counters = match role {
            Role::Primary => &self.shifts,
            Role::Backup => &self.backups,
        };
        counters.get(name).copied().unwrap_or(0)
    }

    pub fn record(&mut self, name: &str, role: Role) {
        let counters = match role {
            Role::Primary => &mut self.shifts,
            Role::Backup => &mut self.backups,
        };
        *counters.entry(name.to_string()).or_insert(0) += 1;
    }
}
