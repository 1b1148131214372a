use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The two duty slots per date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Primary,
    Backup,
}

/// Schedule for a single day. Role lists hold assistant names (the stable
/// identity key) and are not sets: more than one entry is a conflict, shown
/// to the editor but never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub primary: Vec<String>,
    pub backup: Vec<String>,
}

impl DaySchedule {
    pub fn new(date: NaiveDate) -> Self {
        DaySchedule {
            date,
            primary: Vec::new(),
            backup: Vec::new(),
        }
    }

    pub fn role(&self, role: Role) -> &Vec<String> {
        match role {
            Role::Primary => &self.primary,
            Role::Backup => &self.backup,
        }
    }

    pub fn role_mut(&mut self, role: Role) -> &mut Vec<String> {
        match role {
            Role::Primary => &mut self.primary,
            Role::Backup => &mut self.backup,
        }
    }
}

/// Flags an assistant with fewer than 3 available days in an ISO week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWarning {
    pub assistant: String,
    pub week_number: u32,
    pub available_days: u32,
}
