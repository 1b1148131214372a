use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::parser::Assistant;

use super::types::{DaySchedule, Role};

/// Arrow-key reposition direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// One discrete edit from the editor UI. Every variant resolves to the same
/// contract: delete the entry from its current slot and append it to the end
/// of the target slot, or do nothing at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveCommand {
    /// Drag between two calendar slots. Not deduplicated: dropping an
    /// assistant onto a slot that already holds them creates the displayed
    /// conflict state.
    Move {
        source_date: NaiveDate,
        source_role: Role,
        source_index: usize,
        target_date: NaiveDate,
        target_role: Role,
    },
    /// Drag from the name pool onto a calendar slot. Deduplicated within the
    /// exact target list, unlike calendar-to-calendar moves.
    AddFromPool {
        assistant_name: String,
        target_date: NaiveDate,
        target_role: Role,
    },
    /// Drop onto the discard target.
    Remove {
        date: NaiveDate,
        role: Role,
        index: usize,
    },
    /// Arrow-key move: left/right shift the date one day, clamped to the
    /// schedule's first and last date; up/down switch the role.
    Reposition {
        assistant_name: String,
        current_date: NaiveDate,
        current_role: Role,
        direction: Direction,
    },
}

/// Applies one command to a schedule snapshot and returns the next snapshot.
/// The input is never mutated, and invalid references (unknown date, stale
/// index, name not on the roster) degrade to a no-op rather than an error.
pub fn apply_command(
    schedule: &[DaySchedule],
    roster: &[Assistant],
    command: &MoveCommand,
) -> Vec<DaySchedule> {
    let mut next: Vec<DaySchedule> = schedule.to_vec();

    match command {
        MoveCommand::Move {
            source_date,
            source_role,
            source_index,
            target_date,
            target_role,
        } => {
            let source_day = match day_index(&next, *source_date) {
                Some(i) => i,
                None => return next,
            };
            let target_day = match day_index(&next, *target_date) {
                Some(i) => i,
                None => return next,
            };
            if *source_index >= next[source_day].role(*source_role).len() {
                return next;
            }

            let moved = next[source_day].role_mut(*source_role).remove(*source_index);
            next[target_day].role_mut(*target_role).push(moved);
        }

        MoveCommand::AddFromPool {
            assistant_name,
            target_date,
            target_role,
        } => {
            // The name must resolve against the roster, not the schedule.
            if !roster.iter().any(|a| a.name == *assistant_name) {
                return next;
            }
            let target_day = match day_index(&next, *target_date) {
                Some(i) => i,
                None => return next,
            };

            let slot = next[target_day].role_mut(*target_role);
            if slot.iter().any(|name| name == assistant_name) {
                return next;
            }
            slot.push(assistant_name.clone());
        }

        MoveCommand::Remove { date, role, index } => {
            let day = match day_index(&next, *date) {
                Some(i) => i,
                None => return next,
            };
            if *index >= next[day].role(*role).len() {
                return next;
            }
            next[day].role_mut(*role).remove(*index);
        }

        MoveCommand::Reposition {
            assistant_name,
            current_date,
            current_role,
            direction,
        } => {
            let day = match day_index(&next, *current_date) {
                Some(i) => i,
                None => return next,
            };
            let entry = match next[day]
                .role(*current_role)
                .iter()
                .position(|name| name == assistant_name)
            {
                Some(i) => i,
                None => return next,
            };

            let (target_day, target_role) = match direction {
                Direction::Left => (day.saturating_sub(1), *current_role),
                Direction::Right => ((day + 1).min(next.len() - 1), *current_role),
                Direction::Up => (day, Role::Primary),
                Direction::Down => (day, Role::Backup),
            };

            let moved = next[day].role_mut(*current_role).remove(entry);
            next[target_day].role_mut(target_role).push(moved);
        }
    }

    next
}

fn day_index(schedule: &[DaySchedule], date: NaiveDate) -> Option<usize> {
    schedule.iter().position(|day| day.date == date)
}
