use std::fs::File;
use std::io::Write;

use crate::schedule::{AvailabilityWarning, DaySchedule};

/// Color palette for the assistant cards, cycled by roster index
pub const COLORS: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEEAD", "#D4A5A5", "#9B59B6", "#3498DB",
    "#E67E22", "#2ECC71",
];

/// Display color for the assistant at a given roster index
pub fn assistant_color(roster_index: usize) -> &'static str {
    COLORS[roster_index % COLORS.len()]
}

fn format_slot(entries: &[String]) -> String {
    if entries.is_empty() {
        "[UNASSIGNED]".to_string()
    } else if entries.len() == 1 {
        entries[0].clone()
    } else {
        // More than one entry is a conflict the editor has to resolve
        format!("CONFLICT: {}", entries.join(", "))
    }
}

/// Prints the suggested schedule in a readable format
pub fn print_schedule(schedule: &[DaySchedule]) {
    println!("\n=== Suggested Schedule ===");
    for day in schedule {
        println!("{} ({})", day.date, day.date.format("%A"));
        println!("  Primary: {}", format_slot(&day.primary));
        println!("  Backup:  {}", format_slot(&day.backup));
    }
}

/// Prints the weekly under-availability warnings
pub fn print_warnings(warnings: &[AvailabilityWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!("\n⚠️  Availability warnings ({}):", warnings.len());
    for warning in warnings {
        println!(
            "  - {} is only available on {} day(s) in week {}",
            warning.assistant, warning.available_days, warning.week_number
        );
    }
}

/// Writes the schedule to a file, one day per line: date, primary, backup
pub fn write_schedule_to_file(
    schedule: &[DaySchedule],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;

    writeln!(file, "** Duty Schedule **")?;
    for day in schedule {
        writeln!(
            file,
            "{} | primary: {} | backup: {}",
            day.date,
            format_slot(&day.primary),
            format_slot(&day.backup)
        )?;
    }

    Ok(())
}
