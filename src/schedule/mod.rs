pub mod commands;
pub mod suggestions;
pub mod types;
pub mod warnings;
pub mod workload;

pub use commands::{apply_command, Direction, MoveCommand};
pub use suggestions::{date_axis, generate_suggestions};
pub use types::{AvailabilityWarning, DaySchedule, Role};
pub use warnings::check_availability_warnings;
