mod display;
mod parser;
mod schedule;
mod web;

use rand::{distributions::Alphanumeric, Rng};

use display::{print_schedule, print_warnings, write_schedule_to_file};
use parser::load_roster;
use schedule::{check_availability_warnings, date_axis, generate_suggestions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Check if we should run in web mode
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "web" {
        let port = args
            .get(2)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
            // No configured password: generate a one-shot one
            rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(12)
                .map(char::from)
                .collect()
        });

        println!("Starting web server on port {}...", port);
        println!("Admin password: {}", password);
        println!("Access the planner at http://localhost:{}", port);

        web::start_server(port, password).await?;
        return Ok(());
    }

    // CLI mode
    let csv_path = args.get(1).map(String::as_str).unwrap_or("data/roster.csv");

    println!("Loading roster from {}...", csv_path);
    let roster = load_roster(csv_path)?;
    let dates = date_axis(&roster);
    println!(
        "Loaded {} assistants across {} planning days",
        roster.len(),
        dates.len()
    );

    let warnings = check_availability_warnings(&roster);
    print_warnings(&warnings);

    let schedule = generate_suggestions(&roster, &dates);
    print_schedule(&schedule);

    write_schedule_to_file(&schedule, "schedule.txt")?;
    println!("\nSchedule saved to schedule.txt");

    Ok(())
}
