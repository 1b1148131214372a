use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{cookie::Key, middleware, web, App, HttpRequest, HttpResponse, HttpServer, Result};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::display::assistant_color;
use crate::parser::{read_roster, Assistant};
use crate::schedule::{
    apply_command, check_availability_warnings, date_axis, generate_suggestions,
    AvailabilityWarning, DaySchedule, MoveCommand,
};

// In-memory storage for the roster and the current schedule snapshot
// (in production, use a database)
pub struct AppState {
    pub roster: Mutex<Option<Vec<Assistant>>>,
    pub schedule: Mutex<Option<Vec<DaySchedule>>>,
    pub warnings: Mutex<Option<Vec<AvailabilityWarning>>>,
    pub admin_password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    password: String,
}

#[derive(Serialize)]
pub struct AssistantView {
    name: String,
    color: String,
}

#[derive(Serialize)]
pub struct DayView {
    date: String,
    weekday: String,
    primary: Vec<AssistantView>,
    backup: Vec<AssistantView>,
    primary_conflict: bool,
    backup_conflict: bool,
}

#[derive(Serialize)]
pub struct ScheduleResponse {
    days: Vec<DayView>,
}

fn is_admin(session: &Session) -> bool {
    session.get::<bool>("admin").unwrap_or(None).unwrap_or(false)
}

fn entry_views(entries: &[String], roster: &[Assistant]) -> Vec<AssistantView> {
    entries
        .iter()
        .map(|name| AssistantView {
            name: name.clone(),
            color: roster
                .iter()
                .position(|a| a.name == *name)
                .map(assistant_color)
                .unwrap_or("#888888")
                .to_string(),
        })
        .collect()
}

// Admin login endpoint
async fn admin_login(
    req: web::Json<LoginRequest>,
    session: Session,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if req.password == state.admin_password {
        session
            .insert("admin", true)
            .map_err(actix_web::error::ErrorInternalServerError)?;
        Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
    } else {
        Ok(HttpResponse::Unauthorized()
            .json(serde_json::json!({"success": false, "error": "Invalid password"})))
    }
}

// Admin roster upload endpoint: parses the CSV, runs the scheduler and the
// weekly analyzer, and replaces all state
async fn admin_upload(
    req: HttpRequest,
    session: Session,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    // Accept either a logged-in session or the password header
    let header_password = req
        .headers()
        .get("X-Admin-Password")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !is_admin(&session) && header_password != state.admin_password {
        return Ok(HttpResponse::Unauthorized()
            .json(serde_json::json!({"success": false, "error": "Unauthorized"})));
    }

    match read_roster(&body[..]) {
        Ok(roster) => {
            let dates = date_axis(&roster);
            let schedule = generate_suggestions(&roster, &dates);
            let warnings = check_availability_warnings(&roster);

            let assistant_count = roster.len();
            *state.roster.lock().unwrap() = Some(roster);
            *state.schedule.lock().unwrap() = Some(schedule);
            *state.warnings.lock().unwrap() = Some(warnings);

            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "assistants": assistant_count,
                "days": dates.len(),
            })))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": format!("Failed to process CSV: {}", e)
        }))),
    }
}

// Calendar endpoint
async fn get_schedule(state: web::Data<AppState>) -> Result<HttpResponse> {
    let roster = state.roster.lock().unwrap();
    let schedule = state.schedule.lock().unwrap();

    match (&*roster, &*schedule) {
        (Some(roster), Some(schedule)) => {
            let days = schedule
                .iter()
                .map(|day| DayView {
                    date: day.date.to_string(),
                    weekday: day.date.format("%A").to_string(),
                    primary: entry_views(&day.primary, roster),
                    backup: entry_views(&day.backup, roster),
                    primary_conflict: day.primary.len() > 1,
                    backup_conflict: day.backup.len() > 1,
                })
                .collect();
            Ok(HttpResponse::Ok().json(ScheduleResponse { days }))
        }
        _ => Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "No roster uploaded"}))),
    }
}

// Warnings endpoint
async fn get_warnings(state: web::Data<AppState>) -> Result<HttpResponse> {
    let warnings = state.warnings.lock().unwrap();

    if let Some(ref warnings) = *warnings {
        Ok(HttpResponse::Ok().json(warnings))
    } else {
        Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "No roster uploaded"})))
    }
}

// Name pool endpoint
async fn get_assistants(state: web::Data<AppState>) -> Result<HttpResponse> {
    let roster = state.roster.lock().unwrap();

    if let Some(ref roster) = *roster {
        let pool: Vec<AssistantView> = roster
            .iter()
            .enumerate()
            .map(|(i, a)| AssistantView {
                name: a.name.clone(),
                color: assistant_color(i).to_string(),
            })
            .collect();
        Ok(HttpResponse::Ok().json(pool))
    } else {
        Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "No roster uploaded"})))
    }
}

// Editor command endpoint: applies one move/add/remove/reposition command
// and swaps in the new snapshot. Invalid commands are harmless no-ops.
async fn post_command(
    command: web::Json<MoveCommand>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let roster = state.roster.lock().unwrap();
    let mut schedule = state.schedule.lock().unwrap();

    match (&*roster, &mut *schedule) {
        (Some(roster), Some(schedule)) => {
            *schedule = apply_command(schedule, roster, &command);
            Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
        }
        _ => Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "No roster uploaded"}))),
    }
}

// HTML page handlers
async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

async fn admin_page() -> Result<HttpResponse> {
    let html = include_str!("../templates/admin.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

pub async fn start_server(port: u16, admin_password: String) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState {
        roster: Mutex::new(None),
        schedule: Mutex::new(None),
        warnings: Mutex::new(None),
        admin_password,
    });
    let session_key = Key::generate();

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .service(Files::new("/static", "static").show_files_listing())
            .route("/", web::get().to(index))
            .route("/admin", web::get().to(admin_page))
            .route("/api/login", web::post().to(admin_login))
            .route("/api/upload", web::post().to(admin_upload))
            .route("/api/schedule", web::get().to(get_schedule))
            .route("/api/warnings", web::get().to(get_warnings))
            .route("/api/assistants", web::get().to(get_assistants))
            .route("/api/command", web::post().to(post_command))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
