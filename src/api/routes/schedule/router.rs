//! Router for the schedule API
//!
//! Query parameters are passed through untouched to the timetable site so
//! whatever selects a group or a teacher there works here too.

use std::sync::{Arc, RwLock};

use anyhow::Result;
use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Json, Response},
};
use axum_extra::extract::Query;
use http::header;

use super::public;
use crate::api::state::AppState;
use crate::core::AppConfig;
use crate::degra::fetch_timetable;
use crate::ical::render_calendar;
use crate::schedule::{EventOccurrence, ScheduleContext, build_schedule};

type SharedState = Arc<RwLock<AppState>>;

/// Fetches the timetable and runs it through the schedule builder. Also
/// returns the config and context used so callers can render with the
/// same "now".
async fn load_schedule(
    state: &SharedState,
    params: &[(String, String)],
) -> Result<(AppConfig, ScheduleContext, Vec<EventOccurrence>)> {
    let (config, client, clock) = {
        let shared_state = state.read().expect("Unable to read share state");
        (
            shared_state.config.clone(),
            shared_state.http.clone(),
            Arc::clone(&shared_state.clock),
        )
    };

    let html = fetch_timetable(&client, &config.degra_url, params).await?;
    let ctx = ScheduleContext::new(clock.as_ref(), config.timezone, &config.email_domain);
    let events = build_schedule(&html, &ctx)?;

    Ok((config, ctx, events))
}

async fn calendar_handler(
    State(state): State<SharedState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, crate::api::public::ApiError> {
    let (config, ctx, events) = load_schedule(&state, &params).await?;
    let body = render_calendar(&config.calendar_name, ctx.now, &events);

    let headers = [
        (
            header::CONTENT_TYPE,
            String::from("text/calendar; charset=utf-8"),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", config.calendar_file_name()),
        ),
    ];
    Ok((headers, body).into_response())
}

async fn events_handler(
    State(state): State<SharedState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<public::ScheduleEventResponse>>, crate::api::public::ApiError> {
    let (_, _, events) = load_schedule(&state, &params).await?;

    let resp = events
        .into_iter()
        .map(public::ScheduleEventResponse::from)
        .collect();

    Ok(Json(resp))
}

/// Create the schedule router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", axum::routing::get(calendar_handler))
        .route("/events", axum::routing::get(events_handler))
}
