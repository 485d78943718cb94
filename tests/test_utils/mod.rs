//! Test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};
use chrono::{DateTime, TimeZone, Utc};

use degra_cal::api::AppState;
use degra_cal::api::app;
use degra_cal::core::AppConfig;
use degra_cal::schedule::FixedClock;

pub const TIMETABLE_PATH: &str = "/rozklady/rozklad.php";

/// Wednesday 2025-01-08, 11:00 in Warsaw. The current week starts on
/// Monday 2025-01-06, which is ISO week 2.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 8, 10, 0, 0).unwrap()
}

pub fn test_config(upstream_url: &str) -> AppConfig {
    AppConfig {
        degra_url: format!("{}{}", upstream_url, TIMETABLE_PATH),
        email_domain: String::from("pb.edu.pl"),
        calendar_name: String::from("Degra"),
        timezone: chrono_tz::Europe::Warsaw,
    }
}

/// Creates a test application router that fetches timetables from
/// `upstream_url` and sees a fixed "now".
pub fn test_app(upstream_url: &str) -> Router {
    let app_state = AppState::new(test_config(upstream_url), Arc::new(FixedClock(fixed_now())));
    app(Arc::new(RwLock::new(app_state)))
}

pub fn fixture(name: &str) -> String {
    fs::read_to_string(format!("./tests/data/{}", name)).expect("Missing test fixture")
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}
