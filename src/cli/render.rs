use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use reqwest::Client;

use crate::core::AppConfig;
use crate::degra::fetch_timetable;
use crate::ical::render_calendar;
use crate::schedule::{Clock, ScheduleContext, SystemClock, build_schedule};

/// Parses a `key=value` command line argument.
pub fn parse_param(arg: &str) -> Result<(String, String)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected key=value, got {:?}", arg))?;
    if key.is_empty() {
        return Err(anyhow!("Empty parameter name in {:?}", arg));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Builds the calendar from a local file when one is given, otherwise
/// from the live timetable.
pub async fn render(
    file: Option<&Path>,
    params: &[(String, String)],
    config: &AppConfig,
    clock: &dyn Clock,
) -> Result<String> {
    let html = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read timetable from {}", path.display()))?,
        None => fetch_timetable(&Client::new(), &config.degra_url, params).await?,
    };

    let ctx = ScheduleContext::new(clock, config.timezone, &config.email_domain);
    let events = build_schedule(&html, &ctx)?;
    Ok(render_calendar(&config.calendar_name, ctx.now, &events))
}

pub async fn run(file: Option<PathBuf>, params: Vec<(String, String)>) -> Result<()> {
    let config = AppConfig::default();
    let ics = render(file.as_deref(), &params, &config, &SystemClock).await?;
    print!("{}", ics);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::FixedClock;
    use chrono::{TimeZone, Utc};
    use std::io::Write;

    fn config() -> AppConfig {
        AppConfig {
            degra_url: String::from("http://localhost:1/rozklad.php"),
            email_domain: String::from("pb.edu.pl"),
            calendar_name: String::from("Degra"),
            timezone: chrono_tz::Europe::Warsaw,
        }
    }

    #[test]
    fn it_parses_key_value_params() {
        assert_eq!(
            parse_param("id=1234").unwrap(),
            (String::from("id"), String::from("1234"))
        );
        assert_eq!(
            parse_param("q=a=b").unwrap(),
            (String::from("q"), String::from("a=b"))
        );
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }

    #[tokio::test]
    async fn it_renders_a_local_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            "<section><ul><li>czwartek<ul><li>godz. 12:00-13:30 Wykład z Fizyka, prowadzący Jan Nowak w sali 7, </li></ul></li></ul></section>"
        )?;

        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 8, 10, 0, 0).unwrap());
        let ics = render(Some(file.path()), &[], &config(), &clock).await?;

        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 5);
        assert!(ics.contains("SUMMARY:Fizyka"));
        assert!(ics.contains("DTSTART:20250109T110000Z"));

        Ok(())
    }

    #[tokio::test]
    async fn it_fails_for_a_missing_file() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 8, 10, 0, 0).unwrap());
        let result = render(
            Some(Path::new("/nonexistent/timetable.html")),
            &[],
            &config(),
            &clock,
        )
        .await;
        assert!(result.is_err());
    }
}
