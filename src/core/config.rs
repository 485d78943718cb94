use std::env;

use chrono_tz::Tz;

const DEFAULT_DEGRA_URL: &str = "https://degra.wi.pb.edu.pl/rozklady/rozklad.php";
const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Warsaw;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub degra_url: String,
    pub email_domain: String,
    pub calendar_name: String,
    pub timezone: Tz,
}

impl AppConfig {
    /// File name offered to clients downloading the calendar
    pub fn calendar_file_name(&self) -> String {
        format!("{}.ics", self.calendar_name.to_lowercase())
    }
}

fn parse_timezone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or_else(|err| {
        tracing::warn!(
            "Invalid timezone {:?} ({}), falling back to {}",
            name,
            err,
            DEFAULT_TIMEZONE
        );
        DEFAULT_TIMEZONE
    })
}

impl Default for AppConfig {
    fn default() -> Self {
        let degra_url = env::var("DEGRA_URL").unwrap_or_else(|_| DEFAULT_DEGRA_URL.to_string());
        let email_domain =
            env::var("DEGRA_EMAIL_DOMAIN").unwrap_or_else(|_| "pb.edu.pl".to_string());
        let calendar_name =
            env::var("DEGRA_CALENDAR_NAME").unwrap_or_else(|_| "Degra".to_string());
        let timezone = env::var("DEGRA_TIMEZONE")
            .map(|name| parse_timezone(&name))
            .unwrap_or(DEFAULT_TIMEZONE);

        Self {
            degra_url,
            email_domain,
            calendar_name,
            timezone,
        }
    }
}
