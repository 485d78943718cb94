//! Client for the faculty timetable site.

use anyhow::Result;
use reqwest::{Client, Url};

/// Fetches the timetable page at `base_url` with `params` set on its
/// query string (see [`timetable_url`]).
pub async fn fetch_timetable(
    client: &Client,
    base_url: &str,
    params: &[(String, String)],
) -> Result<String> {
    let url = timetable_url(base_url, params)?;
    tracing::debug!("Fetching timetable from {}", url);

    let html = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(html)
}

/// Sets each of `params` on the query string of `base_url`. Setting a key
/// that is already present replaces its first occurrence in place and
/// drops the others, so a key given twice keeps its last value. New keys
/// are appended.
pub fn timetable_url(base_url: &str, params: &[(String, String)]) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    if params.is_empty() {
        return Ok(url);
    }

    let mut query: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    for (key, value) in params {
        match query.iter().position(|(k, _)| k == key) {
            Some(first) => {
                query[first].1 = value.clone();
                let mut index = 0;
                query.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => query.push((key.clone(), value.clone())),
        }
    }

    url.query_pairs_mut().clear().extend_pairs(query.iter());
    Ok(url)
}
