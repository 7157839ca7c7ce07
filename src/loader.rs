//! Fetches a player's probability grid from the backend.

use crate::config::{API_BASE_URL, AVG_ENDPOINT};
use crate::error::HeatmapError;
use crate::model::{AvgResponse, Grid};
use gloo_net::http::Request;
use log::{info, warn};

/// Absolute URL of the grid endpoint under `base`.
pub fn endpoint_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), AVG_ENDPOINT)
}

/// Decode a `GET /avg` response body.
pub fn parse_avg_response(body: &str) -> Result<Grid, HeatmapError> {
    let response: AvgResponse = serde_json::from_str(body)?;
    Ok(Grid::new(response.prob_grid))
}

fn now_ms() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
}

/// Request the grid for one player.
///
/// Requests are not cancelled or ordered: when the same player is requested
/// twice, whichever response arrives last is the one the caller sees last.
pub async fn load_grid(last: &str, first: &str) -> Result<Grid, HeatmapError> {
    let url = endpoint_url(API_BASE_URL);
    let started = now_ms();
    info!("Loading grid for {} {} from {}", first, last, url);

    let response = Request::get(&url)
        .query([("last", last), ("first", first)])
        .send()
        .await?;
    if !response.ok() {
        warn!("Grid request for {} returned {}", last, response.status());
        return Err(HeatmapError::Status {
            status: response.status(),
            url: response.url(),
        });
    }

    let body = response.text().await?;
    let grid = parse_avg_response(&body)?;

    match (started, now_ms()) {
        (Some(start), Some(end)) => info!(
            "Loaded {} samples for {} in {:.0} ms",
            grid.len(),
            last,
            end - start
        ),
        _ => info!("Loaded {} samples for {}", grid.len(), last),
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        assert_eq!(endpoint_url("http://localhost:8000"), "http://localhost:8000/avg");
        assert_eq!(endpoint_url("http://localhost:8000/"), "http://localhost:8000/avg");
        assert_eq!(endpoint_url(""), "/avg");
    }

    #[test]
    fn parses_response_into_grid() {
        let body = r#"{"probGrid":[
            {"x":-1.0,"z":2.0,"avg":0.200},
            {"x":0.0,"z":2.5,"avg":0.300},
            {"x":1.0,"z":3.0,"avg":0.400}
        ]}"#;
        let grid = parse_avg_response(body).unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.points()[2].value, 0.4);
    }

    #[test]
    fn empty_grid_is_not_an_error() {
        let grid = parse_avg_response(r#"{"probGrid":[]}"#).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn rejects_missing_field() {
        let err = parse_avg_response(r#"{"grid":[]}"#).unwrap_err();
        assert!(matches!(err, HeatmapError::Decode(_)));
        assert!(err.to_string().starts_with("malformed grid response"));
    }
}
