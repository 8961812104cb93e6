//! Response parsing for state-changing requests.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Error, MissingKey};
use crate::transport::HttpResponse;

type Result<T> = std::result::Result<T, Error>;

const UNPROCESSABLE_ENTITY: u16 = 422;

/// Outcome of a request for one light.
#[serde_with::skip_serializing_none]
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct LightResult {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    /// `"ok"`, `"timed_out"` or `"offline"`.
    #[serde(default)]
    pub status: Option<String>,
}

impl LightResult {
    /// Pick the known string fields out of one `results` entry. Fields of
    /// any other shape are left unset.
    fn from_value(entry: &Value) -> Self {
        let field = |key: &str| entry.get(key).and_then(Value::as_str).map(String::from);
        LightResult {
            id: field("id"),
            label: field("label"),
            status: field("status"),
        }
    }
}

/// Decoded body of a POST or PUT response.
///
/// Holds every per-light result. The [`Client`](crate::Client) operations
/// report only the first one through [`StatusResponse::first_status`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatusResponse {
    results: Vec<LightResult>,
    error: Option<String>,
}

impl StatusResponse {
    /// Build from a decoded JSON body.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use lifx_cloud_rs::StatusResponse;
    ///
    /// let body = json!({"results": [
    ///     {"id": "d3b2f2d97452", "label": "Lamp", "status": "ok"},
    ///     {"id": "d073d5000000", "label": "Desk", "status": "offline"},
    /// ]});
    /// let resp = StatusResponse::from_body(body).unwrap();
    /// assert_eq!(resp.results().len(), 2);
    /// assert_eq!(resp.first_status().unwrap(), "ok");
    /// ```
    pub fn from_body(body: Value) -> Result<Self> {
        let error = error_message(&body);
        let results = match body.get("results").and_then(Value::as_array) {
            Some(results) => results,
            None => return Err(missing("results", error)),
        };
        let results = results.iter().map(LightResult::from_value).collect();
        Ok(StatusResponse { results, error })
    }

    pub fn results(&self) -> &[LightResult] {
        &self.results
    }

    /// Iterate over the status of every light that reported one.
    pub fn statuses(&self) -> impl Iterator<Item = &str> {
        self.results.iter().filter_map(|r| r.status.as_deref())
    }

    /// The status of the first light only. Later results are ignored.
    pub fn first_status(&self) -> Result<&str> {
        self.results
            .first()
            .and_then(|r| r.status.as_deref())
            .ok_or_else(|| missing("results[0].status", self.error.clone()))
    }

    pub fn into_first_status(self) -> Result<String> {
        self.first_status().map(str::to_string)
    }
}

/// Turn a POST/PUT response into a [`StatusResponse`].
///
/// A 422 is reported as [`Error::Rejected`] without looking at `results`.
pub(crate) fn parse_resp<R: HttpResponse>(response: &mut R) -> Result<StatusResponse> {
    if response.status_code() == UNPROCESSABLE_ENTITY {
        let message = response
            .json()
            .ok()
            .as_ref()
            .and_then(error_message)
            .unwrap_or_else(|| "unknown error".to_string());
        warn!("LIFX API rejected request: {}", message);
        return Err(Error::Rejected(message));
    }

    let body = response.json()?;
    debug!("LIFX response: {:?}", body);
    StatusResponse::from_body(body)
}

fn error_message(body: &Value) -> Option<String> {
    body.get("error").and_then(Value::as_str).map(String::from)
}

fn missing(key: &str, error: Option<String>) -> Error {
    let source = MissingKey::new(key);
    match error {
        Some(message) => Error::UnexpectedResponse { message, source },
        None => Error::MissingKey(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Transport;
    use crate::transport::stub::StubTransport;
    use serde_json::json;
    use std::error::Error as _;

    fn parse(status: u16, body: Value) -> Result<StatusResponse> {
        let stub = StubTransport::replying(status, body);
        let mut response = stub.post("u", &json!({}), &[]).unwrap();
        parse_resp(&mut response)
    }

    #[test]
    fn test_first_result_only() {
        let resp = parse(
            207,
            json!({"results": [{"status": "ok"}, {"status": "offline"}]}),
        )
        .unwrap();
        assert_eq!(resp.first_status().unwrap(), "ok");
        assert_eq!(resp.statuses().collect::<Vec<_>>(), vec!["ok", "offline"]);
    }

    #[test]
    fn test_two_ok_results_yield_ok() {
        let resp = parse(200, json!({"results": [{"status": "ok"}, {"status": "ok"}]})).unwrap();
        assert_eq!(resp.into_first_status().unwrap(), "ok");
    }

    #[test]
    fn test_rejected_carries_error_text() {
        let err = parse(
            422,
            json!({"error": "color is not a valid color", "results": [{"status": "ok"}]}),
        )
        .unwrap_err();
        assert_eq!(err, Error::Rejected("color is not a valid color".into()));
        assert!(err.to_string().contains("color is not a valid color"));
    }

    #[test]
    fn test_rejected_without_error_field() {
        let err = parse(422, json!({})).unwrap_err();
        assert_eq!(err, Error::Rejected("unknown error".into()));
    }

    #[test]
    fn test_rejected_with_undecodable_body() {
        let stub = StubTransport::replying_garbage(422);
        let mut response = stub.post("u", &json!({}), &[]).unwrap();
        let err = parse_resp(&mut response).unwrap_err();
        assert_eq!(err, Error::Rejected("unknown error".into()));
    }

    #[test]
    fn test_missing_results_with_error_chains_lookup() {
        let err = parse(401, json!({"error": "Invalid bearer token"})).unwrap_err();
        assert!(err.to_string().contains("Invalid bearer token"));
        let source = err.source().expect("lookup failure chained");
        assert_eq!(source.to_string(), "response is missing key `results`");
    }

    #[test]
    fn test_missing_results_without_error() {
        let err = parse(200, json!({"unexpected": true})).unwrap_err();
        assert_eq!(err, Error::MissingKey(MissingKey::new("results")));
    }

    #[test]
    fn test_odd_fields_do_not_hide_status() {
        let resp = parse(
            207,
            json!({"results": [{"id": 5, "label": ["Lamp"], "status": "ok", "power": "on"}]}),
        )
        .unwrap();
        assert_eq!(resp.first_status().unwrap(), "ok");
        assert_eq!(resp.results()[0].id, None);
        assert_eq!(resp.results()[0].label, None);
    }

    #[test]
    fn test_empty_results_has_no_first_status() {
        let resp = parse(207, json!({"results": []})).unwrap();
        assert_eq!(
            resp.first_status().unwrap_err(),
            Error::MissingKey(MissingKey::new("results[0].status"))
        );
    }

    #[test]
    fn test_malformed_json_propagates() {
        let stub = StubTransport::replying_garbage(200);
        let mut response = stub.post("u", &json!({}), &[]).unwrap();
        assert!(matches!(parse_resp(&mut response), Err(Error::JsonLoad(_))));
    }
}
