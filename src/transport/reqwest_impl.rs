//! Blocking `reqwest` transport.

use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use serde_json::Value;

use super::{Headers, HttpResponse, Transport};
use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Transport backed by `reqwest`'s blocking client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: HttpClient,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a transport whose requests fail after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport("build", e))?;
        Ok(ReqwestTransport { client })
    }

    /// Wrap an already configured `reqwest` client.
    pub fn from_client(client: HttpClient) -> Self {
        ReqwestTransport { client }
    }

    fn send(
        &self,
        action: &str,
        mut request: RequestBuilder,
        json: Option<&Value>,
        headers: &Headers,
    ) -> Result<ReqwestResponse> {
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = json {
            request = request.json(body);
        }
        let response = request.send().map_err(|e| Error::transport(action, e))?;
        debug!("{} -> HTTP {}", response.url(), response.status());
        Ok(ReqwestResponse {
            status: response.status().as_u16(),
            inner: Some(response),
        })
    }
}

impl Transport for ReqwestTransport {
    type Response = ReqwestResponse;

    fn get(&self, url: &str, json: Option<&Value>, headers: &Headers) -> Result<ReqwestResponse> {
        self.send("get", self.client.get(url), json, headers)
    }

    fn post(&self, url: &str, json: &Value, headers: &Headers) -> Result<ReqwestResponse> {
        self.send("post", self.client.post(url), Some(json), headers)
    }

    fn put(&self, url: &str, json: &Value, headers: &Headers) -> Result<ReqwestResponse> {
        self.send("put", self.client.put(url), Some(json), headers)
    }
}

/// A response produced by [`ReqwestTransport`].
///
/// The body can be read once; [`HttpResponse::close`] drops the underlying
/// connection handle.
#[derive(Debug)]
pub struct ReqwestResponse {
    status: u16,
    inner: Option<Response>,
}

impl HttpResponse for ReqwestResponse {
    fn status_code(&self) -> u16 {
        self.status
    }

    fn json(&mut self) -> Result<Value> {
        let response = self.inner.take().ok_or_else(|| {
            Error::transport(
                "read",
                std::io::Error::other("response body already consumed"),
            )
        })?;
        let text = response.text().map_err(|e| Error::transport("read", e))?;
        serde_json::from_str(&text).map_err(Error::JsonLoad)
    }

    fn close(&mut self) {
        self.inner = None;
    }
}
