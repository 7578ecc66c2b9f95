//! The request helpers shared by every endpoint.
//!
//! RPC endpoints receive their parameters as a JSON body, content endpoints receive
//! them as JSON in the `Dropbox-API-Arg` header, the body being the file itself.

use crate::{Error, Result};
use reqwest::header::CONTENT_TYPE;

pub(crate) const API_ARG_HEADER: &str = "Dropbox-API-Arg";
pub(crate) const OCTET_STREAM: &str = "application/octet-stream";

/// Body of the requests only needing a path
#[derive(Debug, serde::Serialize)]
pub(crate) struct PathParams<'a> {
    pub path: &'a str,
}

impl<'a> PathParams<'a> {
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }
}

/// Serializes the value to JSON, escaping any non ASCII character so that it can be
/// used as a header value.
pub(crate) fn header_safe_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let raw = serde_json::to_string(value)?;
    let mut res = String::with_capacity(raw.len());
    let mut buffer = [0u16; 2];
    for c in raw.chars() {
        if c.is_ascii() {
            res.push(c);
        } else {
            for unit in c.encode_utf16(&mut buffer).iter() {
                res.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    Ok(res)
}

pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(
    endpoint: &'static str,
    res: reqwest::Response,
) -> Result<T> {
    let body = res.bytes().await?;
    serde_json::from_slice(&body).map_err(|err| {
        tracing::error!(
            "couldn't decode response from {endpoint}: {}",
            String::from_utf8_lossy(&body)
        );
        Error::from(err)
    })
}

pub(crate) async fn unexpected_status(endpoint: &'static str, res: reqwest::Response) -> Error {
    let status = res.status().as_u16();
    let body = match res.text().await {
        Ok(body) => body,
        Err(err) => {
            tracing::debug!("couldn't read response body: {err}");
            String::new()
        }
    };
    Error::UnexpectedStatus {
        endpoint,
        status,
        body,
    }
}

impl crate::Client {
    fn build_url(base_url: &str, endpoint: &str) -> String {
        format!("{base_url}/{endpoint}")
    }

    #[tracing::instrument(name = "rpc", skip(self, params))]
    pub(crate) async fn rpc_request<P: serde::Serialize>(
        &self,
        endpoint: &'static str,
        params: &P,
    ) -> Result<reqwest::Response> {
        let uri = Self::build_url(&self.api_url, endpoint);
        tracing::debug!("calling {uri}");
        let res = self
            .inner
            .post(uri)
            .bearer_auth(self.credentials.token())
            .json(params)
            .send()
            .await?;
        let status = res.status();
        tracing::debug!("responded with status {status:?}");
        Ok(res)
    }

    #[tracing::instrument(name = "content", skip(self, arg, body))]
    pub(crate) async fn content_request<A: serde::Serialize>(
        &self,
        endpoint: &'static str,
        arg: &A,
        body: reqwest::Body,
    ) -> Result<reqwest::Response> {
        let uri = Self::build_url(&self.content_url, endpoint);
        tracing::debug!("calling {uri}");
        let res = self
            .inner
            .post(uri)
            .bearer_auth(self.credentials.token())
            .header(CONTENT_TYPE, OCTET_STREAM)
            .header(API_ARG_HEADER, header_safe_json(arg)?)
            .body(body)
            .send()
            .await?;
        let status = res.status();
        tracing::debug!("responded with status {status:?}");
        Ok(res)
    }
}
