use std::io::Read;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::{ApiKeyCredentials, ConfigError, RequestError};

const API_USER_HEADER: &str = "X-API-USER";
const API_KEY_HEADER: &str = "X-API-KEY";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Blocking JSON request executor.
///
/// Performs exactly one attempt per call. Timeouts and connection reuse are
/// whatever the underlying `reqwest` client provides by default.
#[derive(Debug)]
pub struct RequestExecutor {
    credentials: Option<ApiKeyCredentials>,
    http: reqwest::blocking::Client,
}

impl RequestExecutor {
    /// Creates an executor that attaches `credentials` to every request.
    ///
    /// Fails with [`ConfigError::HttpClient`] when the transport cannot be
    /// initialized.
    pub fn new(credentials: Option<ApiKeyCredentials>) -> Result<Self, ConfigError> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok(Self { credentials, http })
    }

    /// Sends a `GET` request and decodes the response.
    pub fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, RequestError> {
        self.execute::<(), T>(Method::GET, url, None)
    }

    /// Sends a `DELETE` request and decodes the response.
    pub fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<T, RequestError> {
        self.execute::<(), T>(Method::DELETE, url, None)
    }

    /// Sends a request with an optional JSON body and decodes the response.
    ///
    /// Use [`Self::execute_with_query`] when query parameters are needed.
    pub fn execute<B, T>(&self, method: Method, url: &str, body: Option<&B>) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute_with_query(method, url, &[], body)
    }

    /// Sends a request with query parameters and an optional JSON body.
    ///
    /// An empty success body is decoded as JSON `null`, so it satisfies `()`
    /// or `Option<_>` targets and fails for anything else.
    pub fn execute_with_query<B, T>(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let target = Url::parse(url).map_err(|_| RequestError::InvalidUrl(url.to_owned()))?;

        debug!(%method, url = %target, "sending request");
        let mut request = self
            .http
            .request(method, target)
            .header(ACCEPT, JSON_CONTENT_TYPE);

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(credentials) = &self.credentials {
            request = request
                .header(API_USER_HEADER, credentials.username())
                .header(API_KEY_HEADER, credentials.api_key());
        }

        if let Some(body) = body {
            let encoded = serde_json::to_vec(body).map_err(RequestError::EncodeFailure)?;
            request = request.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(encoded);
        }

        let mut response = request.send()?;
        let status = response.status();

        if !status.is_success() {
            // Whatever arrived before a read failure is kept.
            let mut raw = Vec::new();
            if let Err(error) = response.read_to_end(&mut raw) {
                debug!(%error, "error response body was cut short");
            }
            let body = String::from_utf8_lossy(&raw).into_owned();
            debug!(status = status.as_u16(), bytes = body.len(), "received error response");
            return Err(RequestError::Status { status, body });
        }

        let payload = response.text()?;
        debug!(status = status.as_u16(), bytes = payload.len(), "received response");
        decode(payload)
    }
}

fn decode<T: DeserializeOwned>(payload: String) -> Result<T, RequestError> {
    let text = if payload.trim().is_empty() {
        "null"
    } else {
        payload.as_str()
    };

    let decoded = serde_json::from_str(text);
    match decoded {
        Ok(value) => Ok(value),
        Err(source) => {
            trace!(%source, "response body did not match expected shape");
            Err(RequestError::DecodeFailure {
                source,
                body: payload,
            })
        }
    }
}
