use std::fmt;

use failure::Error;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::client::config::HttpConfig;

/// Whatever the remote service answered, undecoded.
#[derive(Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

impl fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .field("body", &self.text())
            .finish()
    }
}

/// The status envelope every endpoint embeds in its body. Decoding it is left
/// to the caller.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ApiStatus {
    #[serde(rename = "ActionStatus")]
    pub action_status: String,
    #[serde(rename = "ErrorCode", default)]
    pub error_code: i64,
    #[serde(rename = "ErrorInfo", default)]
    pub error_info: String,
}

impl ApiStatus {
    pub fn is_ok(&self) -> bool {
        self.action_status == "OK" && self.error_code == 0
    }
}

/// A single HTTP POST carrying a query string and a JSON body.
pub trait Transport: Send + Sync {
    fn post(&self, url: &str, query: &[(&str, String)], body: Vec<u8>) -> Result<RawResponse, Error>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &HttpConfig) -> Result<Self, Error> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &str, query: &[(&str, String)], body: Vec<u8>) -> Result<RawResponse, Error> {
        let resp = self
            .client
            .post(url)
            .query(query)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;
        let status = resp.status().as_u16();
        let body = resp.bytes()?.to_vec();
        Ok(RawResponse::new(status, body))
    }
}
