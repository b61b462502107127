//! In-memory stand-ins for the transport, signer and clock used by unit tests.

use std::io::{self, Read};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use failure::{err_msg, Error};
use flate2::read::ZlibDecoder;
use parking_lot::Mutex;
use serde_json::Value;
use tracing_subscriber::fmt::MakeWriter;

use crate::client::config::Config;
use crate::client::credentials::Credentials;
use crate::client::im::ImClient;
use crate::client::transport::{RawResponse, Transport};
use crate::common::error::ImError;
use crate::session::{Clock, Signer};

#[derive(Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::from_secs(0))),
        }
    }

    /// Moves the clock to `offset` past its creation instant.
    pub fn set(&self, offset: Duration) {
        *self.offset.lock() = offset;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock()
    }
}

/// Hands out `token-<identity>-<n>`, a distinct value per invocation.
#[derive(Clone)]
pub struct CountingSigner {
    calls: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl CountingSigner {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl Signer for CountingSigner {
    fn sign(&self, identity: &str, _validity: Duration) -> Result<String, Error> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.failing.load(Ordering::SeqCst) {
            return Err(ImError::signing(identity, "signing backend unavailable").into());
        }
        Ok(format!("token-{}-{}", identity, n))
    }
}

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn query(&self, key: &str) -> Option<String> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

#[derive(Clone)]
enum Behavior {
    Respond(u16, String),
    Fail(String),
}

#[derive(Clone)]
pub struct RecordingTransport {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    behavior: Behavior,
}

impl RecordingTransport {
    pub fn ok(body: &str) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: &str) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            behavior: Behavior::Respond(status, body.to_string()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            behavior: Behavior::Fail(reason.to_string()),
        }
    }

    pub fn count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last(&self) -> RecordedRequest {
        self.requests.lock().last().cloned().unwrap()
    }
}

impl Transport for RecordingTransport {
    fn post(&self, url: &str, query: &[(&str, String)], body: Vec<u8>) -> Result<RawResponse, Error> {
        self.requests.lock().push(RecordedRequest {
            url: url.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            body,
        });
        match self.behavior {
            Behavior::Respond(status, ref body) => Ok(RawResponse::new(status, body.clone().into_bytes())),
            Behavior::Fail(ref reason) => Err(err_msg(reason.clone())),
        }
    }
}

pub fn test_config() -> Config {
    Config::new(Credentials::new(1400000000, "secret", "admin")).with_base_url("http://im.test/v4")
}

pub fn test_client(transport: &RecordingTransport) -> ImClient {
    ImClient::builder(test_config())
        .transport(transport.clone())
        .signer(CountingSigner::new())
        .clock(ManualClock::new())
        .build()
        .unwrap()
}

/// Posts `body` through a fresh test client and returns what went on the wire.
pub fn sent_body<F>(call: F) -> Value
where
    F: FnOnce(&ImClient) -> Result<crate::client::im::Reply, Error>,
{
    let transport = RecordingTransport::ok(r#"{"ActionStatus":"OK","ErrorCode":0,"ErrorInfo":""}"#);
    let client = test_client(&transport);
    let reply = call(&client).unwrap();
    assert!(!reply.is_failed());
    transport.last().json()
}

pub fn sent_url<F>(call: F) -> String
where
    F: FnOnce(&ImClient) -> Result<crate::client::im::Reply, Error>,
{
    let transport = RecordingTransport::ok("{}");
    let client = test_client(&transport);
    call(&client).unwrap();
    transport.last().url
}

#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub fn capture_logs<R, F: FnOnce() -> R>(f: F) -> (R, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock()).into_owned();
    (result, logs)
}

/// Reverses the URL-safe substitutions and zlib wrapping of a signature.
pub fn decode_sig(token: &str) -> Value {
    let standard: String = token
        .chars()
        .map(|c| match c {
            '*' => '+',
            '-' => '/',
            '_' => '=',
            other => other,
        })
        .collect();
    let compressed = STANDARD.decode(standard).unwrap();
    let mut json = String::new();
    ZlibDecoder::new(&compressed[..])
        .read_to_string(&mut json)
        .unwrap();
    serde_json::from_str(&json).unwrap()
}

static ENV_LOCK: Mutex<()> = parking_lot::const_mutex(());

/// Runs `f` with exactly the given `TCIM_*` variables set. Every other
/// variable the crate reads is removed for the duration of the call.
pub fn with_env<R, F: FnOnce() -> R>(vars: &[(&str, &str)], f: F) -> R {
    const NAMES: [&str; 5] = [
        "TCIM_SDK_APP_ID",
        "TCIM_SECRET_KEY",
        "TCIM_ADMIN",
        "TCIM_BASE_URL",
        "TCIM_VALIDITY_SECS",
    ];
    let _guard = ENV_LOCK.lock();
    for name in NAMES.iter() {
        std::env::remove_var(name);
    }
    for (name, value) in vars {
        std::env::set_var(name, value);
    }
    let result = f();
    for name in NAMES.iter() {
        std::env::remove_var(name);
    }
    result
}
