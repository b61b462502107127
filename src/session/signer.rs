use std::io::Write;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use failure::Error;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use time::OffsetDateTime;

use crate::common::constants::SIG_VERSION;
use crate::common::error::ImError;

type HmacSha256 = Hmac<Sha256>;

/// Produces an opaque token authenticating `identity` for `validity`.
pub trait Signer: Send + Sync {
    fn sign(&self, identity: &str, validity: Duration) -> Result<String, Error>;
}

#[derive(Serialize)]
struct SigDocument<'a> {
    #[serde(rename = "TLS.ver")]
    version: &'a str,
    #[serde(rename = "TLS.identifier")]
    identifier: &'a str,
    #[serde(rename = "TLS.sdkappid")]
    sdk_app_id: u64,
    #[serde(rename = "TLS.expire")]
    expire: u64,
    #[serde(rename = "TLS.time")]
    time: i64,
    #[serde(rename = "TLS.sig")]
    sig: String,
}

/// TLS signature, version 2: an HMAC-SHA256 over the identity, app id,
/// issue time and lifetime, wrapped in a JSON document, zlib-compressed and
/// base64-encoded with the service's URL-safe substitutions.
pub struct TlsSigV2 {
    sdk_app_id: u64,
    key: String,
}

impl TlsSigV2 {
    pub fn new<K: Into<String>>(sdk_app_id: u64, key: K) -> Self {
        Self {
            sdk_app_id,
            key: key.into(),
        }
    }

    /// Signs with an explicit Unix issue time instead of the wall clock.
    pub fn sign_at(&self, identity: &str, validity: Duration, issued_at: i64) -> Result<String, Error> {
        let expire = validity.as_secs();
        let doc = SigDocument {
            version: SIG_VERSION,
            identifier: identity,
            sdk_app_id: self.sdk_app_id,
            expire,
            time: issued_at,
            sig: self.digest(identity, issued_at, expire)?,
        };
        let raw = serde_json::to_vec(&doc)?;

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&raw)?;
        let compressed = encoder.finish()?;

        Ok(url_safe(&STANDARD.encode(compressed)))
    }

    fn digest(&self, identity: &str, issued_at: i64, expire: u64) -> Result<String, Error> {
        let content = format!(
            "TLS.identifier:{}\nTLS.sdkappid:{}\nTLS.time:{}\nTLS.expire:{}\n",
            identity, self.sdk_app_id, issued_at, expire
        );
        let mut mac = HmacSha256::new_from_slice(self.key.as_bytes())
            .map_err(|err| ImError::signing(identity, err.to_string()))?;
        mac.update(content.as_bytes());
        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }
}

impl Signer for TlsSigV2 {
    fn sign(&self, identity: &str, validity: Duration) -> Result<String, Error> {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        self.sign_at(identity, validity, now)
            .map_err(|err| signing_error(identity, err))
    }
}

// Errors already tagged with the identity pass through unchanged.
fn signing_error(identity: &str, err: Error) -> Error {
    match err.downcast::<ImError>() {
        Ok(tagged) => tagged.into(),
        Err(other) => ImError::signing(identity, other.to_string()).into(),
    }
}

fn url_safe(encoded: &str) -> String {
    encoded
        .chars()
        .map(|c| match c {
            '+' => '*',
            '/' => '-',
            '=' => '_',
            other => other,
        })
        .collect()
}
